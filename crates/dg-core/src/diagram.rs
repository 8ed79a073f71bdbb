//! The diagram: node arena plus the connections between nodes.
//!
//! Nodes are petgraph vertices and diagram edges are petgraph edges, so
//! removing a node drops its connections with it. Lookups by [`ElementId`]
//! go through side indexes that are kept in step with the graph.
//!
//! Paint order is tracked separately from the graph: petgraph hands vacated
//! slots to new nodes, so index order says nothing about stacking.

use crate::builder::DiagramBuilder;
use crate::error::DiagramError;
use crate::id::ElementId;
use crate::model::{DiagramElement, DiagramNode, Edge};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Diagram {
    /// Nodes and their connections. Private so the id indexes stay in sync.
    graph: StableDiGraph<DiagramNode, Edge>,

    node_index: HashMap<ElementId, NodeIndex>,
    edge_index: HashMap<ElementId, EdgeIndex>,

    /// Node ids bottom-most first.
    paint_order: Vec<ElementId>,

    /// Edge ids in insertion order.
    edge_order: Vec<ElementId>,
}

impl Diagram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node on top of the existing ones.
    pub fn add_node(&mut self, node: DiagramNode) -> Result<(), DiagramError> {
        let id = node.id;
        if self.is_id_taken(id) {
            return Err(DiagramError::DuplicateId(id));
        }
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        self.paint_order.push(id);
        Ok(())
    }

    /// Remove a node together with every edge attached to it.
    pub fn remove_node(&mut self, id: ElementId) -> Option<DiagramNode> {
        let idx = self.node_index.remove(&id)?;
        let attached: Vec<ElementId> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, petgraph::Direction::Incoming))
            .map(|e| e.weight().id)
            .collect();
        for edge_id in &attached {
            self.edge_index.remove(edge_id);
        }
        self.edge_order.retain(|e| !attached.contains(e));
        self.paint_order.retain(|n| *n != id);
        self.graph.remove_node(idx)
    }

    /// Connect `from` to `to` with `edge`.
    pub fn restore_edge(
        &mut self,
        edge: Edge,
        from: ElementId,
        to: ElementId,
    ) -> Result<(), DiagramError> {
        let id = edge.id;
        if self.is_id_taken(id) {
            return Err(DiagramError::DuplicateId(id));
        }
        let a = self.index_of(from).ok_or(DiagramError::UnknownNode(from))?;
        let b = self.index_of(to).ok_or(DiagramError::UnknownNode(to))?;
        let idx = self.graph.add_edge(a, b, edge);
        self.edge_index.insert(id, idx);
        self.edge_order.push(id);
        Ok(())
    }

    pub fn remove_edge(&mut self, id: ElementId) -> Option<Edge> {
        let idx = self.edge_index.remove(&id)?;
        self.edge_order.retain(|e| *e != id);
        self.graph.remove_edge(idx)
    }

    fn index_of(&self, id: ElementId) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    pub fn node(&self, id: ElementId) -> Option<&DiagramNode> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    pub fn node_mut(&mut self, id: ElementId) -> Option<&mut DiagramNode> {
        self.index_of(id).map(|idx| &mut self.graph[idx])
    }

    pub fn edge(&self, id: ElementId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|idx| &self.graph[*idx])
    }

    /// `(from, to)` node ids of an edge.
    pub fn edge_endpoints(&self, id: ElementId) -> Option<(ElementId, ElementId)> {
        let idx = self.edge_index.get(&id)?;
        let (a, b) = self.graph.edge_endpoints(*idx)?;
        Some((self.graph[a].id, self.graph[b].id))
    }

    pub fn contains(&self, element: &DiagramElement) -> bool {
        match element {
            DiagramElement::Node(id) => self.node_index.contains_key(id),
            DiagramElement::Edge(id) => self.edge_index.contains_key(id),
        }
    }

    /// Nodes in paint order (first = bottom-most).
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &DiagramNode> {
        self.paint_order.iter().filter_map(|id| self.node(*id))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_order.iter().filter_map(|id| self.edge(*id))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Topmost node whose bounds contain `(px, py)`.
    pub fn node_at(&self, px: f32, py: f32) -> Option<ElementId> {
        self.nodes()
            .rev()
            .find(|n| n.bounds().contains(px, py))
            .map(|n| n.id)
    }

    /// Move a node in place without recording anything for undo.
    pub fn translate_node(&mut self, id: ElementId, dx: f32, dy: f32) -> Result<(), DiagramError> {
        let node = self.node_mut(id).ok_or(DiagramError::UnknownNode(id))?;
        node.translate(dx, dy);
        Ok(())
    }

    /// Factory for reversible operations on this diagram.
    pub fn builder(&self) -> DiagramBuilder<'_> {
        DiagramBuilder::new(self)
    }

    fn is_id_taken(&self, id: ElementId) -> bool {
        self.node_index.contains_key(&id) || self.edge_index.contains_key(&id)
    }
}
