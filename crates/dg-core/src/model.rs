//! Diagram elements: nodes, edges, and the selection-facing element tag.
//!
//! Nodes carry their own geometry. Edges carry none: they are drawn between
//! their endpoint nodes, so moving the nodes is enough to move an edge.

use crate::geom::{Point, Rectangle};
use crate::id::ElementId;
use serde::{Deserialize, Serialize};

// ─── Nodes ───────────────────────────────────────────────────────────────

/// The node kinds a class diagram can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// UML class box.
    Class { name: String },

    /// UML interface box (rendered with a stereotype).
    Interface { name: String },

    /// Free-form sticky note.
    Note { text: String },

    /// Package folder.
    Package { name: String },
}

impl NodeKind {
    /// Size a freshly created node of this kind gets.
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            NodeKind::Class { .. } | NodeKind::Interface { .. } => (100.0, 60.0),
            NodeKind::Note { .. } => (60.0, 40.0),
            NodeKind::Package { .. } => (100.0, 80.0),
        }
    }

    /// Prefix used for generated ids (`class_3`, `note_7`, ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            NodeKind::Class { .. } => "class",
            NodeKind::Interface { .. } => "interface",
            NodeKind::Note { .. } => "note",
            NodeKind::Package { .. } => "package",
        }
    }
}

/// A node placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: ElementId,
    pub kind: NodeKind,

    /// Top-left corner in diagram coordinates.
    pub position: Point,

    pub width: f32,
    pub height: f32,
}

impl DiagramNode {
    /// Create a node at the origin with its kind's default size.
    pub fn new(id: ElementId, kind: NodeKind) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id,
            kind,
            position: Point::default(),
            width,
            height,
        }
    }

    /// Create a node with a generated id.
    pub fn with_fresh_id(kind: NodeKind) -> Self {
        Self::new(ElementId::fresh(kind.id_prefix()), kind)
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Bounding box as currently shown on the canvas.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position = self.position.translated(dx, dy);
    }

    /// Resize in place, keeping the top-left corner fixed.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }
}

// ─── Edges ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeKind {
    #[default]
    Dependency,
    Association,
    Generalization,
    /// Dashed link from a note to the element it annotates.
    NoteConnector,
}

/// A connection between two nodes. Endpoints live in the diagram's graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: ElementId,
    pub kind: EdgeKind,
    pub label: Option<String>,
}

impl Edge {
    pub fn new(id: ElementId, kind: EdgeKind) -> Self {
        Self {
            id,
            kind,
            label: None,
        }
    }
}

// ─── Selection tag ───────────────────────────────────────────────────────

/// Reference to any selectable diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramElement {
    Node(ElementId),
    Edge(ElementId),
}

impl DiagramElement {
    pub fn id(&self) -> ElementId {
        match self {
            DiagramElement::Node(id) | DiagramElement::Edge(id) => *id,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, DiagramElement::Node(_))
    }

    pub fn as_node(&self) -> Option<ElementId> {
        match self {
            DiagramElement::Node(id) => Some(*id),
            DiagramElement::Edge(_) => None,
        }
    }
}
