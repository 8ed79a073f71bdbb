//! Ordered set of selected diagram elements.
//!
//! Order is the order in which elements were selected. The move tracker and
//! the undo stack rely on it, so it is never re-sorted.

use dg_core::{Diagram, DiagramElement, ElementId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionModel {
    elements: Vec<DiagramElement>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `element` unless it is already selected. Returns `true` if it
    /// was added.
    pub fn add(&mut self, element: DiagramElement) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    pub fn remove(&mut self, element: &DiagramElement) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Shift+click behavior: add if absent, remove if present.
    pub fn toggle(&mut self, element: DiagramElement) {
        if !self.remove(&element) {
            self.elements.push(element);
        }
    }

    /// Replace the whole selection with a single element.
    pub fn set(&mut self, element: DiagramElement) {
        self.elements.clear();
        self.elements.push(element);
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn contains(&self, element: &DiagramElement) -> bool {
        self.elements.contains(element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagramElement> {
        self.elements.iter()
    }

    /// Selected node ids, in selection order.
    pub fn nodes(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().filter_map(DiagramElement::as_node)
    }

    /// Select every node, then every edge, in diagram order.
    pub fn select_all(&mut self, diagram: &Diagram) {
        self.elements.clear();
        self.elements
            .extend(diagram.nodes().map(|n| DiagramElement::Node(n.id)));
        self.elements
            .extend(diagram.edges().map(|e| DiagramElement::Edge(e.id)));
    }

    /// Drop elements that no longer exist in `diagram`.
    pub fn retain_existing(&mut self, diagram: &Diagram) {
        self.elements.retain(|e| diagram.contains(e));
    }
}

impl<'a> IntoIterator for &'a SelectionModel {
    type Item = &'a DiagramElement;
    type IntoIter = std::slice::Iter<'a, DiagramElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::{DiagramNode, Edge, EdgeKind, NodeKind};
    use pretty_assertions::assert_eq;

    fn node(name: &str) -> DiagramElement {
        DiagramElement::Node(ElementId::intern(name))
    }

    #[test]
    fn add_ignores_duplicates() {
        let mut sel = SelectionModel::new();
        assert!(sel.add(node("sel_a")));
        assert!(!sel.add(node("sel_a")));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn toggle_and_set() {
        let mut sel = SelectionModel::new();
        sel.toggle(node("sel_a"));
        sel.toggle(node("sel_b"));
        sel.toggle(node("sel_a"));
        assert_eq!(sel.iter().copied().collect::<Vec<_>>(), vec![node("sel_b")]);

        sel.set(node("sel_c"));
        assert_eq!(sel.iter().copied().collect::<Vec<_>>(), vec![node("sel_c")]);
    }

    #[test]
    fn nodes_skips_edges_and_keeps_order() {
        let mut sel = SelectionModel::new();
        sel.add(node("sel_second"));
        sel.add(DiagramElement::Edge(ElementId::intern("sel_edge")));
        sel.add(node("sel_first"));
        assert_eq!(
            sel.nodes().collect::<Vec<_>>(),
            vec![
                ElementId::intern("sel_second"),
                ElementId::intern("sel_first"),
            ]
        );
    }

    #[test]
    fn select_all_then_prune() {
        let mut d = Diagram::new();
        let a = ElementId::intern("sel_all_a");
        let b = ElementId::intern("sel_all_b");
        let link = ElementId::intern("sel_all_link");
        d.add_node(DiagramNode::new(a, NodeKind::Class { name: "A".into() }))
            .unwrap();
        d.add_node(DiagramNode::new(b, NodeKind::Class { name: "B".into() }))
            .unwrap();
        d.restore_edge(Edge::new(link, EdgeKind::Dependency), a, b)
            .unwrap();

        let mut sel = SelectionModel::new();
        sel.select_all(&d);
        assert_eq!(
            sel.iter().copied().collect::<Vec<_>>(),
            vec![
                DiagramElement::Node(a),
                DiagramElement::Node(b),
                DiagramElement::Edge(link),
            ]
        );

        d.remove_node(b);
        sel.retain_existing(&d);
        assert_eq!(sel.iter().copied().collect::<Vec<_>>(), vec![DiagramElement::Node(a)]);
    }
}
