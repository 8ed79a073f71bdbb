//! Drag-gesture tracking for undo.
//!
//! While the user drags, nodes are translated in place and nothing is
//! recorded. The tracker remembers where each selected node's top-left
//! corner was when the gesture started; when it ends, the net displacement
//! is turned into one [`CompoundOperation`] of per-node moves that the undo
//! stack can replay.
//!
//! Only nodes are tracked. Edges have no geometry of their own and follow
//! their endpoints.

use dg_core::{CompoundOperation, Diagram, DiagramElement, DiagramError, ElementId, Point};
use smallvec::SmallVec;

/// A node observed for the current gesture and its top-left at start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedNode {
    pub id: ElementId,
    pub origin: Point,
}

/// Snapshot of node positions for a single gesture.
///
/// Holds ids only, so it never keeps a node alive. A tracker must not be
/// reused across diagram replacements.
#[derive(Debug, Default)]
pub struct MoveTracker {
    tracked: SmallVec<[TrackedNode; 4]>,
}

impl MoveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current top-left of every node in `selection`.
    ///
    /// Replaces any earlier snapshot. Edges are skipped, and selection
    /// order is kept.
    pub fn start_tracking<'a, I>(&mut self, diagram: &Diagram, selection: I)
    where
        I: IntoIterator<Item = &'a DiagramElement>,
    {
        self.tracked.clear();
        for element in selection {
            let DiagramElement::Node(id) = *element else {
                continue;
            };
            match diagram.node(id) {
                Some(node) => self.tracked.push(TrackedNode {
                    id,
                    origin: node.bounds().top_left(),
                }),
                None => log::warn!("not tracking {id}: selected node is not in the diagram"),
            }
        }
        log::debug!("move tracking started for {} node(s)", self.tracked.len());
    }

    /// Describe how far each tracked node travelled since
    /// [`start_tracking`](Self::start_tracking).
    ///
    /// Deltas are taken between top-left corners and truncated toward zero.
    /// Nodes that did not move contribute nothing, so an idle gesture yields
    /// an empty compound. The diagram is only read.
    ///
    /// # Errors
    /// [`DiagramError::UnknownNode`] if a tracked node was removed from the
    /// diagram during the gesture.
    pub fn end_tracking(&self, diagram: &Diagram) -> Result<CompoundOperation, DiagramError> {
        let builder = diagram.builder();
        let mut operation = CompoundOperation::new();
        for tracked in &self.tracked {
            let node = diagram
                .node(tracked.id)
                .ok_or(DiagramError::UnknownNode(tracked.id))?;
            let current = node.bounds().top_left();
            let dx = (current.x - tracked.origin.x) as i32;
            let dy = (current.y - tracked.origin.y) as i32;
            if dx != 0 || dy != 0 {
                log::trace!("{} moved by ({dx}, {dy})", tracked.id);
                operation.add(builder.create_move_node_operation(tracked.id, dx, dy)?);
            }
        }
        log::debug!(
            "move tracking ended: {} of {} node(s) moved",
            operation.len(),
            self.tracked.len()
        );
        Ok(operation)
    }

    /// Nodes in the current snapshot, in selection order.
    pub fn tracked(&self) -> &[TrackedNode] {
        &self.tracked
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::{DiagramNode, DiagramOperation, NodeKind};
    use pretty_assertions::assert_eq;

    fn diagram_with(id: ElementId, x: f32, y: f32) -> Diagram {
        let mut d = Diagram::new();
        d.add_node(DiagramNode::new(id, NodeKind::Note { text: "n".into() }).at(x, y))
            .unwrap();
        d
    }

    #[test]
    fn end_without_start_is_empty() {
        let d = Diagram::new();
        let tracker = MoveTracker::new();
        assert!(tracker.end_tracking(&d).unwrap().is_empty());
    }

    #[test]
    fn truncates_toward_zero() {
        let id = ElementId::intern("mt_subpixel");
        let mut d = diagram_with(id, 0.0, 0.0);
        let mut tracker = MoveTracker::new();
        let selection = [DiagramElement::Node(id)];

        tracker.start_tracking(&d, &selection);
        d.translate_node(id, 0.9, -0.9).unwrap();
        assert!(tracker.end_tracking(&d).unwrap().is_empty());

        tracker.start_tracking(&d, &selection);
        d.translate_node(id, 2.7, -2.7).unwrap();
        let op = tracker.end_tracking(&d).unwrap();
        assert_eq!(op.len(), 1);
        // (2, -2), not the rounded (3, -3).
        assert_eq!(op.description(), "Move @mt_subpixel by (2, -2)");
    }

    #[test]
    fn resize_alone_is_not_a_move() {
        let id = ElementId::intern("mt_resized");
        let mut d = diagram_with(id, 10.0, 10.0);
        let mut tracker = MoveTracker::new();
        tracker.start_tracking(&d, &[DiagramElement::Node(id)]);
        d.node_mut(id).unwrap().set_size(400.0, 300.0);
        assert_eq!(tracker.end_tracking(&d).unwrap().len(), 0);
    }

    #[test]
    fn removed_node_fails_end() {
        let id = ElementId::intern("mt_removed");
        let mut d = diagram_with(id, 0.0, 0.0);
        let mut tracker = MoveTracker::new();
        tracker.start_tracking(&d, &[DiagramElement::Node(id)]);
        d.remove_node(id);
        assert_eq!(
            tracker.end_tracking(&d).unwrap_err(),
            DiagramError::UnknownNode(id)
        );
    }

    #[test]
    fn dangling_selection_entry_is_skipped() {
        let kept = ElementId::intern("mt_kept");
        let d = diagram_with(kept, 5.0, 5.0);
        let mut tracker = MoveTracker::new();
        tracker.start_tracking(
            &d,
            &[
                DiagramElement::Node(ElementId::intern("mt_never_added")),
                DiagramElement::Node(kept),
            ],
        );
        assert_eq!(
            tracker.tracked(),
            &[TrackedNode {
                id: kept,
                origin: Point::new(5.0, 5.0),
            }]
        );
    }

    #[test]
    fn end_leaves_snapshot_in_place() {
        let id = ElementId::intern("mt_kept_snapshot");
        let mut d = diagram_with(id, 0.0, 0.0);
        let mut tracker = MoveTracker::new();
        tracker.start_tracking(&d, &[DiagramElement::Node(id)]);
        d.translate_node(id, 10.0, 0.0).unwrap();
        assert_eq!(tracker.end_tracking(&d).unwrap().len(), 1);
        assert!(!tracker.is_empty());

        // A second end still measures from the same origin.
        d.translate_node(id, 10.0, 0.0).unwrap();
        let op = tracker.end_tracking(&d).unwrap();
        op.undo(&mut d);
        assert_eq!(d.node(id).unwrap().position, Point::new(0.0, 0.0));
    }
}
