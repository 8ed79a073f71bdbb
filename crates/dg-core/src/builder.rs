//! Operation factory bound to a diagram.
//!
//! The builder validates ids against the diagram it was obtained from, so
//! an operation it hands out always refers to an element that existed at
//! build time.

use crate::diagram::Diagram;
use crate::error::DiagramError;
use crate::id::ElementId;
use crate::operation::MoveNodeOperation;

pub struct DiagramBuilder<'a> {
    diagram: &'a Diagram,
}

impl<'a> DiagramBuilder<'a> {
    pub(crate) fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }

    /// Build an operation that moves `node` by `(dx, dy)` on execute and
    /// by `(-dx, -dy)` on undo. Nothing is applied here.
    ///
    /// # Errors
    /// [`DiagramError::UnknownNode`] if `node` is not in the diagram.
    pub fn create_move_node_operation(
        &self,
        node: ElementId,
        dx: i32,
        dy: i32,
    ) -> Result<MoveNodeOperation, DiagramError> {
        if self.diagram.node(node).is_none() {
            return Err(DiagramError::UnknownNode(node));
        }
        Ok(MoveNodeOperation::new(node, dx, dy))
    }
}
