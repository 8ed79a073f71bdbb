//! Reversible diagram operations.
//!
//! An operation is a value that can be applied to a diagram and reverted.
//! Operations hold element ids, never references, so they can sit on an
//! undo stack for as long as the editor lives.

use crate::diagram::Diagram;
use crate::id::ElementId;
use std::fmt;

/// A reversible edit of a diagram.
///
/// `undo` followed by `execute` must leave the diagram as it was.
pub trait DiagramOperation: fmt::Debug {
    fn execute(&self, diagram: &mut Diagram);

    fn undo(&self, diagram: &mut Diagram);

    /// Short label for menus and logs, e.g. `Move @order by (20, 0)`.
    fn description(&self) -> String;
}

// ─── Move ────────────────────────────────────────────────────────────────

/// Translate one node by a whole-unit offset.
///
/// Built by [`DiagramBuilder::create_move_node_operation`](crate::DiagramBuilder::create_move_node_operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveNodeOperation {
    node: ElementId,
    dx: i32,
    dy: i32,
}

impl MoveNodeOperation {
    pub(crate) fn new(node: ElementId, dx: i32, dy: i32) -> Self {
        Self { node, dx, dy }
    }

    pub fn node(&self) -> ElementId {
        self.node
    }

    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    fn shift(&self, diagram: &mut Diagram, sign: i32) {
        match diagram.node_mut(self.node) {
            Some(node) => node.translate((sign * self.dx) as f32, (sign * self.dy) as f32),
            None => log::warn!("move of {} skipped: node is no longer in the diagram", self.node),
        }
    }
}

impl DiagramOperation for MoveNodeOperation {
    fn execute(&self, diagram: &mut Diagram) {
        self.shift(diagram, 1);
    }

    fn undo(&self, diagram: &mut Diagram) {
        self.shift(diagram, -1);
    }

    fn description(&self) -> String {
        format!("Move {} by ({}, {})", self.node, self.dx, self.dy)
    }
}

// ─── Compound ────────────────────────────────────────────────────────────

/// Ordered group of operations undone and redone as one step.
///
/// Children execute in insertion order and undo in reverse order.
#[derive(Debug, Default)]
pub struct CompoundOperation {
    operations: Vec<Box<dyn DiagramOperation>>,
}

impl CompoundOperation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, operation: impl DiagramOperation + 'static) {
        self.operations.push(Box::new(operation));
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn DiagramOperation> {
        self.operations.get(index).map(|op| op.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DiagramOperation> {
        self.operations.iter().map(|op| op.as_ref())
    }
}

impl DiagramOperation for CompoundOperation {
    fn execute(&self, diagram: &mut Diagram) {
        for op in &self.operations {
            op.execute(diagram);
        }
    }

    fn undo(&self, diagram: &mut Diagram) {
        for op in self.operations.iter().rev() {
            op.undo(diagram);
        }
    }

    fn description(&self) -> String {
        match self.operations.as_slice() {
            [] => "No change".to_string(),
            [only] => only.description(),
            many => format!("{} changes", many.len()),
        }
    }
}
