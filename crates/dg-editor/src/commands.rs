//! Undo/Redo command stack.
//!
//! Every entry is a reversible [`DiagramOperation`]. Undo pops an entry and
//! reverts it; redo re-executes it.
//!
//! Drag gestures are not recorded move-by-move. The select tool applies
//! pointer motion live and hands over one compound move at the end of the
//! gesture, which is pushed with [`CommandStack::record`] because the
//! diagram already reflects it.

use dg_core::{Diagram, DiagramOperation};

/// Manages bounded undo/redo stacks of diagram operations.
pub struct CommandStack {
    undo_stack: Vec<Box<dyn DiagramOperation>>,
    redo_stack: Vec<Box<dyn DiagramOperation>>,
    /// Maximum undo depth.
    max_depth: usize,
}

impl CommandStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Apply `operation` to the diagram and push it to the undo stack.
    pub fn execute(&mut self, diagram: &mut Diagram, operation: Box<dyn DiagramOperation>) {
        operation.execute(diagram);
        self.record(operation);
    }

    /// Push an operation whose effect is already visible in the diagram.
    pub fn record(&mut self, operation: Box<dyn DiagramOperation>) {
        log::debug!("recorded: {}", operation.description());
        self.undo_stack.push(operation);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }

        // Clear redo stack on new action
        self.redo_stack.clear();
    }

    /// Revert the last operation. Returns its description.
    pub fn undo(&mut self, diagram: &mut Diagram) -> Option<String> {
        let op = self.undo_stack.pop()?;
        op.undo(diagram);
        let desc = op.description();
        self.redo_stack.push(op);
        Some(desc)
    }

    /// Re-apply the last undone operation. Returns its description.
    pub fn redo(&mut self, diagram: &mut Diagram) -> Option<String> {
        let op = self.redo_stack.pop()?;
        op.execute(diagram);
        let desc = op.description();
        self.undo_stack.push(op);
        Some(desc)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }
}
