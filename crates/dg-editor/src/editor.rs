//! Editor facade: one diagram, the select tool, and its undo history.

use crate::commands::CommandStack;
use crate::config::EditorConfig;
use crate::input::InputEvent;
use crate::tools::SelectTool;
use dg_core::{Diagram, DiagramError, DiagramOperation};

pub struct DiagramEditor {
    pub diagram: Diagram,
    pub tool: SelectTool,
    history: CommandStack,
}

impl DiagramEditor {
    pub fn new(diagram: Diagram, config: &EditorConfig) -> Self {
        Self {
            diagram,
            tool: SelectTool::new(config.shift_axis_lock),
            history: CommandStack::new(config.max_undo_depth),
        }
    }

    /// Route an input event to the tool. A finished drag becomes one undo
    /// step.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<(), DiagramError> {
        if let Some(moved) = self.tool.handle(event, &mut self.diagram)? {
            self.history.record(Box::new(moved));
        }
        Ok(())
    }

    /// Apply a programmatic edit as its own undo step.
    pub fn execute(&mut self, operation: Box<dyn DiagramOperation>) {
        self.history.execute(&mut self.diagram, operation);
    }

    pub fn undo(&mut self) -> Option<String> {
        let desc = self.history.undo(&mut self.diagram);
        self.tool.selection.retain_existing(&self.diagram);
        desc
    }

    pub fn redo(&mut self) -> Option<String> {
        let desc = self.history.redo(&mut self.diagram);
        self.tool.selection.retain_existing(&self.diagram);
        desc
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
