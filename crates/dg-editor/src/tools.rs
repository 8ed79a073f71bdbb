//! Selection tool for canvas interactions.
//!
//! Pointer events select nodes and drag them. Dragging is direct
//! manipulation: nodes move on every pointer move, and only the net result
//! of the whole gesture is handed back for the undo stack.
//!
//! Nodes only ever move by whole diagram units. Sub-unit pointer motion is
//! carried over to the next move, so a recorded gesture always undoes back
//! to the exact start position.
//!
//! ## Modifier behaviors
//!
//! | Modifier | Pointer down | Drag |
//! |----------|--------------|------|
//! | *(none)* | Unselected node: select only it. Selected node: keep the whole selection | Move every selected node |
//! | **Shift** | Toggle node in/out of selection | Axis-constrain (if enabled) |
//! | **Escape** key | — | Cancel, restore start positions |
//!
//! A pointer-down that arrives while a drag is still open (the pointer-up
//! was lost) closes that drag first and returns its move.

use crate::input::InputEvent;
use crate::move_tracker::MoveTracker;
use crate::selection::SelectionModel;
use dg_core::{CompoundOperation, Diagram, DiagramElement, DiagramError};

pub struct SelectTool {
    pub selection: SelectionModel,
    tracker: MoveTracker,
    dragging: bool,
    last_x: f32,
    last_y: f32,
    /// Sub-unit motion not yet applied to the nodes.
    carry_x: f32,
    carry_y: f32,
    axis_lock: bool,
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SelectTool {
    pub fn new(axis_lock: bool) -> Self {
        Self {
            selection: SelectionModel::new(),
            tracker: MoveTracker::new(),
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            carry_x: 0.0,
            carry_y: 0.0,
            axis_lock,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handle one input event.
    ///
    /// Returns the gesture's compound move when a drag finishes with at
    /// least one node displaced. The operation is already applied to
    /// `diagram`; record it, don't execute it again.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        diagram: &mut Diagram,
    ) -> Result<Option<CompoundOperation>, DiagramError> {
        match event {
            InputEvent::PointerDown { x, y, modifiers } => {
                let unfinished = self.finish_drag(diagram)?;

                let Some(hit) = diagram.node_at(*x, *y).map(DiagramElement::Node) else {
                    // Empty canvas
                    if !modifiers.shift {
                        self.selection.clear();
                    }
                    return Ok(unfinished);
                };

                if modifiers.shift {
                    self.selection.toggle(hit);
                } else if !self.selection.contains(&hit) {
                    self.selection.set(hit);
                }

                // Shift+click that deselected the node does not start a drag.
                self.dragging = self.selection.contains(&hit);
                if self.dragging {
                    self.last_x = *x;
                    self.last_y = *y;
                    self.carry_x = 0.0;
                    self.carry_y = 0.0;
                    self.tracker.start_tracking(diagram, &self.selection);
                }
                Ok(unfinished)
            }
            InputEvent::PointerMove { x, y, modifiers } => {
                if !self.dragging {
                    return Ok(None);
                }
                let mut dx = x - self.last_x;
                let mut dy = y - self.last_y;
                self.last_x = *x;
                self.last_y = *y;

                if self.axis_lock && modifiers.shift {
                    if dx.abs() > dy.abs() {
                        dy = 0.0;
                    } else {
                        dx = 0.0;
                    }
                }

                self.carry_x += dx;
                self.carry_y += dy;
                let step_x = self.carry_x.trunc();
                let step_y = self.carry_y.trunc();
                self.carry_x -= step_x;
                self.carry_y -= step_y;
                if step_x == 0.0 && step_y == 0.0 {
                    return Ok(None);
                }

                for id in self.selection.nodes() {
                    if let Some(node) = diagram.node_mut(id) {
                        node.translate(step_x, step_y);
                    }
                }
                Ok(None)
            }
            InputEvent::PointerUp { .. } => self.finish_drag(diagram),
            InputEvent::Key { key, .. } if key == "Escape" && self.dragging => {
                self.dragging = false;
                for tracked in self.tracker.tracked() {
                    if let Some(node) = diagram.node_mut(tracked.id) {
                        node.position = tracked.origin;
                    }
                }
                log::debug!("drag cancelled");
                Ok(None)
            }
            InputEvent::Key { .. } => Ok(None),
        }
    }

    /// Close the open drag, if any, and return its net move.
    fn finish_drag(&mut self, diagram: &Diagram) -> Result<Option<CompoundOperation>, DiagramError> {
        if !self.dragging {
            return Ok(None);
        }
        self.dragging = false;
        let moved = self.tracker.end_tracking(diagram)?;
        Ok((!moved.is_empty()).then_some(moved))
    }
}
