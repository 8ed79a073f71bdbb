//! Editor configuration.

/// Configuration for [`DiagramEditor`](crate::editor::DiagramEditor).
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Undo steps kept before the oldest is dropped. Default: **100**.
    pub max_undo_depth: usize,

    /// Constrain a drag to its dominant axis while Shift is held.
    /// Default: **true**.
    pub shift_axis_lock: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_undo_depth: 100,
            shift_axis_lock: true,
        }
    }
}
