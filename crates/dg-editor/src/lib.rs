pub mod commands;
pub mod config;
pub mod editor;
pub mod input;
pub mod move_tracker;
pub mod selection;
pub mod tools;

pub use commands::CommandStack;
pub use config::EditorConfig;
pub use editor::DiagramEditor;
pub use input::{InputEvent, Modifiers};
pub use move_tracker::{MoveTracker, TrackedNode};
pub use selection::SelectionModel;
pub use tools::SelectTool;
