pub mod builder;
pub mod diagram;
pub mod error;
pub mod geom;
pub mod id;
pub mod model;
pub mod operation;

pub use builder::DiagramBuilder;
pub use diagram::Diagram;
pub use error::DiagramError;
pub use geom::{Point, Rectangle};
pub use id::ElementId;
pub use model::*;
pub use operation::{CompoundOperation, DiagramOperation, MoveNodeOperation};
