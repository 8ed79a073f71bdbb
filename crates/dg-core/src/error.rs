use crate::id::ElementId;
use thiserror::Error;

/// Errors raised by diagram edits and the operation factory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("no node {0} in the diagram")]
    UnknownNode(ElementId),

    #[error("no edge {0} in the diagram")]
    UnknownEdge(ElementId),

    #[error("element id {0} is already in use")]
    DuplicateId(ElementId),
}
