use crate::node_ref::NodeHandle;

/// Errors raised by [`Document`](crate::Document) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The handle does not point at a node of the mounted tree.
    #[error("no node at {0}")]
    NodeNotFound(NodeHandle),

    /// The node exists but cannot receive focus.
    #[error("node at {0} is not focusable")]
    NotFocusable(NodeHandle),
}
