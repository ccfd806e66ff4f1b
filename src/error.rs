//! Error vocabulary for tree operations.

use thiserror::Error;

use crate::arena::NodeId;

/// Failures of tree operations. Every variant is a logical precondition
/// violation local to the failed call; the structure is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("parent missing: {0:?} is a root node")]
    ParentMissing(NodeId),

    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("duplicate node found: {0:?}")]
    DuplicateNodeFound(NodeId),

    #[error("nodes not in same tree: {0:?}, {1:?}")]
    NodesNotInSameTree(NodeId, NodeId),

    #[error("cannot remove root node: {0:?}")]
    CannotRemoveRootNode(NodeId),

    #[error("cannot replace root node: {0:?}")]
    CannotReplaceRootNode(NodeId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
