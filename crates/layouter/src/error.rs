//! Errors surfaced by tree mutations.

use indextree::{NodeError, NodeId};
use thiserror::Error;

/// A rejected tree operation. The tree is left exactly as it was.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("node {0:?} does not belong to this tree or was removed")]
    UnknownNode(NodeId),
    #[error("node {0:?} already has a parent; detach it first")]
    AlreadyHasParent(NodeId),
    #[error("inserting {child:?} under {parent:?} would make the node its own ancestor")]
    WouldCreateCycle { parent: NodeId, child: NodeId },
    #[error("child index {index} is out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("node {0:?} has a measure function and cannot hold children")]
    HasMeasureFunc(NodeId),
    #[error("node {0:?} has children and cannot take a measure function")]
    HasChildren(NodeId),
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("node {0:?} has no measure function; only measured leaves are dirtied by hand")]
    NotMeasured(NodeId),
}

impl StructuralError {
    /// Map an arena refusal for attaching `child` under `parent`.
    pub(crate) fn from_arena(error: NodeError, parent: NodeId, child: NodeId) -> Self {
        match error {
            NodeError::Removed => Self::UnknownNode(child),
            _ => Self::WouldCreateCycle { parent, child },
        }
    }
}
