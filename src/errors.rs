//! Provides the error type used throughout this crate.

use thiserror::Error;

use crate::tree::{NodeId, Side};

/// The error type used throughout this crate.
///
/// Only tree construction can fail. The walking algorithms accept every tree,
/// the empty one included, as a defined input and therefore return plain
/// values.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Node reference {0} is out of bound")]
    ReferenceOutOfBound(usize),
    #[error("The {0} child of {1} is already occupied")]
    ChildOccupied(Side, NodeId),
}
