use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdIndexError {
    /// A nearest-neighbor query was issued against a tree without any points.
    #[error("Cannot query an empty tree")]
    EmptyTree,

    /// A coordinate sequence did not have the tree's dimensionality.
    #[error("Expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, KdIndexError>;
