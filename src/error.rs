//! Errors returned by fallible construction.

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Dimensionality mismatches between a tree and its points are not
/// represented here: `K` is a const generic, so they are compile errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SaplingError {
    /// The split axis passed to
    /// [`KdTree::with_split_axis`](crate::KdTree::with_split_axis) was not in
    /// `[0, K)`.
    #[error("split axis {axis} is out of range for a {dims}-dimensional tree")]
    SplitAxisOutOfRange {
        /// the rejected axis
        axis: usize,
        /// the tree's dimensionality `K`
        dims: usize,
    },
}

/// Alias for a `Result` with this crate's error type.
pub type Result<T> = std::result::Result<T, SaplingError>;
