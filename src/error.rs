//! Error type for the validated boundary of the crate.
//!
//! The solver core itself is infallible: it receives an already-validated
//! [`CostMatrix`](crate::distance::CostMatrix). Errors only arise when
//! building matrices, checking requests, or accepting user reorders.

use thiserror::Error;

/// Errors reported at the crate boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A matrix row does not have as many entries as there are rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cost entry is negative.
    #[error("cost from {from} to {to} is negative ({value})")]
    NegativeCost { from: usize, to: usize, value: f64 },

    /// A cost entry is NaN.
    #[error("cost from {from} to {to} is NaN")]
    NanCost { from: usize, to: usize },

    /// Flat matrix data does not match `size * size`.
    #[error("matrix data has {actual} entries, expected {expected}")]
    DataLength { expected: usize, actual: usize },

    /// The number of points differs from the matrix size.
    #[error("{points} points supplied for a matrix of size {size}")]
    PointCountMismatch { points: usize, size: usize },

    /// The start index is not a valid matrix index.
    #[error("start index {start} is out of range for {size} locations")]
    StartOutOfRange { start: usize, size: usize },

    /// A visiting order is not a valid permutation.
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// Solver or GA configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate boundary.
pub type Result<T> = std::result::Result<T, RoutingError>;
