//! Travel cost matrices.
//!
//! Provides a dense, directed cost matrix consumed by every solver, plus a
//! haversine travel-time builder for callers without a routing service.

mod matrix;

pub use matrix::{CostMatrix, DEFAULT_SPEED_MPS};
