//! Domain model types for route optimization.
//!
//! Points as supplied by the geocoding layer, the closed/open tour variants
//! every solver is parameterized by, and the result handed back to callers.

mod point;
mod result;
mod tour;

pub use point::Point;
pub use result::{OptimizationResult, Strategy};
pub use tour::{check_permutation, TourKind};
