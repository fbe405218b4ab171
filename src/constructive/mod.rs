//! Constructive heuristics for building an initial order.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk, O(n²)
//! - [`nearest_neighbor_from`] — Nearest-neighbor continuation of a fixed prefix
//! - [`cheapest_insertion`] — Cheapest (location, position) insertion, O(n³)

mod cheapest_insertion;
mod nearest_neighbor;

pub use cheapest_insertion::cheapest_insertion;
pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_from};
