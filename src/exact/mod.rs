//! Exact solving for tiny instances.
//!
//! - [`brute_force`] — exhaustive permutation search, O((n-1)!)

mod brute_force;

pub use brute_force::brute_force;
