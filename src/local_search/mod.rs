//! Local search operators for improving an order.
//!
//! - [`two_opt`] — Segment reversal (2-opt)
//! - [`three_opt`] — Three-edge reconnection (3-opt)
//!
//! Both keep position 0 fixed, use first-improvement with full-pass
//! repetition, and stop at a local optimum of their neighborhood.

mod three_opt;
mod two_opt;

pub use three_opt::three_opt;
pub use two_opt::two_opt;
