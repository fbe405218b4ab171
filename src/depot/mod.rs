//! Depot handling at the request boundary.
//!
//! The solvers treat every index alike. This module is the only place that
//! knows index 0 can be a depot: it solves the stops on their own
//! submatrix and re-inserts the depot around the result.

mod adapter;
mod policy;

pub use adapter::{optimize, plan_route};
pub use policy::DepotPolicy;
