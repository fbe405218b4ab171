//! Route cost evaluation shared by every solver.

mod evaluator;

pub use evaluator::{route_cost, sequence_cost, tour_cost};
