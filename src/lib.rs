//! # tour-routing
//!
//! Heuristic traveling salesperson solver over a directed cost matrix, for
//! closed tours (back to the start) and open paths.
//!
//! Instances of up to eight locations are solved exactly. Larger ones run a
//! portfolio of construction heuristics, local search and a small genetic
//! algorithm, and keep the cheapest result.
//!
//! ## Modules
//!
//! - [`distance`] — Cost matrix (validated construction, submatrices, haversine builder)
//! - [`models`] — Tour variants, points and optimization results
//! - [`evaluation`] — Route cost evaluation
//! - [`exact`] — Brute-force exact solver
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Cheapest Insertion)
//! - [`local_search`] — Local search operators (2-opt, 3-opt)
//! - [`ga`] — Genetic algorithm (order crossover, swap mutation, elitism)
//! - [`solver`] — Exact dispatch and the candidate portfolio
//! - [`depot`] — Depot handling and request-level optimization
//! - [`error`] — Error type for validated inputs
//!
//! ## Example
//!
//! ```
//! use tour_routing::depot::{optimize, DepotPolicy};
//! use tour_routing::distance::{CostMatrix, DEFAULT_SPEED_MPS};
//! use tour_routing::models::Point;
//! use tour_routing::solver::SolverConfig;
//!
//! let points = vec![
//!     Point::new(37.5665, 126.9780).with_label("depot"),
//!     Point::new(37.5700, 126.9820),
//!     Point::new(37.5600, 126.9900),
//!     Point::new(37.5550, 126.9700),
//! ];
//! let matrix = CostMatrix::from_points_haversine(&points, DEFAULT_SPEED_MPS)?;
//! let result = optimize(points, matrix, DepotPolicy::RoundTrip, &SolverConfig::default())?;
//!
//! assert_eq!(result.order().first(), Some(&0));
//! assert_eq!(result.order().last(), Some(&0));
//! assert!(result.total_cost() > 0.0);
//! # Ok::<(), tour_routing::error::RoutingError>(())
//! ```

pub mod constructive;
pub mod depot;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, RoutingError};
