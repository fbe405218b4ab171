//! Solver orchestration.
//!
//! Small instances (`n <= exact_threshold`) are solved exactly by
//! enumeration. Larger instances run the candidate [`Portfolio`] and keep
//! the cheapest order.
//!
//! - [`solve_tsp`] — Closed tour, default configuration
//! - [`solve_tsp_open`] — Open path, default configuration
//! - [`solve`] — Either variant with an explicit [`SolverConfig`]
//! - [`try_solve`] — Like [`solve`], but reports bad input as an error
//!
//! Every returned order is a permutation of `0..n` that begins with
//! `start`.

mod config;
mod portfolio;

pub use config::SolverConfig;
pub use portfolio::{
    AlternateStartTwoOpt, Candidate, CandidateGenerator, CheapestInsertion, Evolutionary,
    NearestNeighborThreeOpt, NearestNeighborTwoOpt, Portfolio,
};

use log::debug;

use crate::constructive::nearest_neighbor;
use crate::distance::CostMatrix;
use crate::error::{Result, RoutingError};
use crate::exact::brute_force;
use crate::models::{Strategy, TourKind};

/// Solves the closed variant (tour returns to `start`).
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::evaluation::tour_cost;
/// use tour_routing::models::TourKind;
/// use tour_routing::solver::solve_tsp;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let order = solve_tsp(&cm, 0);
/// assert_eq!(order[0], 0);
/// assert_eq!(tour_cost(&order, &cm, TourKind::Closed), 80.0);
/// ```
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
pub fn solve_tsp(matrix: &CostMatrix, start: usize) -> Vec<usize> {
    solve(matrix, start, TourKind::Closed, &SolverConfig::default())
}

/// Solves the open variant (path ends at the last visited location).
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
pub fn solve_tsp_open(matrix: &CostMatrix, start: usize) -> Vec<usize> {
    solve(matrix, start, TourKind::Open, &SolverConfig::default())
}

/// Solves either variant with an explicit configuration.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix, or if the GA
/// runs with a configuration that fails [`GaConfig::validate`](crate::ga::GaConfig::validate).
pub fn solve(matrix: &CostMatrix, start: usize, kind: TourKind, config: &SolverConfig) -> Vec<usize> {
    let n = matrix.size();
    if n == 0 {
        return Vec::new();
    }
    assert!(start < n, "start {start} out of range for {n} locations");

    if strategy_for(n, config) == Strategy::Exact {
        debug!("exact solve: {n} locations, {kind:?}");
        return brute_force(matrix, start, kind).0;
    }

    debug!("portfolio solve: {n} locations, {kind:?}");
    match Portfolio::standard(n, start, config).run(matrix, start, kind) {
        Some(best) => best.order,
        None => nearest_neighbor(matrix, start),
    }
}

/// Checked variant of [`solve`].
///
/// # Errors
///
/// - [`RoutingError::StartOutOfRange`] if `start >= n` for a non-empty matrix
/// - [`RoutingError::InvalidConfig`] if the GA configuration is invalid
pub fn try_solve(
    matrix: &CostMatrix,
    start: usize,
    kind: TourKind,
    config: &SolverConfig,
) -> Result<Vec<usize>> {
    let n = matrix.size();
    if n > 0 && start >= n {
        return Err(RoutingError::StartOutOfRange { start, size: n });
    }
    config.ga.validate().map_err(RoutingError::InvalidConfig)?;
    Ok(solve(matrix, start, kind, config))
}

/// Which path [`solve`] takes for an instance of `n` locations.
pub fn strategy_for(n: usize, config: &SolverConfig) -> Strategy {
    if n <= config.exact_threshold {
        Strategy::Exact
    } else {
        Strategy::Portfolio
    }
}
