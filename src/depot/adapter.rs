use log::debug;

use super::DepotPolicy;
use crate::distance::CostMatrix;
use crate::error::{Result, RoutingError};
use crate::models::{OptimizationResult, Point};
use crate::solver::{solve, strategy_for, SolverConfig};

/// Plans a visiting order over a full matrix in which index 0 may be a
/// depot.
///
/// With a depot, the stops `1..n` are solved on their own submatrix
/// starting from stop 1, mapped back to global indices and prefixed with
/// the depot. A round trip also ends with the depot, so the return leg is
/// part of the order's cost.
///
/// # Examples
///
/// ```
/// use tour_routing::depot::{plan_route, DepotPolicy};
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::solver::SolverConfig;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let config = SolverConfig::default();
///
/// let round = plan_route(&cm, DepotPolicy::RoundTrip, &config);
/// assert_eq!(round.len(), 5);
/// assert_eq!((round[0], round[4]), (0, 0));
///
/// let one_way = plan_route(&cm, DepotPolicy::OneWay, &config);
/// assert_eq!(one_way.len(), 4);
/// assert_eq!(one_way[0], 0);
/// ```
pub fn plan_route(matrix: &CostMatrix, policy: DepotPolicy, config: &SolverConfig) -> Vec<usize> {
    let n = matrix.size();
    if !policy.has_depot() {
        return solve(matrix, 0, policy.kind(), config);
    }
    if n <= 1 {
        return (0..n).collect();
    }

    let stops = matrix.without_first();
    debug!("depot route: {} stops, {policy:?}", stops.size());
    let local = solve(&stops, 0, policy.kind(), config);

    let mut order = Vec::with_capacity(n + 1);
    order.push(0);
    order.extend(local.into_iter().map(|i| i + 1));
    if policy == DepotPolicy::RoundTrip {
        order.push(0);
    }
    order
}

/// Plans a route and packages it with its inputs.
///
/// # Errors
///
/// - [`RoutingError::PointCountMismatch`] if `points` and `matrix` differ in size
/// - [`RoutingError::InvalidConfig`] if the GA configuration is invalid
pub fn optimize(
    points: Vec<Point>,
    matrix: CostMatrix,
    policy: DepotPolicy,
    config: &SolverConfig,
) -> Result<OptimizationResult> {
    if points.len() != matrix.size() {
        return Err(RoutingError::PointCountMismatch {
            points: points.len(),
            size: matrix.size(),
        });
    }
    config.ga.validate().map_err(RoutingError::InvalidConfig)?;

    let order = plan_route(&matrix, policy, config);
    let solved = if policy.has_depot() {
        matrix.size().saturating_sub(1)
    } else {
        matrix.size()
    };
    OptimizationResult::new(
        order,
        points,
        matrix,
        policy.has_depot(),
        strategy_for(solved, config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{route_cost, tour_cost};
    use crate::ga::GaConfig;
    use crate::models::{Strategy, TourKind};

    fn classic() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid")
    }

    fn line_points(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(37.5, 127.0 + i as f64 * 0.01)).collect()
    }

    #[test]
    fn test_round_trip_shape_and_cost() {
        let cm = classic();
        let order = plan_route(&cm, DepotPolicy::RoundTrip, &SolverConfig::default());
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        assert_eq!(order[4], 0);
        let mut stops = order[1..4].to_vec();
        stops.sort_unstable();
        assert_eq!(stops, vec![1, 2, 3]);

        // Stops 1..=3 as a closed tour from stop 1: 1-2-3 and 1-3-2 both cost 90.
        let sub = cm.without_first();
        let local: Vec<usize> = order[1..4].iter().map(|&i| i - 1).collect();
        assert_eq!(local[0], 0);
        assert_eq!(tour_cost(&local, &sub, TourKind::Closed), 90.0);

        let last = order[3];
        let expected = cm.get(0, order[1]) + route_cost(&local, &sub) + cm.get(last, 0);
        assert_eq!(route_cost(&order, &cm), expected);
    }

    #[test]
    fn test_one_way_has_no_trailing_depot() {
        let cm = classic();
        let order = plan_route(&cm, DepotPolicy::OneWay, &SolverConfig::default());
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 0);
        assert_ne!(order[3], 0);
        // Open path over stops from stop 1: 1-3-2 costs 55, 1-2-3 costs 65.
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_no_depot_solves_full_matrix() {
        let cm = classic();
        let order = plan_route(&cm, DepotPolicy::NoDepot, &SolverConfig::default());
        assert_eq!(order.len(), 4);
        assert_eq!(tour_cost(&order, &cm, TourKind::Closed), 80.0);
    }

    #[test]
    fn test_depot_only_and_empty() {
        let config = SolverConfig::default();
        for policy in [DepotPolicy::NoDepot, DepotPolicy::RoundTrip, DepotPolicy::OneWay] {
            assert_eq!(plan_route(&CostMatrix::new(1), policy, &config), vec![0]);
            assert!(plan_route(&CostMatrix::new(0), policy, &config).is_empty());
        }
    }

    #[test]
    fn test_depot_with_one_stop() {
        let cm = CostMatrix::from_rows(&[vec![0.0, 4.0], vec![6.0, 0.0]]).expect("valid");
        let config = SolverConfig::default();
        assert_eq!(plan_route(&cm, DepotPolicy::RoundTrip, &config), vec![0, 1, 0]);
        assert_eq!(plan_route(&cm, DepotPolicy::OneWay, &config), vec![0, 1]);
    }

    #[test]
    fn test_optimize_builds_result() {
        let points = line_points(4);
        let cm = CostMatrix::from_points_haversine(&points, crate::distance::DEFAULT_SPEED_MPS)
            .expect("valid speed");
        let result = optimize(points, cm, DepotPolicy::RoundTrip, &SolverConfig::default())
            .expect("valid request");
        assert!(result.has_depot());
        assert!(result.returns_to_depot());
        assert_eq!(result.strategy(), Strategy::Exact);
        assert_eq!(result.order().len(), 5);
        assert!(result.total_cost() > 0.0);
    }

    #[test]
    fn test_optimize_large_request_uses_portfolio() {
        let points = line_points(12);
        let cm = CostMatrix::from_points_haversine(&points, crate::distance::DEFAULT_SPEED_MPS)
            .expect("valid speed");
        let config = SolverConfig::default().with_ga(GaConfig::default().with_seed(1));
        let result = optimize(points, cm, DepotPolicy::OneWay, &config).expect("valid request");
        assert_eq!(result.strategy(), Strategy::Portfolio);
        assert_eq!(result.order().len(), 12);
        assert!(!result.returns_to_depot());
    }

    #[test]
    fn test_optimize_rejects_bad_input() {
        let err = optimize(line_points(3), classic(), DepotPolicy::NoDepot, &SolverConfig::default())
            .unwrap_err();
        assert_eq!(err, RoutingError::PointCountMismatch { points: 3, size: 4 });

        let bad = SolverConfig::default().with_ga(GaConfig::default().with_population_size(0));
        assert!(matches!(
            optimize(line_points(4), classic(), DepotPolicy::NoDepot, &bad),
            Err(RoutingError::InvalidConfig(_))
        ));
    }
}
