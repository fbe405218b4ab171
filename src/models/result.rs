//! Optimization result returned to callers.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::{Result, RoutingError};
use crate::evaluation::route_cost;

use super::tour::check_permutation;
use super::Point;

/// Which solving path produced an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exhaustive enumeration; the order is optimal.
    Exact,
    /// Best candidate of the heuristic portfolio.
    Portfolio,
}

/// The outcome of one optimization call.
///
/// Holds the visiting order (global indices into `points` and `matrix`),
/// the inputs it was computed from, and whether index 0 is a depot. When the
/// route returns to the depot, `order` ends with a repeated `0` so the
/// return leg is part of [`total_cost`](Self::total_cost).
///
/// The result is immutable except through [`reorder`](Self::reorder), which
/// re-validates the new order before accepting it. Deserialization goes
/// through [`new`](Self::new) as well.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::models::{OptimizationResult, Point, Strategy};
///
/// let matrix = CostMatrix::from_rows(&[
///     vec![0.0, 5.0, 9.0],
///     vec![5.0, 0.0, 4.0],
///     vec![9.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0)];
///
/// let mut result =
///     OptimizationResult::new(vec![0, 1, 2, 0], points, matrix, true, Strategy::Exact).unwrap();
/// assert_eq!(result.total_cost(), 18.0);
///
/// result.reorder(vec![0, 2, 1, 0]).unwrap();
/// assert!(result.reorder(vec![1, 0, 2, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawResult")]
pub struct OptimizationResult {
    order: Vec<usize>,
    points: Vec<Point>,
    matrix: CostMatrix,
    has_depot: bool,
    strategy: Strategy,
}

/// Unvalidated wire form of [`OptimizationResult`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    order: Vec<usize>,
    points: Vec<Point>,
    matrix: CostMatrix,
    has_depot: bool,
    strategy: Strategy,
}

impl TryFrom<RawResult> for OptimizationResult {
    type Error = RoutingError;

    fn try_from(raw: RawResult) -> Result<Self> {
        Self::new(
            raw.order,
            raw.points,
            raw.matrix,
            raw.has_depot,
            raw.strategy,
        )
    }
}

impl OptimizationResult {
    /// Creates a result after checking that `order` fits `points`/`matrix`.
    pub fn new(
        order: Vec<usize>,
        points: Vec<Point>,
        matrix: CostMatrix,
        has_depot: bool,
        strategy: Strategy,
    ) -> Result<Self> {
        if points.len() != matrix.size() {
            return Err(RoutingError::PointCountMismatch {
                points: points.len(),
                size: matrix.size(),
            });
        }
        let round_trip = has_depot && points.len() > 1 && order.len() == points.len() + 1;
        validate_order(&order, points.len(), has_depot, round_trip)?;
        Ok(Self {
            order,
            points,
            matrix,
            has_depot,
            strategy,
        })
    }

    /// The visiting order as global indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The input points, in matrix index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The cost matrix the order was computed on.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Whether index 0 is a fixed depot.
    pub fn has_depot(&self) -> bool {
        self.has_depot
    }

    /// Whether the order ends with a return to the depot.
    pub fn returns_to_depot(&self) -> bool {
        self.has_depot && self.points.len() > 1 && self.order.len() == self.points.len() + 1
    }

    /// The solving path that produced the order.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Sum of consecutive leg costs along `order`.
    pub fn total_cost(&self) -> f64 {
        route_cost(&self.order, &self.matrix)
    }

    /// Points in visiting order (the depot appears twice on round trips).
    pub fn ordered_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.order.iter().map(move |&i| &self.points[i])
    }

    /// Replaces the order with a user-supplied one.
    ///
    /// The new order must keep the same shape: a permutation of all
    /// indices, starting at the depot when there is one, and ending with the
    /// depot again when the current route is a round trip. On error the
    /// current order is left untouched.
    pub fn reorder(&mut self, order: Vec<usize>) -> Result<()> {
        validate_order(
            &order,
            self.points.len(),
            self.has_depot,
            self.returns_to_depot(),
        )?;
        self.order = order;
        Ok(())
    }
}

fn validate_order(order: &[usize], n: usize, has_depot: bool, round_trip: bool) -> Result<()> {
    let body = if round_trip {
        match order.split_last() {
            Some((&0, body)) => body,
            _ => {
                return Err(RoutingError::InvalidOrder(
                    "round trip must end at the depot".into(),
                ))
            }
        }
    } else {
        order
    };
    check_permutation(body, n)?;
    if has_depot && body.first().is_some_and(|&first| first != 0) {
        return Err(RoutingError::InvalidOrder(
            "route must start at the depot".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Vec<Point>, CostMatrix) {
        let points = (0..4).map(|i| Point::new(0.0, i as f64)).collect();
        let matrix = CostMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid");
        (points, matrix)
    }

    #[test]
    fn test_round_trip_cost_includes_return() {
        let (points, matrix) = setup();
        let r = OptimizationResult::new(vec![0, 1, 3, 2, 0], points, matrix, true, Strategy::Exact)
            .expect("valid");
        assert!(r.returns_to_depot());
        assert_eq!(r.total_cost(), 10.0 + 25.0 + 30.0 + 15.0);
        assert_eq!(r.ordered_points().count(), 5);
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let (mut points, matrix) = setup();
        points.pop();
        let err = OptimizationResult::new(vec![0, 1, 2], points, matrix, false, Strategy::Exact)
            .unwrap_err();
        assert_eq!(err, RoutingError::PointCountMismatch { points: 3, size: 4 });
    }

    #[test]
    fn test_new_rejects_depot_not_first() {
        let (points, matrix) = setup();
        assert!(
            OptimizationResult::new(vec![1, 0, 2, 3], points, matrix, true, Strategy::Exact)
                .is_err()
        );
    }

    #[test]
    fn test_reorder_without_depot() {
        let (points, matrix) = setup();
        let mut r =
            OptimizationResult::new(vec![0, 1, 2, 3], points, matrix, false, Strategy::Exact)
                .expect("valid");
        r.reorder(vec![3, 2, 1, 0]).expect("permutation");
        assert_eq!(r.order(), &[3, 2, 1, 0]);

        assert!(r.reorder(vec![3, 2, 1]).is_err());
        assert!(r.reorder(vec![3, 3, 1, 0]).is_err());
        assert_eq!(r.order(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_reorder_round_trip_keeps_shape() {
        let (points, matrix) = setup();
        let mut r = OptimizationResult::new(
            vec![0, 1, 2, 3, 0],
            points,
            matrix,
            true,
            Strategy::Portfolio,
        )
        .expect("valid");
        r.reorder(vec![0, 3, 2, 1, 0]).expect("valid");
        assert!(r.reorder(vec![0, 3, 2, 1]).is_err());
        assert!(r.reorder(vec![0, 3, 2, 1, 2]).is_err());
    }

    #[test]
    fn test_reorder_one_way_depot() {
        let (points, matrix) = setup();
        let mut r =
            OptimizationResult::new(vec![0, 2, 1, 3], points, matrix, true, Strategy::Exact)
                .expect("valid");
        assert!(!r.returns_to_depot());
        r.reorder(vec![0, 3, 1, 2]).expect("valid");
        assert!(r.reorder(vec![2, 0, 1, 3]).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let (points, matrix) = setup();
        let r = OptimizationResult::new(vec![0, 2, 1, 3], points, matrix, false, Strategy::Exact)
            .expect("valid");
        let json = serde_json::to_string(&r).expect("serialize");
        assert!(json.contains("\"hasDepot\":false"));
        let back: OptimizationResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, r);
    }

    #[test]
    fn test_json_rejects_invalid_order() {
        let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)];
        let matrix = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).expect("valid");
        let r = OptimizationResult::new(vec![0, 1], points, matrix, false, Strategy::Exact)
            .expect("valid");
        let json = serde_json::to_string(&r).expect("serialize");
        assert!(json.contains("\"order\":[0,1]"));

        let out_of_range = json.replace("\"order\":[0,1]", "\"order\":[0,7]");
        assert!(serde_json::from_str::<OptimizationResult>(&out_of_range).is_err());

        let repeated = json.replace("\"order\":[0,1]", "\"order\":[0,0]");
        assert!(serde_json::from_str::<OptimizationResult>(&repeated).is_err());
    }

    #[test]
    fn test_json_rejects_depot_not_first() {
        let (points, matrix) = setup();
        let r = OptimizationResult::new(vec![0, 1, 2, 3], points, matrix, true, Strategy::Exact)
            .expect("valid");
        let json = serde_json::to_string(&r)
            .expect("serialize")
            .replace("\"order\":[0,1,2,3]", "\"order\":[1,0,2,3]");
        let err = serde_json::from_str::<OptimizationResult>(&json).unwrap_err();
        assert!(err.to_string().contains("depot"));
    }
}
