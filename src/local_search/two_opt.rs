//! 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < k`, reverse the segment
//! `order[i..=k]` and keep the reversal if the whole tour gets strictly
//! cheaper. The scan continues on the mutated tour; passes repeat until one
//! completes without an improving move (first-improvement strategy).
//!
//! Position 0 never moves, so the start location is preserved. Candidates
//! are priced by full recomputation rather than an edge delta: with a
//! directed matrix, reversing a segment changes the cost of every edge
//! inside it.
//!
//! # Complexity
//!
//! O(n³) per pass (n² moves, O(n) pricing each).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::trace;

use crate::distance::CostMatrix;
use crate::evaluation::{sequence_cost, tour_cost};
use crate::models::TourKind;

/// Applies 2-opt to `order` and returns the improved order with its cost.
///
/// The result never costs more than the input.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::evaluation::tour_cost;
/// use tour_routing::local_search::two_opt;
/// use tour_routing::models::TourKind;
///
/// // Points on a line at x = 0, 1, 2, 3.
/// let mut cm = CostMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let (improved, cost) = two_opt(&[0, 2, 1, 3], &cm, TourKind::Open);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert_eq!(cost, 3.0);
/// ```
pub fn two_opt(order: &[usize], matrix: &CostMatrix, kind: TourKind) -> (Vec<usize>, f64) {
    let mut best = order.to_vec();
    let mut best_cost = tour_cost(&best, matrix, kind);
    let n = best.len();
    if n < 3 {
        return (best, best_cost);
    }

    let mut improved = true;
    let mut pass = 0usize;
    while improved {
        improved = false;
        pass += 1;

        for i in 1..n - 1 {
            for k in (i + 1)..n {
                let cost = reversed_cost(&best, i, k, matrix, kind);
                if cost < best_cost {
                    best[i..=k].reverse();
                    best_cost = cost;
                    improved = true;
                }
            }
        }

        trace!("2-opt pass {pass}: cost {best_cost}");
    }

    (best, best_cost)
}

/// Cost of `order` with `order[i..=k]` reversed, without materializing it.
fn reversed_cost(order: &[usize], i: usize, k: usize, matrix: &CostMatrix, kind: TourKind) -> f64 {
    let seq = order[..i]
        .iter()
        .chain(order[i..=k].iter().rev())
        .chain(order[k + 1..].iter())
        .copied();
    sequence_cost(seq, matrix, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_with_center() -> CostMatrix {
        // 0 = center (0,0); 1..=4 = corners of a 2x2 square.
        let pts = [(0.0, 0.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)];
        let mut cm = CostMatrix::new(pts.len());
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate() {
                let d: f64 = (a.0 - b.0) * (a.0 - b.0) + (a.1 - b.1) * (a.1 - b.1);
                cm.set(i, j, d.sqrt());
            }
        }
        cm
    }

    #[test]
    fn test_2opt_already_optimal() {
        let cm = square_with_center();
        let initial = vec![0, 1, 2, 3, 4];
        let initial_cost = tour_cost(&initial, &cm, TourKind::Closed);
        let (improved, cost) = two_opt(&initial, &cm, TourKind::Closed);
        assert_eq!(improved, initial);
        assert_eq!(cost, initial_cost);
    }

    #[test]
    fn test_2opt_removes_crossing() {
        let cm = square_with_center();
        let initial = vec![0, 1, 3, 2, 4];
        let initial_cost = tour_cost(&initial, &cm, TourKind::Closed);
        let (improved, cost) = two_opt(&initial, &cm, TourKind::Closed);
        assert!(cost < initial_cost);
        assert!((cost - tour_cost(&improved, &cm, TourKind::Closed)).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_keeps_start() {
        let cm = square_with_center();
        for kind in [TourKind::Closed, TourKind::Open] {
            let (improved, _) = two_opt(&[2, 0, 4, 1, 3], &cm, kind);
            assert_eq!(improved[0], 2);
            let mut sorted = improved.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_2opt_idempotent() {
        let cm = square_with_center();
        let (once, cost1) = two_opt(&[0, 3, 1, 4, 2], &cm, TourKind::Open);
        let (twice, cost2) = two_opt(&once, &cm, TourKind::Open);
        assert_eq!(cost1, cost2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_2opt_respects_direction() {
        // Cheap only in the 0→1→2→3 direction.
        let cm = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 9.0, 9.0],
            vec![9.0, 0.0, 1.0, 9.0],
            vec![9.0, 9.0, 0.0, 1.0],
            vec![1.0, 9.0, 9.0, 0.0],
        ])
        .expect("valid");
        let (improved, cost) = two_opt(&[0, 3, 2, 1], &cm, TourKind::Closed);
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert_eq!(cost, 4.0);
    }

    #[test]
    fn test_2opt_short_orders() {
        let cm = square_with_center();
        assert_eq!(two_opt(&[], &cm, TourKind::Closed), (vec![], 0.0));
        assert_eq!(two_opt(&[3], &cm, TourKind::Closed), (vec![3], 0.0));
        let (pair, _) = two_opt(&[1, 2], &cm, TourKind::Open);
        assert_eq!(pair, vec![1, 2]);
    }

    fn instance() -> impl Strategy<Value = (CostMatrix, Vec<usize>)> {
        (3usize..=10).prop_flat_map(|n| {
            (
                prop::collection::vec(0.0f64..50.0, n * n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
                .prop_map(move |(data, order)| {
                    (CostMatrix::from_data(n, data).expect("non-negative"), order)
                })
        })
    }

    proptest! {
        #[test]
        fn prop_2opt_never_worsens((cm, order) in instance()) {
            for kind in [TourKind::Closed, TourKind::Open] {
                let before = tour_cost(&order, &cm, kind);
                let (improved, cost) = two_opt(&order, &cm, kind);
                prop_assert!(cost <= before);
                prop_assert_eq!(improved[0], order[0]);
                prop_assert!((cost - tour_cost(&improved, &cm, kind)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_2opt_idempotent((cm, order) in instance()) {
            let (once, cost1) = two_opt(&order, &cm, TourKind::Closed);
            let (_, cost2) = two_opt(&once, &cm, TourKind::Closed);
            prop_assert_eq!(cost1, cost2);
        }
    }
}
