//! Exhaustive enumeration of visiting orders.
//!
//! # Algorithm
//!
//! Fixes `start` in position 0 and enumerates every ordering of the other
//! n-1 locations by recursive in-place swapping over a single buffer. Each permutation is priced with the variant's cost function and
//! the first minimum encountered is kept.
//!
//! # Complexity
//!
//! O((n-1)! · n). 5040 permutations at n = 8.

use std::iter;

use crate::distance::CostMatrix;
use crate::evaluation::sequence_cost;
use crate::models::TourKind;

/// Returns a minimum-cost order starting at `start`, with its cost.
///
/// Intended for small instances only; the solver dispatches here when
/// `n <= exact_threshold`. Ties are broken by enumeration order. If every
/// order has infinite cost the first enumerated order is returned.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::exact::brute_force;
/// use tour_routing::models::TourKind;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])
/// .unwrap();
/// let (order, cost) = brute_force(&cm, 0, TourKind::Closed);
/// assert_eq!(order[0], 0);
/// assert_eq!(cost, 80.0);
/// ```
pub fn brute_force(matrix: &CostMatrix, start: usize, kind: TourKind) -> (Vec<usize>, f64) {
    let n = matrix.size();
    if n == 0 {
        return (Vec::new(), 0.0);
    }
    assert!(start < n, "start {start} out of range for {n} locations");

    let mut rest: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut best = Best {
        order: Vec::new(),
        cost: f64::INFINITY,
    };
    permute(&mut rest, 0, start, matrix, kind, &mut best);
    (best.order, best.cost)
}

struct Best {
    order: Vec<usize>,
    cost: f64,
}

fn permute(
    rest: &mut [usize],
    depth: usize,
    start: usize,
    matrix: &CostMatrix,
    kind: TourKind,
    best: &mut Best,
) {
    if depth == rest.len() {
        let seq = iter::once(start).chain(rest.iter().copied());
        let cost = sequence_cost(seq, matrix, kind);
        if best.order.is_empty() || cost < best.cost {
            best.cost = cost;
            best.order.clear();
            best.order.push(start);
            best.order.extend_from_slice(rest);
        }
        return;
    }
    for i in depth..rest.len() {
        rest.swap(depth, i);
        permute(rest, depth + 1, start, matrix, kind, best);
        rest.swap(depth, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;

    fn classic() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_classic_closed_optimum() {
        let cm = classic();
        let (order, cost) = brute_force(&cm, 0, TourKind::Closed);
        assert_eq!(cost, 80.0);
        assert_eq!(order[0], 0);
        assert_eq!(tour_cost(&order, &cm, TourKind::Closed), 80.0);
        // First minimum in swap-enumeration order.
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_classic_open_optimum() {
        let cm = classic();
        let (order, cost) = brute_force(&cm, 0, TourKind::Open);
        // 0→1→3→2 = 10 + 25 + 30 = 65 is the cheapest path from 0.
        assert_eq!(cost, 65.0);
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_variants_can_disagree() {
        // A cheap one-way chain 0→1→2→3 with an expensive way back from 3.
        let cm = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 5.0, 5.0],
            vec![5.0, 0.0, 1.0, 5.0],
            vec![5.0, 5.0, 0.0, 1.0],
            vec![50.0, 1.0, 1.0, 0.0],
        ])
        .expect("valid");
        let (open, _) = brute_force(&cm, 0, TourKind::Open);
        let (closed, _) = brute_force(&cm, 0, TourKind::Closed);
        assert_eq!(open, vec![0, 1, 2, 3]);
        assert_ne!(open, closed);
    }

    #[test]
    fn test_nonzero_start() {
        let cm = classic();
        let (order, cost) = brute_force(&cm, 2, TourKind::Closed);
        assert_eq!(order[0], 2);
        assert_eq!(cost, 80.0);
    }

    #[test]
    fn test_degenerate_sizes() {
        let (order, cost) = brute_force(&CostMatrix::new(0), 0, TourKind::Closed);
        assert!(order.is_empty());
        assert_eq!(cost, 0.0);

        let (order, cost) = brute_force(&CostMatrix::new(1), 0, TourKind::Open);
        assert_eq!(order, vec![0]);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_all_unreachable_still_permutation() {
        let mut cm = CostMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    cm.set(i, j, f64::INFINITY);
                }
            }
        }
        let (order, cost) = brute_force(&cm, 0, TourKind::Closed);
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!(cost.is_infinite());
    }

    #[test]
    #[should_panic]
    fn test_start_out_of_range() {
        brute_force(&classic(), 9, TourKind::Closed);
    }
}
