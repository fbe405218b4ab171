//! Cheapest-insertion constructive heuristic.
//!
//! Starts from the singleton tour `[start]` and repeatedly inserts the
//! (unvisited location, position) pair whose resulting tour is cheapest.
//! Position 0 is never used, so `start` stays first. Ties go to the first
//! pair found scanning locations in index order, then positions left to
//! right.
//!
//! # Complexity
//!
//! O(n³) candidate pairs over the whole run, each priced in O(n).

use std::iter;

use crate::distance::CostMatrix;
use crate::evaluation::sequence_cost;
use crate::models::TourKind;

/// Constructs an order by cheapest insertion from `start`.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::constructive::cheapest_insertion;
/// use tour_routing::models::TourKind;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(cheapest_insertion(&cm, 0, TourKind::Open), vec![0, 1, 2]);
/// ```
pub fn cheapest_insertion(matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize> {
    let n = matrix.size();
    if n == 0 {
        return Vec::new();
    }
    assert!(start < n, "start {start} out of range for {n} locations");

    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();

    while !unvisited.is_empty() {
        let mut best: Option<(usize, usize, f64)> = None;

        for (slot, &node) in unvisited.iter().enumerate() {
            for pos in 1..=tour.len() {
                let seq = tour[..pos]
                    .iter()
                    .copied()
                    .chain(iter::once(node))
                    .chain(tour[pos..].iter().copied());
                let cost = sequence_cost(seq, matrix, kind);
                match best {
                    Some((_, _, bc)) if cost >= bc => {}
                    _ => best = Some((slot, pos, cost)),
                }
            }
        }

        let (slot, pos, _) = best.expect("at least one unvisited location");
        let node = unvisited.remove(slot);
        tour.insert(pos, node);
    }

    tour
}
