//! 3-opt improvement.
//!
//! # Algorithm
//!
//! For cut positions `1 <= i < j < k <= n` the tour splits into
//! `A = order[..i]`, `B = order[i..j]`, `C = order[j..k]` and
//! `D = order[k..]`. Seven reconnections of `B` and `C` are tried (the
//! identity excluded); the first one that makes the whole tour strictly
//! cheaper is applied and the scan continues on the mutated tour. Passes
//! repeat until one completes without an improving move.
//!
//! `A` is never empty, so the start location stays in position 0.
//!
//! # Complexity
//!
//! O(n⁴) per pass (n³ triples × 7 patterns, O(n) pricing each).
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//! *Bell System Technical Journal* 44(10), 2245-2269.

use log::trace;

use crate::distance::CostMatrix;
use crate::evaluation::tour_cost;
use crate::models::TourKind;

/// Number of non-identity reconnection patterns per triple.
const PATTERNS: u8 = 7;

/// Applies 3-opt to `order` and returns the improved order with its cost.
///
/// The result never costs more than the input.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::evaluation::tour_cost;
/// use tour_routing::local_search::three_opt;
/// use tour_routing::models::TourKind;
///
/// let mut cm = CostMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let initial = [0, 3, 4, 1, 2];
/// let (improved, cost) = three_opt(&initial, &cm, TourKind::Open);
/// assert!(cost <= tour_cost(&initial, &cm, TourKind::Open));
/// assert_eq!(improved[0], 0);
/// ```
pub fn three_opt(order: &[usize], matrix: &CostMatrix, kind: TourKind) -> (Vec<usize>, f64) {
    let mut best = order.to_vec();
    let mut best_cost = tour_cost(&best, matrix, kind);
    let n = best.len();
    if n < 4 {
        return (best, best_cost);
    }

    let mut candidate = Vec::with_capacity(n);
    let mut improved = true;
    let mut pass = 0usize;
    while improved {
        improved = false;
        pass += 1;

        for i in 1..n - 1 {
            for j in (i + 1)..n {
                for k in (j + 1)..=n {
                    for pattern in 1..=PATTERNS {
                        reconnect(&best, i, j, k, pattern, &mut candidate);
                        let cost = tour_cost(&candidate, matrix, kind);
                        if cost < best_cost {
                            best.copy_from_slice(&candidate);
                            best_cost = cost;
                            improved = true;
                            break;
                        }
                    }
                }
            }
        }

        trace!("3-opt pass {pass}: cost {best_cost}");
    }

    (best, best_cost)
}

/// Writes `A + reconnect(B, C) + D` into `out`.
///
/// ```text
/// 1: A B  C' D    2: A B' C  D    3: A B' C' D
/// 4: A C  B  D    5: A C  B' D    6: A C' B  D    7: A C' B' D
/// ```
fn reconnect(order: &[usize], i: usize, j: usize, k: usize, pattern: u8, out: &mut Vec<usize>) {
    let seg_a = &order[..i];
    let seg_b = &order[i..j];
    let seg_c = &order[j..k];
    let seg_d = &order[k..];

    out.clear();
    out.extend_from_slice(seg_a);
    match pattern {
        1 => {
            out.extend_from_slice(seg_b);
            out.extend(seg_c.iter().rev());
        }
        2 => {
            out.extend(seg_b.iter().rev());
            out.extend_from_slice(seg_c);
        }
        3 => {
            out.extend(seg_b.iter().rev());
            out.extend(seg_c.iter().rev());
        }
        4 => {
            out.extend_from_slice(seg_c);
            out.extend_from_slice(seg_b);
        }
        5 => {
            out.extend_from_slice(seg_c);
            out.extend(seg_b.iter().rev());
        }
        6 => {
            out.extend(seg_c.iter().rev());
            out.extend_from_slice(seg_b);
        }
        7 => {
            out.extend(seg_c.iter().rev());
            out.extend(seg_b.iter().rev());
        }
        _ => unreachable!("3-opt pattern out of range"),
    }
    out.extend_from_slice(seg_d);
}
