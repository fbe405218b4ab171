//! Route cost evaluation.

use crate::distance::CostMatrix;
use crate::models::TourKind;

/// Sums `matrix[order[k]][order[k + 1]]` over consecutive pairs.
///
/// Empty and single-element orders cost 0. No closing edge is added; a
/// round trip expressed with a trailing repeated index already carries its
/// return leg.
///
/// # Panics
///
/// Panics if `order` contains an index outside the matrix.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::evaluation::route_cost;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 4.0],
///     vec![2.0, 0.0, 3.0],
///     vec![5.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(route_cost(&[0, 1, 2], &cm), 4.0);
/// assert_eq!(route_cost(&[0, 1, 2, 0], &cm), 9.0);
/// assert_eq!(route_cost(&[2], &cm), 0.0);
/// ```
pub fn route_cost(order: &[usize], matrix: &CostMatrix) -> f64 {
    order.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

/// Cost of `order` under the given tour variant.
///
/// For [`TourKind::Closed`] the edge from the last location back to
/// `order[0]` is included; for [`TourKind::Open`] this equals
/// [`route_cost`].
pub fn tour_cost(order: &[usize], matrix: &CostMatrix, kind: TourKind) -> f64 {
    sequence_cost(order.iter().copied(), matrix, kind)
}

/// Cost of a visiting sequence given as an iterator.
///
/// Lets callers price a tentative tour (e.g. an insertion or a segment
/// reversal) without materializing it.
pub fn sequence_cost<I>(order: I, matrix: &CostMatrix, kind: TourKind) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut iter = order.into_iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let mut cost = 0.0;
    let mut prev = first;
    for next in iter {
        cost += matrix.get(prev, next);
        prev = next;
    }
    if kind.includes_return() && prev != first {
        cost += matrix.get(prev, first);
    }
    cost
}
