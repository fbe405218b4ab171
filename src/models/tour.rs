//! Tour variants and order validation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Whether a tour returns to its first location.
///
/// Every algorithm in this crate is written once and parameterized by this
/// flag; the only behavioural difference is whether the cost of the closing
/// edge `order[last] -> order[0]` is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourKind {
    /// Classic TSP: the tour returns to its start.
    Closed,
    /// Path: the tour ends at the last visited location.
    Open,
}

impl TourKind {
    /// Returns `true` if the closing edge is part of the cost.
    pub fn includes_return(self) -> bool {
        matches!(self, TourKind::Closed)
    }
}

/// Checks that `order` is a permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use tour_routing::models::check_permutation;
///
/// assert!(check_permutation(&[2, 0, 1], 3).is_ok());
/// assert!(check_permutation(&[0, 0, 1], 3).is_err());
/// ```
pub fn check_permutation(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(RoutingError::InvalidOrder(format!(
            "expected {n} entries, found {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &idx in order {
        if idx >= n {
            return Err(RoutingError::InvalidOrder(format!(
                "index {idx} is out of range for {n} locations"
            )));
        }
        if seen[idx] {
            return Err(RoutingError::InvalidOrder(format!(
                "index {idx} appears twice"
            )));
        }
        seen[idx] = true;
    }
    Ok(())
}
