//! Geographic point type.

use serde::{Deserialize, Serialize};

/// A geocoded location.
///
/// The solvers never read coordinates directly; they only see the cost
/// matrix built from these points by an external provider (or by
/// [`CostMatrix::from_points_haversine`](crate::distance::CostMatrix::from_points_haversine)).
///
/// # Examples
///
/// ```
/// use tour_routing::models::Point;
///
/// let p = Point::new(-34.6037, -58.3816).with_label("Obelisco");
/// assert_eq!(p.label.as_deref(), Some("Obelisco"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Optional display label (usually the geocoded address).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Point {
    /// Creates an unlabeled point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            label: None,
        }
    }

    /// Attaches a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
