use serde::{Deserialize, Serialize};

use crate::models::TourKind;

/// How location 0 of a request is treated.
///
/// # Examples
///
/// ```
/// use tour_routing::depot::DepotPolicy;
///
/// assert_eq!(DepotPolicy::from_flags(true, true), DepotPolicy::RoundTrip);
/// assert_eq!(DepotPolicy::from_flags(true, false), DepotPolicy::OneWay);
/// assert_eq!(DepotPolicy::from_flags(false, true), DepotPolicy::NoDepot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepotPolicy {
    /// Every location is a stop; the tour starts at location 0 and returns
    /// to it.
    #[default]
    NoDepot,
    /// Location 0 is a depot; the route leaves it and comes back.
    RoundTrip,
    /// Location 0 is a depot; the route leaves it and ends at the last stop.
    OneWay,
}

impl DepotPolicy {
    /// Maps the request flags onto a policy. `return_to_depot` is ignored
    /// without a depot.
    pub fn from_flags(has_depot: bool, return_to_depot: bool) -> Self {
        match (has_depot, return_to_depot) {
            (false, _) => DepotPolicy::NoDepot,
            (true, true) => DepotPolicy::RoundTrip,
            (true, false) => DepotPolicy::OneWay,
        }
    }

    /// Whether location 0 is a depot.
    pub fn has_depot(self) -> bool {
        !matches!(self, DepotPolicy::NoDepot)
    }

    /// The tour variant solved for this policy.
    pub fn kind(self) -> TourKind {
        match self {
            DepotPolicy::NoDepot | DepotPolicy::RoundTrip => TourKind::Closed,
            DepotPolicy::OneWay => TourKind::Open,
        }
    }
}
