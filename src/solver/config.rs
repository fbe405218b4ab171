//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::ga::GaConfig;

/// Configuration for [`solve`](super::solve).
///
/// # Examples
///
/// ```
/// use tour_routing::ga::GaConfig;
/// use tour_routing::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_ga(GaConfig::default().with_seed(42))
///     .with_time_limit_ms(500);
/// assert_eq!(config.exact_threshold, 8);
/// assert_eq!(config.time_limit_ms, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Instances with at most this many locations are solved exactly.
    ///
    /// Brute force enumerates `(n-1)!` orders; keep this small.
    pub exact_threshold: usize,

    /// The GA joins the portfolio for instances up to this size.
    pub ga_threshold: usize,

    /// Number of alternate nearest-neighbor starts tried besides `start`.
    pub extra_starts: usize,

    /// Parameters of the evolutionary solver.
    pub ga: GaConfig,

    /// Wall-clock budget for the portfolio in milliseconds.
    ///
    /// Checked between candidate generators; the first generator always
    /// runs. `None` runs every generator.
    pub time_limit_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 8,
            ga_threshold: 15,
            extra_starts: 4,
            ga: GaConfig::default(),
            time_limit_ms: None,
        }
    }
}

impl SolverConfig {
    /// Sets the exact-solver threshold.
    pub fn with_exact_threshold(mut self, n: usize) -> Self {
        self.exact_threshold = n;
        self
    }

    /// Sets the GA threshold.
    pub fn with_ga_threshold(mut self, n: usize) -> Self {
        self.ga_threshold = n;
        self
    }

    /// Sets the number of alternate starts.
    pub fn with_extra_starts(mut self, n: usize) -> Self {
        self.extra_starts = n;
        self
    }

    /// Sets the GA configuration.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Sets the portfolio time limit.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }
}
