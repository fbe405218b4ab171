//! Candidate portfolio.
//!
//! Several independent heuristics each produce a complete order; every
//! candidate is priced with the same cost function and the cheapest wins.
//! Ties go to the candidate generated first.
//!
//! # Standard portfolio
//!
//! 1. Nearest neighbor + 2-opt from `start`
//! 2. Nearest neighbor + 2-opt from up to `extra_starts` other locations
//! 3. Nearest neighbor + 3-opt from `start`
//! 4. Cheapest insertion from `start`
//! 5. Genetic algorithm (only when `n <= ga_threshold`)

use std::time::{Duration, Instant};

use log::{debug, warn};

use super::SolverConfig;
use crate::constructive::{cheapest_insertion, nearest_neighbor, nearest_neighbor_from};
use crate::distance::CostMatrix;
use crate::evaluation::tour_cost;
use crate::ga::{GaConfig, GaRunner};
use crate::local_search::{three_opt, two_opt};
use crate::models::TourKind;

/// A heuristic that produces one complete order.
///
/// Implementations must return a permutation of `0..matrix.size()` that
/// begins with `start`.
pub trait CandidateGenerator: Send + Sync {
    /// Name used in logs and in [`Candidate::generator`].
    fn name(&self) -> &str;

    /// Builds an order for the given variant.
    fn generate(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize>;
}

/// Nearest neighbor from `start`, improved by 2-opt.
pub struct NearestNeighborTwoOpt;

impl CandidateGenerator for NearestNeighborTwoOpt {
    fn name(&self) -> &str {
        "nn_2opt"
    }

    fn generate(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize> {
        two_opt(&nearest_neighbor(matrix, start), matrix, kind).0
    }
}

/// Nearest neighbor seeded from another location, improved by 2-opt.
///
/// Closed tours are built from `alternate` and rotated to begin at `start`,
/// which leaves their cost unchanged. Open paths must still begin at
/// `start`, so `alternate` becomes the first hop.
pub struct AlternateStartTwoOpt {
    /// Location the nearest-neighbor walk is seeded from.
    pub alternate: usize,
}

impl CandidateGenerator for AlternateStartTwoOpt {
    fn name(&self) -> &str {
        "nn_2opt_alt"
    }

    fn generate(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize> {
        if self.alternate == start {
            return NearestNeighborTwoOpt.generate(matrix, start, kind);
        }
        match kind {
            TourKind::Closed => {
                let nn = nearest_neighbor(matrix, self.alternate);
                let (mut tour, _) = two_opt(&nn, matrix, kind);
                rotate_to(&mut tour, start);
                tour
            }
            TourKind::Open => {
                let nn = nearest_neighbor_from(matrix, &[start, self.alternate]);
                two_opt(&nn, matrix, kind).0
            }
        }
    }
}

/// Nearest neighbor from `start`, improved by 3-opt.
pub struct NearestNeighborThreeOpt;

impl CandidateGenerator for NearestNeighborThreeOpt {
    fn name(&self) -> &str {
        "nn_3opt"
    }

    fn generate(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize> {
        three_opt(&nearest_neighbor(matrix, start), matrix, kind).0
    }
}

/// Cheapest insertion from `start`, without local search.
pub struct CheapestInsertion;

impl CandidateGenerator for CheapestInsertion {
    fn name(&self) -> &str {
        "cheapest_insertion"
    }

    fn generate(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize> {
        cheapest_insertion(matrix, start, kind)
    }
}

/// The genetic algorithm.
pub struct Evolutionary {
    /// GA parameters; must pass [`GaConfig::validate`].
    pub config: GaConfig,
}

impl CandidateGenerator for Evolutionary {
    fn name(&self) -> &str {
        "genetic"
    }

    fn generate(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Vec<usize> {
        GaRunner::run(matrix, start, kind, &self.config).best
    }
}

/// A priced candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Name of the generator that produced it.
    pub generator: String,
    /// The order.
    pub order: Vec<usize>,
    /// Cost under the variant the portfolio ran with.
    pub cost: f64,
}

/// An ordered list of candidate generators.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::models::TourKind;
/// use tour_routing::solver::{CheapestInsertion, NearestNeighborTwoOpt, Portfolio};
///
/// let mut cm = CostMatrix::new(10);
/// for i in 0..10 {
///     for j in 0..10 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let portfolio = Portfolio::default()
///     .with_generator(NearestNeighborTwoOpt)
///     .with_generator(CheapestInsertion);
/// let best = portfolio.run(&cm, 0, TourKind::Open).unwrap();
/// assert_eq!(best.cost, 9.0);
/// assert_eq!(best.generator, "nn_2opt");
/// ```
#[derive(Default)]
pub struct Portfolio {
    generators: Vec<Box<dyn CandidateGenerator>>,
    time_limit: Option<Duration>,
}

impl Portfolio {
    /// Builds the standard portfolio for an instance of `n` locations.
    pub fn standard(n: usize, start: usize, config: &SolverConfig) -> Self {
        let mut portfolio = Self::default().with_generator(NearestNeighborTwoOpt);
        for alternate in (0..n).filter(|&i| i != start).take(config.extra_starts) {
            portfolio = portfolio.with_generator(AlternateStartTwoOpt { alternate });
        }
        portfolio = portfolio
            .with_generator(NearestNeighborThreeOpt)
            .with_generator(CheapestInsertion);
        if n <= config.ga_threshold {
            portfolio = portfolio.with_generator(Evolutionary {
                config: config.ga.clone(),
            });
        }
        if let Some(ms) = config.time_limit_ms {
            portfolio = portfolio.with_time_limit(Duration::from_millis(ms));
        }
        portfolio
    }

    /// Appends a generator.
    pub fn with_generator<G: CandidateGenerator + 'static>(mut self, generator: G) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Stops starting new generators once `limit` has elapsed.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Number of generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns true if there are no generators.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Generator names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Runs the generators in order and returns the cheapest candidate.
    ///
    /// Returns `None` only for an empty portfolio.
    pub fn run(&self, matrix: &CostMatrix, start: usize, kind: TourKind) -> Option<Candidate> {
        let started = Instant::now();
        let mut best: Option<Candidate> = None;

        for (idx, generator) in self.generators.iter().enumerate() {
            if idx > 0 {
                if let Some(limit) = self.time_limit {
                    if started.elapsed() >= limit {
                        warn!(
                            "time limit of {limit:?} reached after {idx} of {} candidates",
                            self.generators.len()
                        );
                        break;
                    }
                }
            }

            let order = generator.generate(matrix, start, kind);
            let cost = tour_cost(&order, matrix, kind);
            debug!("candidate {}: cost {cost}", generator.name());

            let better = match &best {
                Some(b) => cost < b.cost,
                None => true,
            };
            if better {
                best = Some(Candidate {
                    generator: generator.name().to_string(),
                    order,
                    cost,
                });
            }
        }

        if let Some(ref winner) = best {
            debug!("selected {} with cost {}", winner.generator, winner.cost);
            if winner.cost.is_infinite() {
                warn!("best order has infinite cost; some required legs are unreachable");
            }
        }
        best
    }
}

/// Rotates a closed tour so that it begins at `start`.
fn rotate_to(tour: &mut [usize], start: usize) {
    if let Some(pos) = tour.iter().position(|&v| v == start) {
        tour.rotate_left(pos);
    }
}
