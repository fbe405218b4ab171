//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// Configuration for the evolutionary solver.
///
/// # Defaults
///
/// ```
/// use tour_routing::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.selection, Selection::Roulette);
/// assert_eq!(config.elite_count(), 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tour_routing::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_selection(Selection::Uniform)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Probability of applying swap mutation to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0). At least one elite always survives.
    pub elite_ratio: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 100,
            mutation_rate: 0.1,
            elite_ratio: 0.0,
            selection: Selection::Roulette,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Preset with uniform parent choice and the top 20% kept as elites.
    pub fn rank_elitism() -> Self {
        Self {
            elite_ratio: 0.2,
            selection: Selection::Uniform,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        let n = (self.population_size as f64 * self.elite_ratio) as usize;
        n.clamp(1, self.population_size.max(1))
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err(format!(
                "elite_ratio must be in [0, 1], got {}",
                self.elite_ratio
            ));
        }
        Ok(())
    }
}
