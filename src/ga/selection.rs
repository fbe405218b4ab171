//! Parent selection strategies.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::TourChromosome;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use tour_routing::ga::Selection;
///
/// assert_eq!(Selection::default(), Selection::Roulette);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Fitness-proportionate selection with fitness `1 / (cost + 1)`.
    ///
    /// Tours of infinite cost get zero weight. When every weight is zero
    /// selection falls back to uniform.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Every individual is equally likely; selection pressure comes only
    /// from elitism.
    Uniform,
}

impl Selection {
    /// Select a parent index from a non-empty population.
    pub fn select<R: Rng>(&self, population: &[TourChromosome], rng: &mut R) -> usize {
        debug_assert!(!population.is_empty());
        match self {
            Selection::Roulette => roulette(population, rng),
            Selection::Uniform => rng.random_range(0..population.len()),
        }
    }
}

fn roulette<R: Rng>(population: &[TourChromosome], rng: &mut R) -> usize {
    let total: f64 = population.iter().map(TourChromosome::fitness).sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..population.len());
    }

    let target = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, ind) in population.iter().enumerate() {
        cumulative += ind.fitness();
        if cumulative > target {
            return i;
        }
    }
    population.len() - 1
}
