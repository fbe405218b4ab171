//! GA evolutionary loop.
//!
//! [`GaRunner`] runs initialization → selection → crossover → mutation →
//! elitism for a fixed number of generations and reports the best tour
//! seen.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::chromosome::TourChromosome;
use super::config::GaConfig;
use super::operators::{order_crossover, random_tour, swap_mutation};
use crate::distance::CostMatrix;
use crate::models::TourKind;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best order found, beginning with the start location.
    pub best: Vec<usize>,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best cost after initialization and after each generation.
    pub cost_history: Vec<f64>,
}

/// Executes the GA loop over tours of a cost matrix.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::ga::{GaConfig, GaRunner};
/// use tour_routing::models::TourKind;
///
/// let mut cm = CostMatrix::new(6);
/// for i in 0..6 {
///     for j in 0..6 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&cm, 0, TourKind::Open, &config);
/// assert_eq!(result.best[0], 0);
/// assert_eq!(result.best.len(), 6);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA and returns the best tour starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error) or if `start` is out of range for a
    /// non-empty matrix.
    pub fn run(matrix: &CostMatrix, start: usize, kind: TourKind, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let n = matrix.size();
        if n == 0 {
            return GaResult {
                best: Vec::new(),
                best_cost: 0.0,
                generations: 0,
                cost_history: Vec::new(),
            };
        }
        assert!(start < n, "start {start} out of range for {n} locations");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<TourChromosome> = (0..config.population_size)
            .map(|_| TourChromosome::evaluate(random_tour(n, start, &mut rng), matrix, kind))
            .collect();

        let mut best = find_best(&population).clone();
        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(best.cost());

        let elite_count = config.elite_count();
        for _ in 0..config.generations {
            // Stable sort keeps earlier individuals first among equal costs.
            population.sort_by(|a, b| a.cost().total_cmp(&b.cost()));

            let mut next_gen: Vec<TourChromosome> = population[..elite_count].to_vec();
            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&population, &mut rng);
                let p2 = config.selection.select(&population, &mut rng);

                let mut child =
                    order_crossover(population[p1].genes(), population[p2].genes(), &mut rng);
                if rng.random_bool(config.mutation_rate) {
                    swap_mutation(&mut child, &mut rng);
                }
                next_gen.push(TourChromosome::evaluate(child, matrix, kind));
            }
            population = next_gen;

            let gen_best = find_best(&population);
            if gen_best.cost() < best.cost() {
                best = gen_best.clone();
            }
            cost_history.push(best.cost());
        }

        debug!(
            "GA finished after {} generations: best cost {}",
            config.generations,
            best.cost()
        );

        GaResult {
            best_cost: best.cost(),
            best: best.into_genes(),
            generations: config.generations,
            cost_history,
        }
    }
}

/// First individual with the lowest cost.
fn find_best(population: &[TourChromosome]) -> &TourChromosome {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.cost() < best.cost() {
            best = ind;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;
    use crate::exact::brute_force;
    use crate::ga::Selection;

    fn circle(n: usize) -> CostMatrix {
        let pts: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = 2.0 * std::f64::consts::PI * (i * 7 % n) as f64 / n as f64;
                (a.cos() * 10.0, a.sin() * 10.0)
            })
            .collect();
        let mut cm = CostMatrix::new(n);
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate() {
                cm.set(i, j, ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt());
            }
        }
        cm
    }

    fn is_tour(t: &[usize], n: usize, start: usize) -> bool {
        let mut sorted = t.to_vec();
        sorted.sort_unstable();
        t.first() == Some(&start) && sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_ga_returns_valid_tour() {
        let cm = circle(12);
        let config = GaConfig::default().with_seed(42);
        for kind in [TourKind::Closed, TourKind::Open] {
            let result = GaRunner::run(&cm, 4, kind, &config);
            assert!(is_tour(&result.best, 12, 4));
            assert!((result.best_cost - tour_cost(&result.best, &cm, kind)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ga_history_never_worsens() {
        let cm = circle(10);
        for config in [
            GaConfig::default().with_seed(7),
            GaConfig::rank_elitism().with_seed(7),
        ] {
            let result = GaRunner::run(&cm, 0, TourKind::Closed, &config);
            assert_eq!(result.cost_history.len(), config.generations + 1);
            assert!(result.cost_history.windows(2).all(|w| w[1] <= w[0]));
            assert_eq!(*result.cost_history.last().expect("history"), result.best_cost);
        }
    }

    #[test]
    fn test_ga_finds_optimum_on_tiny_instance() {
        let cm = circle(5);
        let (_, optimum) = brute_force(&cm, 0, TourKind::Closed);
        let config = GaConfig::default().with_seed(11);
        let result = GaRunner::run(&cm, 0, TourKind::Closed, &config);
        assert!((result.best_cost - optimum).abs() < 1e-9);
    }

    #[test]
    fn test_ga_seed_is_deterministic() {
        let cm = circle(9);
        let config = GaConfig::default()
            .with_seed(123)
            .with_selection(Selection::Uniform);
        let a = GaRunner::run(&cm, 2, TourKind::Open, &config);
        let b = GaRunner::run(&cm, 2, TourKind::Open, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_ga_degenerate_sizes() {
        let config = GaConfig::default().with_seed(1);
        let empty = GaRunner::run(&CostMatrix::new(0), 0, TourKind::Closed, &config);
        assert!(empty.best.is_empty());
        let single = GaRunner::run(&CostMatrix::new(1), 0, TourKind::Closed, &config);
        assert_eq!(single.best, vec![0]);
        assert_eq!(single.best_cost, 0.0);
    }

    #[test]
    fn test_ga_zero_generations_returns_initial_best() {
        let cm = circle(6);
        let config = GaConfig::default().with_seed(3).with_generations(0);
        let result = GaRunner::run(&cm, 0, TourKind::Closed, &config);
        assert_eq!(result.generations, 0);
        assert_eq!(result.cost_history, vec![result.best_cost]);
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_ga_rejects_invalid_config() {
        let config = GaConfig::default().with_population_size(0);
        GaRunner::run(&circle(4), 0, TourKind::Closed, &config);
    }
}
