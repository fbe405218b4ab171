//! Genetic algorithm for small instances.
//!
//! - [`TourChromosome`] — Permutation with the start location fixed in gene 0
//! - [`order_crossover`] / [`swap_mutation`] — Start-preserving operators
//! - [`Selection`] — Roulette or uniform parent choice
//! - [`GaRunner`] — Evolutionary loop with elitism
//!
//! # Reference
//!
//! Potvin, J.-Y. (1996). "Genetic algorithms for the traveling salesman
//! problem", *Annals of Operations Research* 63, 337-370.

mod chromosome;
mod config;
pub mod operators;
mod runner;
mod selection;

pub use chromosome::TourChromosome;
pub use config::GaConfig;
pub use operators::{order_crossover, random_tour, swap_mutation};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
