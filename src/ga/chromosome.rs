//! Tour chromosome.
//!
//! A chromosome is a permutation of all location indices with the start
//! location in gene 0. Its cost is computed once on creation.

use crate::distance::CostMatrix;
use crate::evaluation::tour_cost;
use crate::models::TourKind;

/// A tour and its cached cost.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
/// use tour_routing::ga::TourChromosome;
/// use tour_routing::models::TourKind;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 2.0, 4.0],
///     vec![2.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ]).unwrap();
/// let tour = TourChromosome::evaluate(vec![0, 1, 2], &cm, TourKind::Open);
/// assert_eq!(tour.genes(), &[0, 1, 2]);
/// assert_eq!(tour.cost(), 5.0);
/// assert!((tour.fitness() - 1.0 / 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TourChromosome {
    genes: Vec<usize>,
    cost: f64,
}

impl TourChromosome {
    /// Creates a chromosome and prices it against `matrix`.
    pub fn evaluate(genes: Vec<usize>, matrix: &CostMatrix, kind: TourKind) -> Self {
        let cost = tour_cost(&genes, matrix, kind);
        Self { genes, cost }
    }

    /// Creates a chromosome with an already known cost.
    pub fn with_cost(genes: Vec<usize>, cost: f64) -> Self {
        Self { genes, cost }
    }

    /// Returns the location order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Returns the tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Selection weight: `1 / (cost + 1)`, zero for unreachable tours.
    pub fn fitness(&self) -> f64 {
        1.0 / (self.cost + 1.0)
    }

    /// Consumes the chromosome, returning the order.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }
}
