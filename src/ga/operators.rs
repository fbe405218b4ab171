//! Permutation operators for fixed-start tours.
//!
//! All operators keep gene 0 (the start location) in place and only work on
//! positions `1..n`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::SliceRandom;
use rand::Rng;

/// Random tour over `0..n` with `start` in position 0.
pub fn random_tour<R: Rng>(n: usize, start: usize, rng: &mut R) -> Vec<usize> {
    let mut rest: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    rest.shuffle(rng);
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    tour.extend(rest);
    tour
}

/// Order Crossover (OX) preserving position 0.
///
/// Copies a random segment of `parent1` (within positions `1..n`) into the
/// child at the same positions, then fills the remaining slots left to
/// right with `parent2`'s genes in their relative order, skipping genes
/// already present.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n <= 2 {
        return parent1.to_vec();
    }

    let (seg_start, seg_end) = random_segment(n, rng);

    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];
    child[0] = parent1[0];
    used[parent1[0]] = true;
    for i in seg_start..=seg_end {
        child[i] = parent1[i];
        used[parent1[i]] = true;
    }

    let mut donor = parent2[1..].iter().copied().filter(|&g| !used[g]);
    for slot in child.iter_mut().skip(1) {
        if *slot == usize::MAX {
            *slot = donor.next().expect("donor has exactly the missing genes");
        }
    }

    child
}

/// Swap mutation: exchange two random positions in `1..n`.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    if n < 3 {
        return;
    }
    let i = rng.random_range(1..n);
    let j = rng.random_range(1..n);
    tour.swap(i, j);
}

/// Pick a random segment `[start, end]` within `1..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(1..n);
    let b = rng.random_range(1..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
