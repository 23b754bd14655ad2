//! Generic sequence operators for crossover and mutation.
//!
//! Building blocks for [`GaProblem::mate`](crate::types::GaProblem::mate)
//! and [`GaProblem::mutate`](crate::types::GaProblem::mutate). All
//! operators take chromosomes by reference and return new ones; inputs
//! are never modified.
//!
//! # Crossover operators
//!
//! - [`cx_all_diff`]: rotation-based order-preserving crossover for
//!   all-different (permutation) chromosomes; children are guaranteed
//!   to be permutations of the same gene set
//! - [`cx_uniform`]: position-independent uniform crossover
//!
//! # Mutation operators
//!
//! - [`reverse_subseq`] / [`reverse_range`]: reverse a slice (2-opt)
//! - [`rotate_by`]: cyclic left rotation
//! - [`swap_genes`]: exchange two random positions
//! - [`move_gene`]: remove a gene and reinsert it elsewhere
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use crate::chromosome::{Chromosome, Gene};

// ============================================================================
// Crossover operators
// ============================================================================

/// Order-preserving crossover for all-different chromosomes.
///
/// Both parents must be permutations of the same gene set. Each child is
/// built by rotating both parents by independent random offsets (never 0
/// and never the full length, which would be trivial no-op rotations),
/// taking a random-length prefix of one rotation, and filling the
/// remainder with the other rotation's genes in order, skipping genes
/// already present. The result is always a permutation of the same gene
/// set, with the same length as the parents.
///
/// Applied symmetrically: the second child swaps the parents' roles,
/// with fresh random draws.
///
/// Chromosomes of length ≤ 1 pass through unchanged.
///
/// # Complexity
/// O(n) per child.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn cx_all_diff<G: Gene, R: Rng>(
    parent1: &Chromosome<G>,
    parent2: &Chromosome<G>,
    rng: &mut R,
) -> (Chromosome<G>, Chromosome<G>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    (
        all_diff_child(parent1, parent2, rng),
        all_diff_child(parent2, parent1, rng),
    )
}

/// Build one all-different child: rotated prefix from `template`,
/// remainder filled in `donor` rotation order.
fn all_diff_child<G: Gene, R: Rng>(
    template: &Chromosome<G>,
    donor: &Chromosome<G>,
    rng: &mut R,
) -> Chromosome<G> {
    let n = template.len();
    if n < 2 {
        return template.clone();
    }

    let rotated_template = rotate_by(template, random_rotation(n, rng));
    let rotated_donor = rotate_by(donor, random_rotation(n, rng));

    let prefix_len = rng.random_range(1..n);
    let prefix = &rotated_template.genes()[..prefix_len];
    let taken: HashSet<&G> = prefix.iter().collect();

    let mut genes: Vec<G> = prefix.to_vec();
    for gene in rotated_donor.iter() {
        if !taken.contains(gene) {
            genes.push(gene.clone());
        }
    }
    Chromosome::new(genes)
}

/// Uniform crossover: each gene position is taken independently from one
/// of the two parents.
///
/// Child 1 receives one parent's gene at each position and child 2 the
/// other's, so the children are position-wise complementary. Does not
/// preserve the all-different invariant; use [`cx_all_diff`] for
/// permutation chromosomes.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn cx_uniform<G: Gene, R: Rng>(
    parent1: &Chromosome<G>,
    parent2: &Chromosome<G>,
    rng: &mut R,
) -> (Chromosome<G>, Chromosome<G>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    for i in 0..n {
        if rng.random_bool(0.5) {
            child1.push(parent1[i].clone());
            child2.push(parent2[i].clone());
        } else {
            child1.push(parent2[i].clone());
            child2.push(parent1[i].clone());
        }
    }
    (Chromosome::new(child1), Chromosome::new(child2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Reverses the half-open slice `[lo, hi)`, returning a new chromosome.
///
/// The deterministic core of [`reverse_subseq`]; applying it twice with
/// the same bounds restores the original chromosome.
///
/// # Panics
/// Panics if `lo > hi` or `hi > len`.
pub fn reverse_range<G: Gene>(chromosome: &Chromosome<G>, lo: usize, hi: usize) -> Chromosome<G> {
    assert!(lo <= hi && hi <= chromosome.len(), "invalid range bounds");
    let mut genes = chromosome.to_vec();
    genes[lo..hi].reverse();
    Chromosome::new(genes)
}

/// Reverses the slice between two distinct random positions.
///
/// The two indices are sampled without replacement and sorted; the
/// reversal covers the lower index inclusive up to the upper index
/// exclusive. Chromosomes of length < 2 pass through unchanged, so
/// degenerate inputs never make the "two distinct indices" draw crash.
pub fn reverse_subseq<G: Gene, R: Rng>(chromosome: &Chromosome<G>, rng: &mut R) -> Chromosome<G> {
    let n = chromosome.len();
    if n < 2 {
        return chromosome.clone();
    }
    let pair = index::sample(rng, n, 2);
    let (a, b) = (pair.index(0), pair.index(1));
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    reverse_range(chromosome, lo, hi)
}

/// Cyclic left rotation by `amt` positions.
///
/// `amt` is taken modulo the length; rotating an empty chromosome or by
/// a multiple of the length returns an equal chromosome.
pub fn rotate_by<G: Gene>(chromosome: &Chromosome<G>, amt: usize) -> Chromosome<G> {
    let n = chromosome.len();
    if n == 0 {
        return chromosome.clone();
    }
    let amt = amt % n;
    let mut genes = chromosome.to_vec();
    genes.rotate_left(amt);
    Chromosome::new(genes)
}

/// Exchanges two random positions.
///
/// The positions are drawn independently, so the exchange is
/// occasionally a no-op.
///
/// # Complexity
/// O(n) for the copy; the swap itself is O(1).
pub fn swap_genes<G: Gene, R: Rng>(chromosome: &Chromosome<G>, rng: &mut R) -> Chromosome<G> {
    let n = chromosome.len();
    if n < 2 {
        return chromosome.clone();
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    let mut genes = chromosome.to_vec();
    genes.swap(i, j);
    Chromosome::new(genes)
}

/// Removes a random gene and reinserts it at a random position.
///
/// Equivalent to a single "insert" move in local search.
///
/// # Complexity
/// O(n) due to shifting.
pub fn move_gene<G: Gene, R: Rng>(chromosome: &Chromosome<G>, rng: &mut R) -> Chromosome<G> {
    let n = chromosome.len();
    if n < 2 {
        return chromosome.clone();
    }
    let mut genes = chromosome.to_vec();
    let from = rng.random_range(0..n);
    let gene = genes.remove(from);
    let to = rng.random_range(0..n);
    genes.insert(to, gene);
    Chromosome::new(genes)
}

// ============================================================================
// Helpers
// ============================================================================

/// Random rotation offset in `1..len`: never 0 and never the full
/// length. Lengths < 2 have no non-trivial rotation and get 0.
fn random_rotation<R: Rng>(len: usize, rng: &mut R) -> usize {
    if len < 2 {
        0
    } else {
        rng.random_range(1..len)
    }
}

// ============================================================================
// Tests
// ============================================================================
