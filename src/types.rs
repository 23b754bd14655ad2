//! Core trait definition for the GA engine.
//!
//! [`GaProblem`] is the contract between the generic steady-state engine
//! and a domain-specific problem. The engine owns population management,
//! tournament selection, replacement, and convergence tracking; the
//! problem supplies gene generation, fitness evaluation, and the
//! crossover/mutation operators.

use rand::Rng;

use crate::chromosome::{Chromosome, Gene};

/// Defines a GA optimization problem.
///
/// This is the single trait users implement to plug domain logic into
/// the engine. It covers:
///
/// 1. **Generation**: how to build a random chromosome
/// 2. **Evaluation**: how to score a chromosome
/// 3. **Crossover**: how to recombine two parents
/// 4. **Mutation**: how to perturb an offspring
///
/// All four are required methods: a problem that forgets one simply
/// does not compile, so there is no silently-absent capability to
/// discover at runtime.
///
/// The generic operators in [`crate::operators`] are building blocks
/// for `mate` and `mutate`: delegate to
/// [`cx_all_diff`](crate::operators::cx_all_diff) for permutation
/// chromosomes, [`cx_uniform`](crate::operators::cx_uniform) for
/// position-independent ones, and compose mutations from
/// [`reverse_subseq`](crate::operators::reverse_subseq),
/// [`swap_genes`](crate::operators::swap_genes), and friends.
///
/// # Fitness orientation
///
/// The engine neither minimizes nor maximizes raw fitness. It drives the
/// population toward the configured `fitness_target`, ranking
/// individuals by `|fitness - target|` (discrepancy). A conventional
/// minimization problem is expressed with `fitness_target = 0.0`.
///
/// # Thread safety
///
/// `GaProblem` must be `Send + Sync`: with the `parallel` feature the
/// engine evaluates the initial population with rayon.
pub trait GaProblem: Send + Sync {
    /// The gene type for this problem.
    type Gene: Gene;

    /// Creates a random chromosome.
    ///
    /// Called for the initial population and whenever
    /// `prob_random_parent` injects a fresh explorer into breeding. The
    /// result should be valid (well-formed) but need not be good.
    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome<Self::Gene>;

    /// Scores a chromosome.
    ///
    /// Must be a pure function of the chromosome and problem state; the
    /// engine evaluates each individual exactly once, at construction.
    fn fitness(&self, chromosome: &Chromosome<Self::Gene>) -> f64;

    /// Produces two offspring by recombining two parents.
    fn mate<R: Rng>(
        &self,
        parent1: &Chromosome<Self::Gene>,
        parent2: &Chromosome<Self::Gene>,
        rng: &mut R,
    ) -> (Chromosome<Self::Gene>, Chromosome<Self::Gene>);

    /// Perturbs an offspring chromosome.
    ///
    /// Consumes and returns by value; returning the input unchanged is
    /// a legitimate "no mutation this time" outcome.
    fn mutate<R: Rng>(
        &self,
        chromosome: Chromosome<Self::Gene>,
        rng: &mut R,
    ) -> Chromosome<Self::Gene>;

    /// Builds the initial population's chromosomes.
    ///
    /// The default makes `size` independent calls to
    /// [`random_chromosome`](GaProblem::random_chromosome); override to
    /// seed the population with known-good starting points.
    fn initial_population<R: Rng>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Vec<Chromosome<Self::Gene>> {
        (0..size).map(|_| self.random_chromosome(rng)).collect()
    }

    /// Called after `setup()` and after every `step()` with the current
    /// best individual's stats.
    ///
    /// `best_fitness` and `best_discrepancy` are rounded to one decimal
    /// place, matching what a monitoring surface would display. The
    /// default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64, _best_discrepancy: f64) {}
}
