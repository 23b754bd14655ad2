//! Individual wrapper type.
//!
//! An [`Individual`] owns exactly one chromosome and the fitness score
//! computed for it at construction. Fitness is a pure function of the
//! chromosome and the problem, so it is evaluated once and cached;
//! mutation and crossover produce new individuals rather than editing
//! existing ones.

use crate::chromosome::{Chromosome, Gene};
use crate::types::GaProblem;

/// A candidate solution: one chromosome plus its cached fitness.
///
/// Ranking throughout the engine uses [`discrepancy`](Individual::discrepancy),
/// the absolute distance from the configured fitness target, rather
/// than raw fitness. Lower discrepancy is better, and a discrepancy of
/// zero means the target has been hit exactly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<G: Gene> {
    chromosome: Chromosome<G>,
    fitness: f64,
}

impl<G: Gene> Individual<G> {
    /// Wraps a chromosome with an already-computed fitness.
    ///
    /// Callers are responsible for `fitness` actually being the
    /// problem's score for `chromosome`; prefer
    /// [`evaluated`](Individual::evaluated) unless the value is coming
    /// out of a prior evaluation.
    pub fn new(chromosome: Chromosome<G>, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
        }
    }

    /// Builds an individual by evaluating `chromosome` against `problem`.
    ///
    /// This is the only place the engine computes fitness: at
    /// construction, exactly once per individual.
    pub fn evaluated<P>(problem: &P, chromosome: Chromosome<G>) -> Self
    where
        P: GaProblem<Gene = G> + ?Sized,
    {
        let fitness = problem.fitness(&chromosome);
        Self {
            chromosome,
            fitness,
        }
    }

    /// The chromosome this individual wraps.
    pub fn chromosome(&self) -> &Chromosome<G> {
        &self.chromosome
    }

    /// The cached fitness score.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Absolute distance from `target`; the engine's sole ranking key.
    pub fn discrepancy(&self, target: f64) -> f64 {
        (self.fitness - target).abs()
    }
}
