//! The steady-state evolutionary engine.
//!
//! [`GaEngine`] owns the population and advances it one generation per
//! [`step`](GaEngine::step) call. Each generation performs
//! `pop_size / 2` breeding events; each event draws two parents
//! (tournament-best or fresh random individuals), mates and mutates
//! them, and writes the two offspring over two distinct tournament-worst
//! slots. The population size never changes.
//!
//! The engine is a small state machine:
//!
//! ```text
//! UNINITIALIZED --setup()--> READY
//! READY --step() [discrepancy > 0]--> READY      (generation += 1)
//! READY --step() [discrepancy == 0]--> CONVERGED (terminal; step() is a no-op)
//! CONVERGED --setup()--> READY                   (re-seed, restart)
//! ```
//!
//! Convergence is a fixed point, not an error: once the best individual
//! ever seen hits the fitness target exactly, further steps leave the
//! population, the best-ever cache, and the generation count untouched.
//!
//! All state lives in the engine instance; nothing is process-global, so
//! several engines can run independently in one process.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::chromosome::Chromosome;
use crate::config::GaConfig;
use crate::error::GaError;
use crate::individual::Individual;
use crate::selection::{select_index, select_index_excluding, Extreme};
use crate::types::GaProblem;

/// Outcome of a [`GaEngine::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// A generation was executed and the target has not been hit yet.
    Advanced,
    /// The best individual ever seen matches the fitness target exactly.
    ///
    /// Returned both by the step that first reaches the target and by
    /// every subsequent (no-op) step.
    Converged,
}

/// Steady-state GA engine over a user-supplied [`GaProblem`].
///
/// # Usage
///
/// ```
/// use steady_ga::{benchmarks::BitSum, GaConfig, GaEngine, StepStatus};
///
/// let config = GaConfig::default()
///     .with_pop_size(20)
///     .with_tournament_size(5)
///     .with_fitness_target(3.0)
///     .with_seed(42);
/// let mut engine = GaEngine::new(BitSum::new(5), config).unwrap();
/// engine.setup();
/// while engine.step().unwrap() == StepStatus::Advanced {}
/// assert_eq!(engine.best().unwrap().fitness(), 3.0);
/// ```
pub struct GaEngine<P: GaProblem> {
    problem: P,
    config: GaConfig,
    rng: StdRng,
    population: Vec<Individual<P::Gene>>,
    generation: usize,
    best_ever: Option<Individual<P::Gene>>,
}

impl<P: GaProblem> GaEngine<P> {
    /// Creates an engine in the uninitialized state.
    ///
    /// The configuration is validated here so that parameter errors
    /// surface before any evolution starts.
    pub fn new(problem: P, config: GaConfig) -> Result<Self, GaError> {
        config.validate()?;
        let rng = seed_rng(config.seed);
        Ok(Self {
            problem,
            config,
            rng,
            population: Vec::new(),
            generation: 0,
            best_ever: None,
        })
    }

    /// Seeds (or re-seeds) the population and resets all run state.
    ///
    /// Safe to call at any time; calling it on a converged engine
    /// restarts the run from a fresh population. Publishes the initial
    /// best stats through
    /// [`on_generation`](GaProblem::on_generation) as generation 0.
    pub fn setup(&mut self) {
        self.rng = seed_rng(self.config.seed);
        let chromosomes = self
            .problem
            .initial_population(self.config.pop_size, &mut self.rng);
        self.population = self.evaluate_all(chromosomes);
        self.generation = 0;
        self.best_ever = None;
        self.refresh_best();
        debug!(
            pop_size = self.population.len(),
            fitness_target = self.config.fitness_target,
            "population seeded"
        );
        self.publish();
    }

    /// Runs one full generation: `pop_size / 2` breeding events.
    ///
    /// Returns [`StepStatus::Converged`] without touching any state if
    /// the engine has already hit the fitness target; the converged
    /// state is a fixed point. Otherwise breeds, increments the
    /// generation count, folds the population's best into the best-ever
    /// cache, and publishes the new stats.
    ///
    /// # Errors
    /// [`GaError::NotInitialized`] if `setup()` has not been called.
    pub fn step(&mut self) -> Result<StepStatus, GaError> {
        if self.population.is_empty() {
            return Err(GaError::NotInitialized);
        }
        if self.is_converged() {
            return Ok(StepStatus::Converged);
        }

        let events = self.config.pop_size / 2;
        for _ in 0..events {
            self.generate_children();
        }
        self.generation += 1;
        self.refresh_best();
        self.publish();

        if self.is_converged() {
            debug!(generation = self.generation, "fitness target reached");
            Ok(StepStatus::Converged)
        } else {
            Ok(StepStatus::Advanced)
        }
    }

    /// One breeding event: two parents in, two offspring out, written
    /// over two distinct tournament-worst slots.
    fn generate_children(&mut self) {
        let (parent1, parent1_slot) = self.generate_parent(None);
        let exclude = if self.config.allow_self_mating {
            None
        } else {
            parent1_slot
        };
        let (parent2, _) = self.generate_parent(exclude);

        let (child1, child2) =
            self.problem
                .mate(parent1.chromosome(), parent2.chromosome(), &mut self.rng);
        let child1 = self.problem.mutate(child1, &mut self.rng);
        let child2 = self.problem.mutate(child2, &mut self.rng);
        let child1 = Individual::evaluated(&self.problem, child1);
        let child2 = Individual::evaluated(&self.problem, child2);

        let target = self.config.fitness_target;
        let k = self.config.tournament_size;
        let slot1 = select_index(&self.population, Extreme::Worst, k, target, &mut self.rng);
        // Second tournament excludes slot1: the two children always land
        // in distinct slots.
        let slot2 = select_index_excluding(
            &self.population,
            Extreme::Worst,
            k,
            target,
            slot1,
            &mut self.rng,
        );
        self.population[slot1] = child1;
        self.population[slot2] = child2;
    }

    /// Draws one parent: a brand-new random individual with probability
    /// `prob_random_parent`%, otherwise a tournament-best clone from the
    /// population. Returns the source slot for population parents so
    /// the caller can enforce the self-mating policy.
    fn generate_parent(&mut self, exclude: Option<usize>) -> (Individual<P::Gene>, Option<usize>) {
        if self.rng.random_range(0..100u32) < u32::from(self.config.prob_random_parent) {
            let chromosome = self.problem.random_chromosome(&mut self.rng);
            return (Individual::evaluated(&self.problem, chromosome), None);
        }
        let target = self.config.fitness_target;
        let k = self.config.tournament_size;
        let slot = match exclude {
            Some(barred) => select_index_excluding(
                &self.population,
                Extreme::Best,
                k,
                target,
                barred,
                &mut self.rng,
            ),
            None => select_index(&self.population, Extreme::Best, k, target, &mut self.rng),
        };
        (self.population[slot].clone(), Some(slot))
    }

    /// Folds the current population's best into the best-ever cache.
    ///
    /// The cache only ever improves: the previous holder is kept unless
    /// the new candidate's discrepancy is strictly lower.
    fn refresh_best(&mut self) {
        let target = self.config.fitness_target;
        let best_now = self
            .population
            .iter()
            .min_by(|a, b| {
                a.discrepancy(target)
                    .partial_cmp(&b.discrepancy(target))
                    .unwrap_or(Ordering::Equal)
            })
            .expect("population must not be empty")
            .clone();

        self.best_ever = match self.best_ever.take() {
            Some(prev) if prev.discrepancy(target) <= best_now.discrepancy(target) => Some(prev),
            _ => Some(best_now),
        };
    }

    /// Publishes the best-ever stats through the problem's
    /// [`on_generation`](GaProblem::on_generation) sink, rounded to one
    /// decimal place.
    fn publish(&self) {
        if let Some(best) = &self.best_ever {
            let fitness = round1(best.fitness());
            let discrepancy = round1(best.discrepancy(self.config.fitness_target));
            debug!(
                generation = self.generation,
                best_fitness = fitness,
                best_discrepancy = discrepancy,
                "best-ever stats"
            );
            self.problem
                .on_generation(self.generation, fitness, discrepancy);
        }
    }

    fn evaluate_all(&mut self, chromosomes: Vec<Chromosome<P::Gene>>) -> Vec<Individual<P::Gene>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return chromosomes
                .into_par_iter()
                .map(|c| Individual::evaluated(&self.problem, c))
                .collect();
        }
        chromosomes
            .into_iter()
            .map(|c| Individual::evaluated(&self.problem, c))
            .collect()
    }

    /// The current population, in slot order. Empty before `setup()`.
    pub fn population(&self) -> &[Individual<P::Gene>] {
        &self.population
    }

    /// Generations executed since the last `setup()`.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The best individual ever seen, by discrepancy. `None` before
    /// `setup()`.
    pub fn best(&self) -> Option<&Individual<P::Gene>> {
        self.best_ever.as_ref()
    }

    /// The best-ever discrepancy under the current fitness target.
    pub fn best_discrepancy(&self) -> Option<f64> {
        self.best_ever
            .as_ref()
            .map(|b| b.discrepancy(self.config.fitness_target))
    }

    /// Whether the best individual ever seen hits the target exactly.
    pub fn is_converged(&self) -> bool {
        self.best_discrepancy() == Some(0.0)
    }

    /// The fitness target currently in force.
    pub fn fitness_target(&self) -> f64 {
        self.config.fitness_target
    }

    /// Retargets the run between steps.
    ///
    /// Discrepancies are always computed against the current target, so
    /// a converged engine may become unconverged (and vice versa) when
    /// the target moves. Best-ever monotonicity holds only while the
    /// target is stable.
    pub fn set_fitness_target(&mut self, target: f64) {
        debug!(old = self.config.fitness_target, new = target, "fitness target changed");
        self.config.fitness_target = target;
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

fn seed_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
