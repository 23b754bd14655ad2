//! One-shot evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`GaEngine`](crate::GaEngine) from
//! `setup()` to convergence or a generation bound, collecting history
//! along the way. Use the engine directly when stepping needs to be
//! interleaved with other work (interactive retargeting, UI ticks).

use tracing::debug;

use crate::chromosome::Gene;
use crate::config::GaConfig;
use crate::engine::{GaEngine, StepStatus};
use crate::error::GaError;
use crate::individual::Individual;
use crate::types::GaProblem;

/// Result of a complete GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult<G: Gene> {
    /// The best individual ever seen during the run.
    pub best: Individual<G>,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Best discrepancy to the fitness target.
    pub best_discrepancy: f64,

    /// Generations executed.
    pub generations: usize,

    /// Whether the run hit the fitness target exactly.
    pub converged: bool,

    /// Best-ever discrepancy after setup and after each generation.
    ///
    /// Non-increasing by construction (the best-ever cache never
    /// regresses while the target is stable).
    pub discrepancy_history: Vec<f64>,
}

/// Executes the full evolutionary loop.
///
/// # Usage
///
/// ```
/// use steady_ga::{benchmarks::BitSum, GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_pop_size(20)
///     .with_tournament_size(5)
///     .with_fitness_target(3.0)
///     .with_max_generations(200)
///     .with_seed(42);
/// let result = GaRunner::run(BitSum::new(5), &config).unwrap();
/// assert!(result.converged);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs `setup()` followed by up to `max_generations` steps,
    /// stopping early on convergence.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if the configuration is
    /// invalid.
    pub fn run<P: GaProblem>(problem: P, config: &GaConfig) -> Result<GaResult<P::Gene>, GaError> {
        let mut engine = GaEngine::new(problem, config.clone())?;
        engine.setup();

        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(engine.best_discrepancy().expect("population seeded"));

        let mut last_generation = engine.generation();
        for _ in 0..config.max_generations {
            let status = engine.step()?;
            if engine.generation() != last_generation {
                last_generation = engine.generation();
                history.push(engine.best_discrepancy().expect("population seeded"));
            }
            if status == StepStatus::Converged {
                break;
            }
        }

        let best = engine
            .best()
            .cloned()
            .expect("population seeded by setup");
        let result = GaResult {
            best_fitness: best.fitness(),
            best_discrepancy: best.discrepancy(engine.fitness_target()),
            best,
            generations: engine.generation(),
            converged: engine.is_converged(),
            discrepancy_history: history,
        };
        debug!(
            generations = result.generations,
            converged = result.converged,
            best_fitness = result.best_fitness,
            "run finished"
        );
        Ok(result)
    }
}
