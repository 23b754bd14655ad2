//! Steady-state tournament genetic algorithm engine.
//!
//! A generic, domain-agnostic GA with steady-state (generational-overlap)
//! replacement: every generation, offspring overwrite tournament-selected
//! *worst* slots of a fixed-size population instead of rebuilding the
//! whole population. Individuals are ranked by **discrepancy**, the
//! absolute distance of their fitness from a configurable target, and a
//! run converges exactly when some individual hits the target.
//!
//! Users define their problem by implementing [`GaProblem`], which
//! specifies how to generate, evaluate, crossover, and mutate
//! chromosomes.
//!
//! # Core Types
//!
//! - [`Chromosome`]: immutable ordered gene sequence (cheap to clone)
//! - [`Individual`]: chromosome plus fitness cached at construction
//! - [`GaProblem`]: problem definition (generation, evaluation, operators)
//! - [`GaConfig`]: engine parameters (population, tournament, target)
//! - [`GaEngine`]: the stepping state machine (`setup`/`step`)
//! - [`GaRunner`]: one-shot driver returning a [`GaResult`]
//!
//! # Submodules
//!
//! - [`operators`]: generic crossover (all-different, uniform) and
//!   sequence mutation operators
//! - [`benchmarks`]: built-in problems ([`BitSum`](benchmarks::BitSum),
//!   [`Tsp`](benchmarks::Tsp)) for tests and benches
//!
//! # Example
//!
//! ```
//! use steady_ga::{benchmarks::BitSum, GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_pop_size(20)
//!     .with_tournament_size(5)
//!     .with_fitness_target(3.0)
//!     .with_seed(42);
//! let result = GaRunner::run(BitSum::new(5), &config).unwrap();
//! assert!(result.converged);
//! assert_eq!(result.best_fitness, 3.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Whitley & Kauth (1988), *GENITOR: a different genetic algorithm*
//!   (steady-state reproduction)

pub mod benchmarks;
mod chromosome;
mod config;
mod engine;
mod error;
mod individual;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use chromosome::{Chromosome, Gene};
pub use config::GaConfig;
pub use engine::{GaEngine, StepStatus};
pub use error::GaError;
pub use individual::Individual;
pub use runner::{GaResult, GaRunner};
pub use selection::{select_index, Extreme};
pub use types::GaProblem;
