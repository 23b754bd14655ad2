//! Error types for the GA engine.
//!
//! All fallible public entry points return [`GaError`]. Configuration
//! problems are caught at construction/`setup()` time rather than deep
//! inside a generation loop.

use thiserror::Error;

/// Error type for engine construction and stepping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GaError {
    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// `step()` was called before `setup()` seeded a population.
    #[error("engine not initialized: call setup() before step()")]
    NotInitialized,
}
