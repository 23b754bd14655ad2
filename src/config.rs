//! Engine configuration.
//!
//! [`GaConfig`] holds every parameter the engine reads. Nothing is
//! process-global: the fitness target and every knob live here and are
//! threaded through [`GaEngine`](crate::GaEngine) explicitly, so
//! multiple engines can run side by side without aliasing each other.

use crate::error::GaError;

/// Configuration for the steady-state GA engine.
///
/// # Defaults
///
/// ```
/// use steady_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.pop_size, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use steady_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_pop_size(200)
///     .with_tournament_size(5)
///     .with_fitness_target(42.0)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Fixed for the lifetime
    /// of a run: steady-state replacement overwrites slots in place.
    ///
    /// Must be at least 2 (breeding needs two parents and two
    /// destination slots). Typical range: 20–500.
    pub pop_size: usize,

    /// Tournament size for both parent selection (best) and replacement
    /// selection (worst).
    ///
    /// Sampling is without replacement, so this must not exceed
    /// `pop_size`. Higher values mean stronger selection pressure.
    pub tournament_size: usize,

    /// The fitness value the engine drives the population toward.
    ///
    /// Individuals are ranked by `|fitness - fitness_target|`; the run
    /// converges when some individual hits the target exactly. May be
    /// changed between steps via
    /// [`GaEngine::set_fitness_target`](crate::GaEngine::set_fitness_target).
    pub fitness_target: f64,

    /// Percentage (0–100) of parent draws that produce a brand-new
    /// random individual instead of selecting from the population.
    ///
    /// This is the exploration knob: 0 breeds exclusively from the
    /// current population, 100 degenerates into random search.
    pub prob_random_parent: u8,

    /// Whether one individual may serve as both parents of a breeding
    /// event.
    ///
    /// `true` matches the classic formulation (two fully independent
    /// parent draws). With `false`, the second tournament excludes the
    /// first parent's slot.
    pub allow_self_mating: bool,

    /// Generation bound for [`GaRunner`](crate::GaRunner).
    ///
    /// The stepping engine itself has no horizon; this only limits the
    /// one-shot driver.
    pub max_generations: usize,

    /// Whether to evaluate the initial population in parallel.
    ///
    /// Only has an effect when the crate is built with the `parallel`
    /// feature; the breeding loop itself is sequential by design.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            pop_size: 100,
            tournament_size: 3,
            fitness_target: 0.0,
            prob_random_parent: 20,
            allow_self_mating: true,
            max_generations: 500,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the fitness target.
    pub fn with_fitness_target(mut self, target: f64) -> Self {
        self.fitness_target = target;
        self
    }

    /// Sets the random-parent percentage, clamped to 100.
    pub fn with_prob_random_parent(mut self, percent: u8) -> Self {
        self.prob_random_parent = percent.min(100);
        self
    }

    /// Allows or forbids an individual mating with itself.
    pub fn with_allow_self_mating(mut self, allow: bool) -> Self {
        self.allow_self_mating = allow;
        self
    }

    /// Sets the generation bound for the one-shot runner.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel initial evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset favoring exploration: frequent random parents, light
    /// tournament pressure.
    ///
    /// - Random parents: 40%, Tournament: 2, Population: 200
    pub fn exploratory() -> Self {
        Self {
            pop_size: 200,
            tournament_size: 2,
            prob_random_parent: 40,
            ..Self::default()
        }
    }

    /// Preset favoring exploitation: breeding only from the population,
    /// strong tournament pressure.
    ///
    /// - Random parents: 0%, Tournament: 7, Population: 100
    pub fn greedy() -> Self {
        Self {
            tournament_size: 7,
            prob_random_parent: 0,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Checked once at engine construction so that parameter errors
    /// surface immediately rather than mid-run.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.pop_size < 2 {
            return Err(GaError::Configuration(
                "pop_size must be at least 2".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(GaError::Configuration(
                "tournament_size must be at least 1".into(),
            ));
        }
        if self.tournament_size > self.pop_size {
            return Err(GaError::Configuration(format!(
                "tournament_size ({}) must not exceed pop_size ({})",
                self.tournament_size, self.pop_size
            )));
        }
        if self.prob_random_parent > 100 {
            return Err(GaError::Configuration(
                "prob_random_parent must be a percentage in 0..=100".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(GaError::Configuration(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.pop_size, 100);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.fitness_target, 0.0);
        assert_eq!(config.prob_random_parent, 20);
        assert!(config.allow_self_mating);
        assert_eq!(config.max_generations, 500);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_pop_size(50)
            .with_tournament_size(5)
            .with_fitness_target(3.0)
            .with_prob_random_parent(10)
            .with_allow_self_mating(false)
            .with_max_generations(200)
            .with_seed(42);

        assert_eq!(config.pop_size, 50);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.fitness_target, 3.0);
        assert_eq!(config.prob_random_parent, 10);
        assert!(!config.allow_self_mating);
        assert_eq!(config.max_generations, 200);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_prob_random_parent_clamps() {
        let config = GaConfig::default().with_prob_random_parent(150);
        assert_eq!(config.prob_random_parent, 100);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_pop_size(1).validate().is_err());
        assert!(GaConfig::default().with_pop_size(0).validate().is_err());
        assert!(GaConfig::default().with_pop_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_tournament_size_zero() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_exceeds_population() {
        let config = GaConfig::default()
            .with_pop_size(10)
            .with_tournament_size(11);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tournament_size"));

        // Equal is allowed: the tournament is then the whole population.
        let config = GaConfig::default()
            .with_pop_size(10)
            .with_tournament_size(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default()
            .with_max_generations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_presets_validate() {
        assert!(GaConfig::exploratory().validate().is_ok());
        assert!(GaConfig::greedy().validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::greedy().with_pop_size(30).with_seed(7);
        assert_eq!(config.pop_size, 30);
        assert_eq!(config.tournament_size, 7);
        assert_eq!(config.prob_random_parent, 0);
        assert_eq!(config.seed, Some(7));
    }
}
