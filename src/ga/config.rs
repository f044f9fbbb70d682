//! Run configuration.
//!
//! [`GaConfig`] bundles the parameters a driver supplies for an
//! optimization run and applies them to the loop and the population in one
//! validated step.

use super::genetics::Genetics;
use super::population::Population;
use super::runner::GeneticAlgorithm;
use crate::error::GaError;

/// Configuration for an optimization run.
///
/// # Defaults
///
/// ```
/// use evofit::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations_max, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evofit::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(500)
///     .with_mutate_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each
    /// generation. Typical range: 100–1000.
    pub population_size: usize,

    /// Maximum number of generations before the loop gives up.
    pub generations_max: usize,

    /// Probability that an individual is mutated per generation (0.0–1.0).
    pub mutate_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` keeps the population's current stream.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations_max: 10_000,
            mutate_rate: 0.01,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generations_max(mut self, n: usize) -> Self {
        self.generations_max = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutate_rate(mut self, rate: f64) -> Self {
        self.mutate_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] describing the first offending parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 2 for parent selection".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutate_rate) {
            return Err(GaError::InvalidConfig(format!(
                "mutate_rate {} is out of range [0, 1]",
                self.mutate_rate
            )));
        }
        Ok(())
    }

    /// Validates, then applies this configuration to a loop and a
    /// population.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] if validation fails; nothing is applied
    /// in that case.
    pub fn apply<G: Genetics>(
        &self,
        algorithm: &mut GeneticAlgorithm,
        population: &mut Population<G>,
    ) -> Result<(), GaError> {
        self.validate()?;

        algorithm.set_generations_max(self.generations_max);
        algorithm.set_population_size(self.population_size);
        population
            .set_mutate_rate(self.mutate_rate)
            .expect("rate already validated");
        if let Some(seed) = self.seed {
            population.set_random_seed(seed);
        }
        Ok(())
    }
}
