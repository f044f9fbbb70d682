//! The optimization loop.
//!
//! [`GeneticAlgorithm`] orchestrates a [`Population`] through generations
//! until its figure of merit accepts the best individual or the generation
//! budget runs out. There is nothing to override here: all variability
//! lives behind the [`Genetics`] and
//! [`FigureOfMerit`](crate::ga::FigureOfMerit) traits.
//!
//! Each generation is selection → crossover → mutation → rescoring, in
//! that fixed order.

use tracing::{debug, trace};

use super::genetics::Genetics;
use super::population::Population;
use crate::error::GaError;

/// Progress of an optimization loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// [`initialize`](GeneticAlgorithm::initialize) has not run yet.
    Uninitialized,
    /// Generations are being produced.
    Running,
    /// The loop ended: either an individual was accepted or the generation
    /// budget was exhausted.
    Terminated,
}

/// Drives a population through the evolutionary loop.
///
/// The loop can be run in one call with [`optimize`](Self::optimize), or
/// driven manually with [`initialize`](Self::initialize) +
/// [`next_generation`](Self::next_generation) to observe state between
/// generations, a deliberate seam for monitoring and testing.
///
/// ```no_run
/// # use evofit::ga::{GeneticAlgorithm, Population, Genetics};
/// # fn run<G: Genetics>(mut population: Population<G>) -> Result<(), evofit::error::GaError> {
/// let mut alg = GeneticAlgorithm::new();
/// alg.initialize(&mut population)?;
/// while alg.next_generation(&mut population)? {
///     println!("generation {}: mean {}", alg.current_generation(), population.score_mean());
/// }
/// # Ok(())
/// # }
/// ```
pub struct GeneticAlgorithm {
    generations_max: usize,
    population_size: usize,
    current_generation: usize,
    state: LoopState,
}

impl Default for GeneticAlgorithm {
    fn default() -> Self {
        Self {
            generations_max: 10_000,
            population_size: 100,
            current_generation: 0,
            state: LoopState::Uninitialized,
        }
    }
}

impl GeneticAlgorithm {
    /// Creates a loop with the default budget (10000 generations) and
    /// population size (100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the best individual for the population's figure of merit.
    ///
    /// Convenience driver: initializes, iterates until termination, and
    /// returns the best-ranked individual.
    ///
    /// # Errors
    /// Any error from the population or the figure of merit propagates
    /// unchanged; the run is then to be considered failed.
    pub fn optimize<'a, G: Genetics>(
        &mut self,
        population: &'a mut Population<G>,
    ) -> Result<&'a G::Individual, GaError> {
        self.initialize(population)?;
        while self.next_generation(population)? {}
        population.best_fitted(0)
    }

    /// Initializes the population (create + score) and resets the
    /// generation counter.
    ///
    /// # Errors
    /// [`GaError::MissingFigureOfMerit`] if the population has no figure
    /// of merit to score with.
    pub fn initialize<G: Genetics>(
        &mut self,
        population: &mut Population<G>,
    ) -> Result<(), GaError> {
        population.initialize(self.population_size);
        population.score()?;

        self.current_generation = 0;
        self.state = LoopState::Running;
        debug!(
            population_size = self.population_size,
            generations_max = self.generations_max,
            "optimization loop initialized"
        );
        Ok(())
    }

    /// Produces the next generation.
    ///
    /// Terminal conditions are checked first: if the figure of merit
    /// accepts the current best individual, or the generation counter has
    /// passed the budget, the loop terminates and `false` is returned.
    /// Otherwise the counter is incremented, the population goes through
    /// crossover → mutation → scoring, and `true` is returned.
    ///
    /// After termination further calls keep returning `false`.
    ///
    /// # Errors
    /// [`GaError::NotInitialized`] if [`initialize`](Self::initialize) has
    /// not run; population and figure-of-merit errors propagate unchanged.
    pub fn next_generation<G: Genetics>(
        &mut self,
        population: &mut Population<G>,
    ) -> Result<bool, GaError> {
        match self.state {
            LoopState::Uninitialized => return Err(GaError::NotInitialized),
            LoopState::Terminated => return Ok(false),
            LoopState::Running => {}
        }

        let fom = population
            .figure_of_merit()
            .cloned()
            .ok_or(GaError::MissingFigureOfMerit)?;
        if fom.accept(population.best_fitted(0)?) {
            debug!(
                generation = self.current_generation,
                "best individual accepted"
            );
            self.state = LoopState::Terminated;
            return Ok(false);
        }
        if self.current_generation > self.generations_max {
            debug!(
                generations_max = self.generations_max,
                "generation budget exhausted"
            );
            self.state = LoopState::Terminated;
            return Ok(false);
        }

        self.current_generation += 1;

        population.crossover()?;
        population.mutate();
        population.score()?;

        trace!(
            generation = self.current_generation,
            score_mean = population.score_mean(),
            score_rms = population.score_rms(),
        );
        Ok(true)
    }

    /// The current generation number (0 until the first generation runs).
    pub fn current_generation(&self) -> usize {
        self.current_generation
    }

    /// The loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Sets the maximum number of generations before giving up.
    pub fn set_generations_max(&mut self, generations_max: usize) {
        self.generations_max = generations_max;
    }

    /// The maximum number of generations.
    pub fn generations_max(&self) -> usize {
        self.generations_max
    }

    /// Sets the population size used by [`initialize`](Self::initialize).
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// The population size used by [`initialize`](Self::initialize).
    pub fn population_size(&self) -> usize {
        self.population_size
    }
}
