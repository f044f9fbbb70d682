//! Population engine: ranking, elitist crossover, mutation gating.
//!
//! [`Population`] owns the individuals, the random stream, and the score
//! bookkeeping; all domain behavior is delegated to a [`Genetics`]
//! implementation. The figure of merit is shared (read-mostly) and never
//! mutated during a generation.

use std::sync::Arc;

use super::genetics::{Genetics, ParentGroup};
use super::types::{FigureOfMerit, Individual};
use crate::error::GaError;
use crate::random::RandomSource;

const DEFAULT_SEED: u64 = 1234;
const DEFAULT_MUTATE_RATE: f64 = 0.01;

/// A fixed-size, rank-sorted population of individuals.
///
/// The population tracks a `sorted` flag so that ranking is recomputed only
/// after the individuals have changed: any call to
/// [`crossover`](Self::crossover) or [`mutate`](Self::mutate) invalidates
/// the ordering, any successful [`sort`](Self::sort) or
/// [`score`](Self::score) restores it with the best-ranked individual at
/// index 0.
pub struct Population<G: Genetics> {
    genetics: G,
    individuals: Vec<G::Individual>,
    parents: Vec<ParentGroup>,
    fom: Option<Arc<dyn FigureOfMerit<G::Individual>>>,
    rng: RandomSource,
    mutate_rate: f64,
    sorted: bool,
    score_mean: f64,
    score_rms: f64,
}

impl<G: Genetics> Population<G> {
    /// Creates an empty population over the given domain operators.
    ///
    /// The random stream starts from a fixed default seed and the mutation
    /// rate defaults to `0.01`; use [`set_random_seed`](Self::set_random_seed)
    /// and [`set_mutate_rate`](Self::set_mutate_rate) to change them.
    pub fn new(genetics: G) -> Self {
        Self {
            genetics,
            individuals: Vec::new(),
            parents: Vec::new(),
            fom: None,
            rng: RandomSource::new(DEFAULT_SEED),
            mutate_rate: DEFAULT_MUTATE_RATE,
            sorted: false,
            score_mean: 0.0,
            score_rms: 0.0,
        }
    }

    /// (Re)populates with `n` fresh individuals from the domain hook,
    /// discarding any existing ones, and marks the population unsorted.
    pub fn initialize(&mut self, n: usize) {
        self.individuals = self.genetics.initialize(n, &mut self.rng);
        debug_assert_eq!(self.individuals.len(), n);
        self.sorted = false;
    }

    /// Evaluates every individual through the figure of merit, stores the
    /// scores, updates the population mean and RMS, and re-ranks.
    ///
    /// No-op on an empty population. The RMS is
    /// `sqrt(max(0, E[s²] - E[s]²))`, clamped at zero so floating-point
    /// error cannot produce a negative variance.
    ///
    /// # Errors
    /// [`GaError::MissingFigureOfMerit`] if no figure of merit is assigned.
    pub fn score(&mut self) -> Result<(), GaError> {
        let fom = self.require_fom()?;

        if self.individuals.is_empty() {
            return Ok(());
        }

        self.score_mean = 0.0;
        self.score_rms = 0.0;
        for individual in &mut self.individuals {
            let score = fom.evaluate(individual);
            individual.set_score(score);
            self.score_mean += score;
            self.score_rms += score * score;
        }
        let n = self.individuals.len() as f64;
        self.score_mean /= n;
        self.score_rms = (self.score_rms / n - self.score_mean * self.score_mean)
            .max(0.0)
            .sqrt();

        self.sort()
    }

    /// Ranks the population best-first using the figure of merit's
    /// comparator.
    ///
    /// No-op if the ordering is already valid. The sort is a stable,
    /// early-exiting adjacent-exchange pass: out-of-order neighbors are
    /// swapped and the unsorted suffix shrinks until a pass makes no swap.
    /// O(N) when already sorted, O(N²) worst case; population sizes are
    /// modest (hundreds) and stability matters more than throughput here.
    ///
    /// # Errors
    /// [`GaError::MissingFigureOfMerit`] if no figure of merit is assigned.
    pub fn sort(&mut self) -> Result<(), GaError> {
        if self.sorted {
            return Ok(());
        }
        let fom = self.require_fom()?;

        self.sorted = true;
        if self.individuals.len() <= 1 {
            return Ok(());
        }

        let mut n = self.individuals.len();
        while n > 0 {
            let mut last_swap = 0;
            for i in 1..n {
                if fom.is_better(&self.individuals[i], &self.individuals[i - 1]) {
                    self.individuals.swap(i, i - 1);
                    last_swap = i;
                }
            }
            n = last_swap;
        }
        Ok(())
    }

    /// Replaces the population with the next generation.
    ///
    /// Ranks first, so slot 0 is guaranteed to hold the current best. One
    /// parent group is recorded per slot: slot 0 gets the best individual
    /// alone (elite pass-through), every other slot gets two distinct
    /// parents from [`Genetics::select_parents`]. The full group list is
    /// then handed to [`Genetics::crossover`], which overwrites every
    /// slot's genes in place. Marks the population unsorted.
    ///
    /// # Errors
    /// [`GaError::MissingFigureOfMerit`] if no figure of merit is assigned.
    pub fn crossover(&mut self) -> Result<(), GaError> {
        self.sort()?;

        let size = self.individuals.len();
        self.parents.clear();
        self.parents.reserve(size);
        for slot in 0..size {
            if slot == 0 {
                self.parents.push(ParentGroup::Single(0));
            } else {
                let (p1, p2) = self.genetics.select_parents(size, &mut self.rng);
                self.parents.push(ParentGroup::Pair(p1, p2));
            }
        }

        self.genetics
            .crossover(&mut self.individuals, &self.parents, &mut self.rng);
        self.sorted = false;
        Ok(())
    }

    /// Applies the mutation gate to every individual.
    ///
    /// For each individual, one uniform draw in `[0, 1)` is taken from the
    /// population's random stream; if it falls below the mutation rate, the
    /// domain mutation hook runs on that individual. The elite slot is not
    /// exempt. Marks the population unsorted.
    pub fn mutate(&mut self) {
        for i in 0..self.individuals.len() {
            let gate = self.rng.uniform_real(0.0, 1.0);
            if gate < self.mutate_rate {
                self.genetics.mutate(&mut self.individuals[i], &mut self.rng);
            }
        }
        self.sorted = false;
    }

    /// Returns the individual at the given rank (0 = best), ranking first
    /// if needed.
    ///
    /// # Errors
    /// [`GaError::RankOutOfRange`] if `rank >= len()`;
    /// [`GaError::MissingFigureOfMerit`] if ranking is needed but no figure
    /// of merit is assigned.
    pub fn best_fitted(&mut self, rank: usize) -> Result<&G::Individual, GaError> {
        if rank >= self.individuals.len() {
            return Err(GaError::RankOutOfRange {
                rank,
                size: self.individuals.len(),
            });
        }
        self.sort()?;
        Ok(&self.individuals[rank])
    }

    /// Returns the best-ranked individual. Shorthand for `best_fitted(0)`.
    pub fn best(&mut self) -> Result<&G::Individual, GaError> {
        self.best_fitted(0)
    }

    /// Destroys all individuals.
    pub fn clear(&mut self) {
        self.individuals.clear();
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Mean score from the most recent [`score`](Self::score) call.
    pub fn score_mean(&self) -> f64 {
        self.score_mean
    }

    /// Population RMS of the scores from the most recent
    /// [`score`](Self::score) call.
    pub fn score_rms(&self) -> f64 {
        self.score_rms
    }

    /// Assigns the figure of merit used for scoring and ranking.
    pub fn set_figure_of_merit(&mut self, fom: Arc<dyn FigureOfMerit<G::Individual>>) {
        self.fom = Some(fom);
    }

    /// The figure of merit, if one has been assigned.
    pub fn figure_of_merit(&self) -> Option<&Arc<dyn FigureOfMerit<G::Individual>>> {
        self.fom.as_ref()
    }

    /// Sets the mutation rate.
    ///
    /// # Errors
    /// [`GaError::MutateRateOutOfRange`] if `rate` is outside `[0, 1]`.
    pub fn set_mutate_rate(&mut self, rate: f64) -> Result<(), GaError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GaError::MutateRateOutOfRange { rate });
        }
        self.mutate_rate = rate;
        Ok(())
    }

    /// The current mutation rate.
    pub fn mutate_rate(&self) -> f64 {
        self.mutate_rate
    }

    /// Reseeds the population's random stream.
    pub fn set_random_seed(&mut self, seed: u64) {
        self.rng.set_seed(seed);
    }

    /// The domain operators.
    pub fn genetics(&self) -> &G {
        &self.genetics
    }

    /// Mutable access to the domain operators.
    pub fn genetics_mut(&mut self) -> &mut G {
        &mut self.genetics
    }

    fn require_fom(&self) -> Result<Arc<dyn FigureOfMerit<G::Individual>>, GaError> {
        self.fom.clone().ok_or(GaError::MissingFigureOfMerit)
    }
}
