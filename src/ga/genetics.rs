//! Domain hooks for a population.
//!
//! [`Genetics`] is the trait a domain implements to plug its solution
//! representation into the generic [`Population`](crate::ga::Population)
//! engine: how individuals are created, recombined, and perturbed. The
//! engine owns everything else (ranking, parent selection, mutation
//! gating, and score bookkeeping).

use super::selection;
use super::types::Individual;
use crate::random::RandomSource;

/// The parents assigned to one population slot during crossover.
///
/// Values are indices into the rank-sorted population. Slot 0 always
/// receives a [`Single`](ParentGroup::Single) group holding the best
/// individual (elitism: passed through without genetic mixing); every
/// other slot receives a [`Pair`](ParentGroup::Pair) of two distinct
/// indices chosen by [`Genetics::select_parents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentGroup {
    /// One parent, copied verbatim into the slot.
    Single(usize),
    /// Two distinct parents to be recombined.
    Pair(usize, usize),
}

/// Domain-specific genetic operators for one individual type.
///
/// Implementations define the solution representation and the three
/// operators the population engine delegates to. All hooks receive the
/// population's own random stream; they must take their draws from it (and
/// nowhere else) so that runs stay reproducible for a fixed seed.
pub trait Genetics {
    /// The individual type this domain evolves.
    type Individual: Individual;

    /// Creates `n` fresh individuals.
    ///
    /// Called by [`Population::initialize`](crate::ga::Population::initialize);
    /// the previous individuals are discarded. Implementations typically
    /// randomize each individual's genes from `rng`.
    fn initialize(&self, n: usize, rng: &mut RandomSource) -> Vec<Self::Individual>;

    /// Recombines parents into the next generation, in place.
    ///
    /// `parents` holds one group per slot of `individuals`. Implementations
    /// must overwrite every slot's genes based on its assigned group: a
    /// [`ParentGroup::Single`] slot copies that parent's genes verbatim, a
    /// [`ParentGroup::Pair`] slot mixes the two. Since parents are
    /// themselves population members, implementations should compute all
    /// offspring genes before writing any of them back.
    fn crossover(
        &self,
        individuals: &mut [Self::Individual],
        parents: &[ParentGroup],
        rng: &mut RandomSource,
    );

    /// Perturbs one individual in place.
    ///
    /// Called by [`Population::mutate`](crate::ga::Population::mutate) for
    /// each individual that passes the mutation-rate gate.
    fn mutate(&self, individual: &mut Self::Individual, rng: &mut RandomSource);

    /// Selects two distinct parent indices from a rank-sorted population.
    ///
    /// The default is rank-biased rejection sampling
    /// ([`select_rank_biased`](crate::ga::select_rank_biased)); override to
    /// change the selection pressure.
    fn select_parents(&self, size: usize, rng: &mut RandomSource) -> (usize, usize) {
        selection::select_rank_biased(size, rng)
    }
}
