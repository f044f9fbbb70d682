//! Error types for the optimization engine.
//!
//! The engine never recovers or retries internally: every error aborts the
//! current call and propagates to the caller unchanged. A `score()` or
//! `crossover()` that fails leaves the population in an explicitly unsorted
//! state; callers are expected to treat the whole optimization run as failed.

/// Errors produced by the optimization engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// Scoring or ranking was attempted before a figure of merit was assigned.
    #[error("no figure of merit assigned to this population")]
    MissingFigureOfMerit,

    /// [`next_generation`](crate::ga::GeneticAlgorithm::next_generation) was
    /// called before [`initialize`](crate::ga::GeneticAlgorithm::initialize).
    #[error("optimization loop is not initialized")]
    NotInitialized,

    /// A rank outside `[0, size)` was requested.
    #[error("rank {rank} is out of range [0, {size})")]
    RankOutOfRange { rank: usize, size: usize },

    /// A mutation rate outside `[0, 1]` was supplied.
    #[error("mutation rate {rate} is out of range [0, 1]")]
    MutateRateOutOfRange { rate: f64 },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
