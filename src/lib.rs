//! Pluggable evolutionary-optimization engine.
//!
//! Given a population of candidate solutions, a pluggable figure of merit,
//! and pluggable genetic operators, the engine searches for an individual
//! whose fitness crosses an acceptance threshold within a generation
//! budget.
//!
//! - **Genetic Algorithm engine** ([`ga`]): individual/figure-of-merit/
//!   population abstractions, rank-biased parent selection, elitist
//!   crossover, and the generation loop. Domain-agnostic: solution
//!   representations plug in through the [`ga::Genetics`] trait.
//! - **Model fitting** ([`fit`]): the concrete domain layer. Fits a
//!   bounded-parameter function to weighted data with a normalized
//!   chi-square figure of merit.
//!
//! # Design
//!
//! The engine is deliberately a sequential, single-population,
//! single-objective genetic algorithm. Each population owns a single
//! seeded random stream ([`random::RandomSource`]) that all operators draw
//! from in a fixed order per generation, so a run is bit-for-bit
//! reproducible from its seed. Figures of merit are shared read-only
//! ([`std::sync::Arc`]) between the driver and the population.

pub mod error;
pub mod fit;
pub mod ga;
pub mod random;
