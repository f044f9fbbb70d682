//! Generic genetic-algorithm engine.
//!
//! A sequential, single-population, single-objective genetic algorithm
//! built on trait-based abstractions. The engine knows nothing about any
//! particular solution representation: domains plug in through
//! [`Genetics`] (creation, crossover, mutation) and [`FigureOfMerit`]
//! (scoring, acceptance, ordering).
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution carrying its fitness score
//! - [`FigureOfMerit`]: scoring plus acceptance/comparison policy
//! - [`Genetics`]: domain operators behind the [`Population`] engine
//!
//! # Key Types
//!
//! - [`Population`]: ranked individuals, elitist crossover, mutation gating
//! - [`GeneticAlgorithm`]: the generation loop
//! - [`GaConfig`]: run parameters with builder and validation
//!
//! # Algorithm Flow
//!
//! 1. Create and score an initial population.
//! 2. Until the figure of merit accepts the best individual or the
//!    generation budget is exhausted: select parents among the fittest
//!    (rank-biased), cross them over into a new population (the best
//!    individual passes through unchanged), mutate some individuals,
//!    rescore and re-rank.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod genetics;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use genetics::{Genetics, ParentGroup};
pub use population::Population;
pub use runner::{GeneticAlgorithm, LoopState};
pub use selection::select_rank_biased;
pub use types::{FigureOfMerit, Individual};
