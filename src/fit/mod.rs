//! Model fitting: the concrete domain layer over the GA engine.
//!
//! Fits a bounded-parameter function to weighted data by minimizing the
//! normalized chi-square between the function and the dataset.
//!
//! # Key Types
//!
//! - [`ParametricFunction`]: the external evaluable function being fitted
//! - [`FnFunction`]: closure-backed function implementation
//! - [`ParametricModel`]: an individual owning its own function instance
//! - [`Chi2FigureOfMerit`]: lower-is-better chi-square scoring
//! - [`ParametricGenetics`] / [`ParametricPopulation`]: the domain
//!   operators plugged into the engine
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use evofit::fit::{Chi2FigureOfMerit, FnFunction, ParametricGenetics};
//! use evofit::ga::{GeneticAlgorithm, Individual, Population};
//!
//! // Fit y = a*x to three exact data points.
//! let template = FnFunction::new(1, |p: &[f64], x: &[f64]| p[0] * x[0])
//!     .with_bounds(0, 0.0, 10.0);
//!
//! let mut fom = Chi2FigureOfMerit::new();
//! for x in [1.0, 2.0, 3.0] {
//!     fom.add_point(vec![x], 2.0 * x, 0.1);
//! }
//!
//! let mut population = Population::new(ParametricGenetics::new(Box::new(template)));
//! population.set_figure_of_merit(Arc::new(fom));
//! population.set_mutate_rate(0.1).unwrap();
//!
//! let mut alg = GeneticAlgorithm::new();
//! let best = alg.optimize(&mut population).unwrap();
//! assert!(best.score() < 0.1);
//! ```

mod chi2;
mod function;
mod genetics;
mod model;

pub use chi2::Chi2FigureOfMerit;
pub use function::{FnFunction, ParametricFunction};
pub use genetics::{ParametricGenetics, ParametricPopulation};
pub use model::ParametricModel;
