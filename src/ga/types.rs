//! Individual and figure-of-merit contracts.
//!
//! [`Individual`] is what a population holds; [`FigureOfMerit`] decides
//! how individuals are scored, compared, and accepted. Together they keep
//! the engine independent of any solution representation.

/// A candidate solution in a population.
///
/// An individual carries its own fitness score; everything else (the
/// "genes") belongs to the concrete type. The score is meaningful only
/// after the owning population has called
/// [`score`](crate::ga::Population::score) since the individual's last
/// mutation or creation.
///
/// No validation is applied to scores: any `f64` is accepted, including NaN.
pub trait Individual {
    /// Returns the current score of this individual.
    fn score(&self) -> f64;

    /// Sets the score of this individual.
    ///
    /// Called by the population after evaluation.
    fn set_score(&mut self, score: f64);
}

/// A figure of merit: the pluggable fitness function plus acceptance and
/// comparison policy.
///
/// A figure of merit provides three things:
///
/// 1. **Evaluation**: [`evaluate`](Self::evaluate) computes an
///    individual's raw score. This is the only required method.
/// 2. **Acceptance**: whether a score/individual is good enough to end
///    the optimization. The default applies
///    [`is_better_score`](Self::is_better_score) against
///    [`accept_threshold`](Self::accept_threshold).
/// 3. **Comparison**: which of two scores/individuals is fitter. The
///    default is "higher is better"; domains where lower is better (e.g.
///    chi-square) override [`is_better_score`](Self::is_better_score).
///
/// For decisions not based solely on the score, override the
/// individual-taking variants [`accept`](Self::accept) and
/// [`is_better`](Self::is_better) directly.
pub trait FigureOfMerit<I: Individual>: Send + Sync {
    /// Evaluates the fitness of an individual.
    ///
    /// Must be pure with respect to the individual's genes: no side effects
    /// beyond what the scorer's own state (e.g. a stored dataset) already
    /// encodes.
    fn evaluate(&self, individual: &I) -> f64;

    /// The score threshold for accepting an individual as a final answer.
    ///
    /// Defaults to `0.0`.
    fn accept_threshold(&self) -> f64 {
        0.0
    }

    /// Decides whether a score can be accepted as a final answer.
    fn accept_score(&self, score: f64) -> bool {
        self.is_better_score(score, self.accept_threshold())
    }

    /// Decides whether an individual can be accepted as a final answer.
    fn accept(&self, individual: &I) -> bool {
        self.accept_score(individual.score())
    }

    /// Compares two scores; returns `true` if `score` beats `reference`.
    fn is_better_score(&self, score: f64, reference: f64) -> bool {
        score > reference
    }

    /// Compares two individuals; returns `true` if `individual` beats
    /// `reference`.
    fn is_better(&self, individual: &I, reference: &I) -> bool {
        self.is_better_score(individual.score(), reference.score())
    }
}
