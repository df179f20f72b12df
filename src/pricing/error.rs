//! Error types for pricing and implied volatility calculation.

use std::fmt;

/// Why the Newton-Raphson solver stopped without matching the market price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NonConvergence {
    /// Vega at the current estimate fell below the configured minimum,
    /// so the Newton step could not be taken safely.
    VegaTooSmall {
        /// Vega observed at the last estimate.
        vega: f64,
    },
    /// The iteration cap was reached without meeting the tolerance.
    IterationsExhausted,
}

/// Errors raised by contract construction and the implied volatility solvers.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A contract or market input is outside its valid domain.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// Implied volatility solver terminated without convergence.
    DidNotConverge {
        /// Termination cause.
        reason: NonConvergence,
        /// Number of solver steps taken.
        iterations: u32,
        /// Best available volatility estimate when the solver stopped.
        last_estimate: f64,
    },

    /// The market price is not attainable for any volatility in the bracket.
    NoSolutionInBounds {
        /// Lower volatility bound.
        low: f64,
        /// Upper volatility bound.
        high: f64,
    },

    /// IV rank requested over an empty history.
    EmptyHistory,
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter { name, value }
    }

    /// Best-effort volatility carried by a non-converged solve.
    ///
    /// Returns `None` for every other error kind.
    #[must_use]
    pub fn last_estimate(&self) -> Option<f64> {
        match self {
            PricingError::DidNotConverge { last_estimate, .. } => Some(*last_estimate),
            _ => None,
        }
    }
}

impl fmt::Display for NonConvergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonConvergence::VegaTooSmall { vega } => write!(f, "vega {vega:e} too small"),
            NonConvergence::IterationsExhausted => write!(f, "iteration limit reached"),
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter: {name} = {value}")
            }
            PricingError::DidNotConverge {
                reason,
                iterations,
                last_estimate,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations ({reason}), last estimate: {last_estimate:.6}"
                )
            }
            PricingError::NoSolutionInBounds { low, high } => {
                write!(
                    f,
                    "no implied volatility within bounds [{low:.4}, {high:.4}]"
                )
            }
            PricingError::EmptyHistory => write!(f, "volatility history is empty"),
        }
    }
}

impl std::error::Error for PricingError {}
