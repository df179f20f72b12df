//! Newton-Raphson solver for implied volatility calculation.
//!
//! The iteration itself, [`newton_raphson`], only sees a function mapping a
//! trial volatility to `(price difference, vega)`. [`solve_iv`] plugs the
//! Black-Scholes closed form into it; tests can plug synthetic curves.
//!
//! Each step is reported at TRACE level through `tracing`, so diagnostics
//! stay silent unless a subscriber enables them for this crate.

use super::black_scholes::BlackScholes;
use super::error::{NonConvergence, PricingError};
use super::types::{IVSolution, MarketParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
    /// Convergence tolerance on the absolute price difference.
    pub tolerance: f64,
    /// Vega below which a Newton step is not attempted.
    pub min_vega: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-5,
            min_vega: 1e-6,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the minimum vega threshold.
    #[must_use]
    pub fn with_min_vega(mut self, min_vega: f64) -> Self {
        self.min_vega = min_vega;
        self
    }
}

fn validate_market_price(market_price: f64) -> Result<(), PricingError> {
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(PricingError::invalid("market_price", market_price));
    }
    Ok(())
}

/// Runs the Newton-Raphson iteration σ_{n+1} = σ_n - diff(σ_n) / vega(σ_n).
///
/// `objective` returns `(price(σ) - target, vega(σ))` for a trial σ. The
/// estimate is neither clamped nor damped, so a pathological objective can
/// drive it negative; the caller sees that in the returned estimate.
///
/// # Returns
/// - `Ok(IVSolution)` once `|diff| < tolerance`; `iterations` counts the
///   Newton steps taken before that point
/// - `Err(PricingError::DidNotConverge)` when vega drops below
///   `min_vega` or `max_iterations` steps pass, carrying the last estimate
pub fn newton_raphson<F>(
    initial_guess: f64,
    config: &SolverConfig,
    objective: F,
) -> Result<IVSolution, PricingError>
where
    F: Fn(f64) -> (f64, f64),
{
    let mut vol = initial_guess;

    for iteration in 0..config.max_iterations {
        let (diff, vega) = objective(vol);
        trace!(
            "iteration {}: vol={} price_diff={} vega={}",
            iteration, vol, diff, vega
        );

        if diff.abs() < config.tolerance {
            debug!("converged to {} after {} iterations", vol, iteration);
            return Ok(IVSolution::new(vol, iteration));
        }

        if vega.abs() < config.min_vega {
            debug!("vega {} below {} at vol={}, stopping", vega, config.min_vega, vol);
            return Err(PricingError::DidNotConverge {
                reason: NonConvergence::VegaTooSmall { vega },
                iterations: iteration,
                last_estimate: vol,
            });
        }

        vol -= diff / vega;
    }

    debug!(
        "no convergence after {} iterations, last vol={}",
        config.max_iterations, vol
    );
    Err(PricingError::DidNotConverge {
        reason: NonConvergence::IterationsExhausted,
        iterations: config.max_iterations,
        last_estimate: vol,
    })
}

/// Solves for the Black-Scholes implied volatility using Newton-Raphson.
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, time, rate, type)
/// - `market_price`: Observed market price to match, must be positive
/// - `initial_guess`: Starting volatility
/// - `config`: Solver configuration
///
/// # Example
/// ```
/// use option_pricer_rs::prelude::*;
///
/// let params = MarketParams::call(100.0, 100.0, 1.0, 0.05);
/// let solution = solve_iv(&params, 10.4506, 0.5, &SolverConfig::default()).unwrap();
/// assert!((solution.iv - 0.2).abs() < 1e-4);
/// ```
pub fn solve_iv(
    params: &MarketParams,
    market_price: f64,
    initial_guess: f64,
    config: &SolverConfig,
) -> Result<IVSolution, PricingError> {
    validate_market_price(market_price)?;

    newton_raphson(initial_guess, config, |vol| {
        let (price, vega) = BlackScholes::price_and_vega(params, vol);
        (price - market_price, vega)
    })
}

/// Solves for implied volatility by bisection over `[low, high]`.
///
/// Slower than Newton-Raphson but needs no derivative; useful as a retry
/// when [`solve_iv`] reports non-convergence. Never invoked automatically.
///
/// # Returns
/// - `Ok(IVSolution)` once the price difference or the bracket width drops
///   below the tolerance
/// - `Err(PricingError::InvalidParameter)` naming `low` unless it is finite
///   and positive, or `high` unless it is finite and above `low`
/// - `Err(PricingError::NoSolutionInBounds)` if the market price lies outside
///   `[price(low), price(high)]`
/// - `Err(PricingError::DidNotConverge)` after `max_iterations` halvings
pub fn solve_iv_bisection(
    params: &MarketParams,
    market_price: f64,
    config: &SolverConfig,
    low: f64,
    high: f64,
) -> Result<IVSolution, PricingError> {
    validate_market_price(market_price)?;
    if !(low > 0.0 && low.is_finite()) {
        return Err(PricingError::invalid("low", low));
    }
    if !(high > low && high.is_finite()) {
        return Err(PricingError::invalid("high", high));
    }

    if market_price < BlackScholes::price(params, low)
        || market_price > BlackScholes::price(params, high)
    {
        return Err(PricingError::NoSolutionInBounds { low, high });
    }

    let (mut low, mut high) = (low, high);
    for iteration in 0..config.max_iterations {
        let mid = 0.5 * (low + high);
        let diff = BlackScholes::price(params, mid) - market_price;
        trace!("bisection {}: vol={} price_diff={}", iteration, mid, diff);

        if diff.abs() < config.tolerance || (high - low) < config.tolerance {
            return Ok(IVSolution::new(mid, iteration));
        }

        if diff > 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    Err(PricingError::DidNotConverge {
        reason: NonConvergence::IterationsExhausted,
        iterations: config.max_iterations,
        last_estimate: 0.5 * (low + high),
    })
}
