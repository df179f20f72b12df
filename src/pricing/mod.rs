//! European option pricing under Black-Scholes-Merton.
//!
//! This module provides closed-form prices and Greeks for European vanilla
//! options, and implied volatility via Newton-Raphson inversion of the
//! pricing formula.
//!
//! # Overview
//!
//! Every quantity is a pure function of five inputs (S, K, T, r, σ) and the
//! option variant, through the standardized distances
//!
//! - `d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)`
//! - `d2 = d1 − σ·√T`
//!
//! # Implied Volatility
//!
//! There is no analytical inverse of Black-Scholes in σ, so the solver runs
//! Newton-Raphson on `price(σ) − market_price` with vega as the derivative.
//! Non-convergence (vega too small, iteration cap reached) is reported as
//! [`PricingError::DidNotConverge`] carrying the last estimate, never as a
//! silent best guess.
//!
//! # Example
//!
//! ```
//! use option_pricer_rs::pricing::{OptionContract, OptionType};
//!
//! let call = OptionContract::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call)?;
//! assert!((call.price() - 10.4506).abs() < 1e-3);
//!
//! let iv = call.with_volatility(0.5)?.implied_volatility(10.4506)?;
//! assert!((iv.iv - 0.2).abs() < 1e-4);
//! # Ok::<(), option_pricer_rs::pricing::PricingError>(())
//! ```

mod analytics;
mod black_scholes;
mod contract;
mod error;
mod solver;
mod stats;
mod types;

pub use analytics::{
    ATM_SEED_VOLATILITY, AtmVolatility, DAYS_PER_YEAR, DEFAULT_SWEEP_POINTS, QuotedOption,
    SensitivityMeasure, SweepPoint, atm_volatility, iv_rank, nearest_expiry, nearest_strike,
    sensitivity_sweep, year_fraction,
};
pub use black_scholes::BlackScholes;
pub use contract::OptionContract;
pub use error::{NonConvergence, PricingError};
pub use solver::{SolverConfig, newton_raphson, solve_iv, solve_iv_bisection};
pub use stats::{norm_cdf, norm_pdf};
pub use types::{Greeks, IVSolution, MarketParams, OptionType};
