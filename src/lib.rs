//! # Option Pricer
//!
//! Black-Scholes-Merton valuation of European vanilla options: closed-form
//! prices, the five standard Greeks, and implied volatility from an observed
//! market price.
//!
//! ## Key Features
//!
//! - **Immutable contracts**: [`OptionContract`](pricing::OptionContract) validates
//!   its inputs once at construction; every price and Greek is recomputed on demand.
//!
//! - **Library-grade normal CDF**: `N(x)` via the error function from `statrs`.
//!
//! - **Explicit solver outcomes**: implied volatility returns either a converged
//!   [`IVSolution`](pricing::IVSolution) or a `DidNotConverge` error holding the
//!   last estimate.
//!
//! - **Diagnostics**: solver steps are emitted as `tracing` events at TRACE level.
//!
//! ## Module Structure
//!
//! | Item | Description |
//! |------|-------------|
//! | [`pricing::norm_cdf`], [`pricing::norm_pdf`] | Standard normal primitives |
//! | [`pricing::BlackScholes`] | Closed-form price and Greeks over `(params, σ)` |
//! | [`pricing::OptionContract`] | Validated contract exposing price, Greeks, IV |
//! | [`pricing::solve_iv`] | Newton-Raphson implied volatility |
//! | [`pricing::sensitivity_sweep`], [`pricing::iv_rank`] | Analytics on top of the engine |
//!
//! ## Thread Safety
//!
//! All types are plain data (`Send + Sync`) and no global state exists, so
//! contracts can be valued from any number of threads without synchronization.

/// Black-Scholes-Merton pricing, Greeks and implied volatility.
pub mod pricing;

/// Commonly used items, for glob import.
pub mod prelude {
    pub use crate::pricing::{
        BlackScholes, Greeks, IVSolution, MarketParams, NonConvergence, OptionContract,
        OptionType, PricingError, SensitivityMeasure, SolverConfig, solve_iv, solve_iv_bisection,
    };
}
