//! Higher-level analytics built on the pricing engine.
//!
//! - Sensitivity sweeps of price or a Greek across underlying prices
//! - Expiry and strike selection from a listed chain
//! - At-the-money implied volatility from a call/put quote pair
//! - IV rank of a current volatility against its history

use super::black_scholes::BlackScholes;
use super::contract::OptionContract;
use super::error::PricingError;
use super::solver::{SolverConfig, solve_iv};
use super::types::MarketParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of points in a default sensitivity sweep.
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// Sweep range as fractions of the contract's underlying price.
const SWEEP_LOW: f64 = 0.2;
const SWEEP_HIGH: f64 = 1.8;

/// Days per year used to turn calendar days into a year fraction.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Starting volatility for the ATM call/put solves.
pub const ATM_SEED_VOLATILITY: f64 = 0.5;

/// IV rank reported when the history has no range.
const FLAT_HISTORY_RANK: f64 = 50.0;

/// Quantity evaluated by a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitivityMeasure {
    /// Option price.
    Price,
    /// ∂price/∂S.
    Delta,
    /// ∂²price/∂S².
    Gamma,
    /// ∂price/∂σ.
    Vega,
    /// -∂price/∂T.
    Theta,
    /// ∂price/∂r.
    Rho,
}

impl SensitivityMeasure {
    /// Every measure, in display order.
    pub const ALL: [SensitivityMeasure; 6] = [
        SensitivityMeasure::Price,
        SensitivityMeasure::Delta,
        SensitivityMeasure::Gamma,
        SensitivityMeasure::Vega,
        SensitivityMeasure::Theta,
        SensitivityMeasure::Rho,
    ];

    /// Evaluates the measure for `params` at volatility `vol`.
    #[must_use]
    pub fn evaluate(self, params: &MarketParams, vol: f64) -> f64 {
        match self {
            SensitivityMeasure::Price => BlackScholes::price(params, vol),
            SensitivityMeasure::Delta => BlackScholes::delta(params, vol),
            SensitivityMeasure::Gamma => BlackScholes::gamma(params, vol),
            SensitivityMeasure::Vega => BlackScholes::vega(params, vol),
            SensitivityMeasure::Theta => BlackScholes::theta(params, vol),
            SensitivityMeasure::Rho => BlackScholes::rho(params, vol),
        }
    }
}

/// One sample of a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Underlying price the contract was revalued at.
    pub spot: f64,
    /// Value of the measure at that price.
    pub value: f64,
}

/// Revalues `measure` at `points` evenly spaced underlying prices from
/// 20% to 180% of the contract's spot, endpoints included.
///
/// Every other contract input is held fixed.
#[must_use]
pub fn sensitivity_sweep(
    contract: &OptionContract,
    measure: SensitivityMeasure,
    points: usize,
) -> Vec<SweepPoint> {
    let base = *contract.market();
    let low = base.spot * SWEEP_LOW;
    let high = base.spot * SWEEP_HIGH;
    let step = if points > 1 {
        (high - low) / (points - 1) as f64
    } else {
        0.0
    };

    (0..points)
        .map(|i| {
            let spot = low + step * i as f64;
            SweepPoint {
                spot,
                value: measure.evaluate(&base.with_spot(spot), contract.volatility()),
            }
        })
        .collect()
}

/// Converts calendar days to expiry into years.
#[must_use]
pub fn year_fraction(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Returns the strike closest to `spot`, or `None` if `strikes` is empty.
///
/// Ties resolve to the first strike in the slice.
#[must_use]
pub fn nearest_strike(spot: f64, strikes: &[f64]) -> Option<f64> {
    strikes
        .iter()
        .copied()
        .filter(|strike| strike.is_finite())
        .fold(None, |best: Option<f64>, strike| match best {
            Some(b) if (b - spot).abs() <= (strike - spot).abs() => Some(b),
            _ => Some(strike),
        })
}

/// Returns the days-to-expiry closest to `target_days`, or `None` if no
/// listed expiry is still open.
///
/// Negative (already expired) and non-finite entries are skipped. Ties
/// resolve to the first expiry in the slice.
#[must_use]
pub fn nearest_expiry(days_to_expiries: &[f64], target_days: f64) -> Option<f64> {
    days_to_expiries
        .iter()
        .copied()
        .filter(|days| days.is_finite() && *days >= 0.0)
        .fold(None, |best: Option<f64>, days| match best {
            Some(b) if (b - target_days).abs() <= (days - target_days).abs() => Some(b),
            _ => Some(days),
        })
}

/// Observed option quote: strike and traded price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotedOption {
    /// Strike of the quoted option.
    pub strike: f64,
    /// Observed market price.
    pub market_price: f64,
}

/// Implied volatilities of an at-the-money call/put pair and their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmVolatility {
    /// Implied volatility of the call quote.
    pub call_iv: f64,
    /// Implied volatility of the put quote.
    pub put_iv: f64,
}

impl AtmVolatility {
    /// Mean of the call and put implied volatilities.
    #[must_use]
    pub fn average(&self) -> f64 {
        0.5 * (self.call_iv + self.put_iv)
    }
}

/// Solves the implied volatility of a call and a put quote on the same
/// underlying and expiry, each seeded at [`ATM_SEED_VOLATILITY`].
///
/// # Errors
/// The first solver error from either leg.
pub fn atm_volatility(
    spot: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    call: QuotedOption,
    put: QuotedOption,
    config: &SolverConfig,
) -> Result<AtmVolatility, PricingError> {
    let call_params = MarketParams::call(spot, call.strike, time_to_expiry, risk_free_rate);
    let put_params = MarketParams::put(spot, put.strike, time_to_expiry, risk_free_rate);

    let call_iv = solve_iv(
        &call_params,
        call.market_price,
        ATM_SEED_VOLATILITY,
        config,
    )?
    .iv;
    let put_iv = solve_iv(&put_params, put.market_price, ATM_SEED_VOLATILITY, config)?.iv;

    debug!("atm call iv={} put iv={}", call_iv, put_iv);
    Ok(AtmVolatility { call_iv, put_iv })
}

/// Ranks `current` within the range spanned by `history` and itself, in
/// percent: `(current - min) / (max - min) * 100`.
///
/// Returns 50 when the range is empty (all observations equal).
///
/// # Errors
/// - `PricingError::InvalidParameter` if `current` is not finite
/// - `PricingError::EmptyHistory` if `history` is empty
pub fn iv_rank(current: f64, history: &[f64]) -> Result<f64, PricingError> {
    if !current.is_finite() {
        return Err(PricingError::invalid("current", current));
    }
    if history.is_empty() {
        return Err(PricingError::EmptyHistory);
    }

    let (min, max) = history
        .iter()
        .fold((current, current), |(lo, hi), &iv| (lo.min(iv), hi.max(iv)));

    if max - min > 0.0 {
        Ok((current - min) / (max - min) * 100.0)
    } else {
        Ok(FLAT_HISTORY_RANK)
    }
}
