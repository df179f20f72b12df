//! Black-Scholes-Merton closed-form price and Greeks.
//!
//! Every function takes the fixed market parameters and the volatility as a
//! separate scalar, so the implied volatility solver can evaluate trial
//! volatilities without building a contract per step.
//!
//! The formulas are applied as written: no input is guarded here. Degenerate
//! inputs (`σ = 0`, `T = 0`, non-positive prices) yield `NaN` or `±∞`.
//! [`OptionContract`](super::OptionContract) validates at construction.

use super::stats::{norm_cdf, norm_pdf};
use super::types::{MarketParams, OptionType};

/// Black-Scholes pricing model implementation.
///
/// Provides methods for calculating option prices and Greeks
/// using the Black-Scholes-Merton formula.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    #[must_use]
    pub fn d1(params: &MarketParams, vol: f64) -> f64 {
        let time = params.time_to_expiry;
        ((params.spot / params.strike).ln() + (params.risk_free_rate + 0.5 * vol * vol) * time)
            / (vol * time.sqrt())
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    /// Calculates the theoretical option price.
    ///
    /// For calls: C = S·N(d1) - K·e^(-rT)·N(d2)
    /// For puts:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
    #[must_use]
    pub fn price(params: &MarketParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        let d2 = Self::d2(d1, vol, params.time_to_expiry);
        let discounted_strike = params.strike * params.discount_factor();

        match params.option_type {
            OptionType::Call => params.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
        }
    }

    /// Calculates delta (∂price/∂S).
    ///
    /// For calls: Δ = N(d1)
    /// For puts:  Δ = N(d1) - 1
    #[must_use]
    pub fn delta(params: &MarketParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        match params.option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => norm_cdf(d1) - 1.0,
        }
    }

    /// Calculates gamma (∂²price/∂S²), identical for calls and puts.
    ///
    /// Γ = N'(d1) / (S · σ · √T)
    #[must_use]
    pub fn gamma(params: &MarketParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        norm_pdf(d1) / (params.spot * vol * params.time_to_expiry.sqrt())
    }

    /// Calculates vega (∂price/∂σ), identical for calls and puts.
    ///
    /// Vega = S · N'(d1) · √T
    #[must_use]
    pub fn vega(params: &MarketParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        params.spot * norm_pdf(d1) * params.time_to_expiry.sqrt()
    }

    /// Calculates theta (-∂price/∂T), annualized.
    ///
    /// For calls: Θ = -S·N'(d1)·σ/(2√T) - r·K·e^(-rT)·N(d2)
    /// For puts:  Θ = -S·N'(d1)·σ/(2√T) + r·K·e^(-rT)·N(-d2)
    #[must_use]
    pub fn theta(params: &MarketParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        let d2 = Self::d2(d1, vol, params.time_to_expiry);
        let carry = params.risk_free_rate * params.strike * params.discount_factor();

        let decay = -params.spot * norm_pdf(d1) * vol / (2.0 * params.time_to_expiry.sqrt());

        match params.option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Calculates rho (∂price/∂r).
    ///
    /// For calls: ρ = K·T·e^(-rT)·N(d2)
    /// For puts:  ρ = -K·T·e^(-rT)·N(-d2)
    #[must_use]
    pub fn rho(params: &MarketParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        let d2 = Self::d2(d1, vol, params.time_to_expiry);
        let scale = params.strike * params.time_to_expiry * params.discount_factor();

        match params.option_type {
            OptionType::Call => scale * norm_cdf(d2),
            OptionType::Put => -scale * norm_cdf(-d2),
        }
    }

    /// Price and vega at a trial volatility, the pair a Newton step needs.
    #[must_use]
    pub fn price_and_vega(params: &MarketParams, vol: f64) -> (f64, f64) {
        (Self::price(params, vol), Self::vega(params, vol))
    }
}
