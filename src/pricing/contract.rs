//! Immutable European option contract with price, Greeks and implied volatility.

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::solver::{SolverConfig, solve_iv};
use super::types::{Greeks, IVSolution, MarketParams, OptionType};
use serde::Serialize;

/// A European vanilla option valued under Black-Scholes-Merton.
///
/// All inputs are validated once in [`OptionContract::new`] and never change
/// afterwards; every quantity below is recomputed from them on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionContract {
    market: MarketParams,
    volatility: f64,
}

impl OptionContract {
    /// Creates a contract, rejecting inputs for which the formulas are undefined.
    ///
    /// # Arguments
    /// - `risk_free_rate`: Continuously-compounded annual rate, any finite value
    /// - `underlying_price`: Spot price, > 0
    /// - `strike_price`: Strike, > 0
    /// - `time_to_expiry`: Years to expiry, > 0
    /// - `volatility`: Annualized volatility, > 0
    /// - `option_type`: Call or Put
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(
        risk_free_rate: f64,
        underlying_price: f64,
        strike_price: f64,
        time_to_expiry: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let market = MarketParams::new(
            underlying_price,
            strike_price,
            time_to_expiry,
            risk_free_rate,
            option_type,
        );
        Self::from_market(market, volatility)
    }

    /// Creates a contract from market parameters and a volatility.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if any input is out of domain.
    pub fn from_market(market: MarketParams, volatility: f64) -> Result<Self, PricingError> {
        if !market.risk_free_rate.is_finite() {
            return Err(PricingError::invalid(
                "risk_free_rate",
                market.risk_free_rate,
            ));
        }
        ensure_positive("underlying_price", market.spot)?;
        ensure_positive("strike_price", market.strike)?;
        ensure_positive("time_to_expiry", market.time_to_expiry)?;
        ensure_positive("volatility", volatility)?;
        Ok(Self { market, volatility })
    }

    /// Returns a copy of this contract with a different volatility.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `volatility` is not positive.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::from_market(self.market, volatility)
    }

    /// Market parameters (everything except volatility).
    #[must_use]
    pub fn market(&self) -> &MarketParams {
        &self.market
    }

    /// Continuously-compounded risk-free rate (r).
    #[must_use]
    pub fn risk_free_rate(&self) -> f64 {
        self.market.risk_free_rate
    }

    /// Underlying spot price (S).
    #[must_use]
    pub fn underlying_price(&self) -> f64 {
        self.market.spot
    }

    /// Strike price (K).
    #[must_use]
    pub fn strike_price(&self) -> f64 {
        self.market.strike
    }

    /// Time to expiry in years (T).
    #[must_use]
    pub fn time_to_expiry(&self) -> f64 {
        self.market.time_to_expiry
    }

    /// Annualized volatility (σ).
    #[must_use]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Call or Put.
    #[must_use]
    pub fn option_type(&self) -> OptionType {
        self.market.option_type
    }

    /// Standardized distance d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T).
    #[must_use]
    pub fn d1(&self) -> f64 {
        BlackScholes::d1(&self.market, self.volatility)
    }

    /// Standardized distance d2 = d1 - σ√T.
    #[must_use]
    pub fn d2(&self) -> f64 {
        BlackScholes::d2(self.d1(), self.volatility, self.market.time_to_expiry)
    }

    /// Theoretical price.
    #[must_use]
    pub fn price(&self) -> f64 {
        BlackScholes::price(&self.market, self.volatility)
    }

    /// ∂price/∂S.
    #[must_use]
    pub fn delta(&self) -> f64 {
        BlackScholes::delta(&self.market, self.volatility)
    }

    /// ∂²price/∂S².
    #[must_use]
    pub fn gamma(&self) -> f64 {
        BlackScholes::gamma(&self.market, self.volatility)
    }

    /// ∂price/∂σ.
    #[must_use]
    pub fn vega(&self) -> f64 {
        BlackScholes::vega(&self.market, self.volatility)
    }

    /// -∂price/∂T, per year.
    #[must_use]
    pub fn theta(&self) -> f64 {
        BlackScholes::theta(&self.market, self.volatility)
    }

    /// ∂price/∂r.
    #[must_use]
    pub fn rho(&self) -> f64 {
        BlackScholes::rho(&self.market, self.volatility)
    }

    /// Price and all five Greeks in one value.
    #[must_use]
    pub fn greeks(&self) -> Greeks {
        Greeks {
            price: self.price(),
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
        }
    }

    /// Volatility at which this contract's model price equals `market_price`.
    ///
    /// The contract's own volatility is only the starting guess. Uses
    /// [`SolverConfig::default`].
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` for a non-positive or non-finite price
    /// - `PricingError::DidNotConverge` carrying the last estimate
    pub fn implied_volatility(&self, market_price: f64) -> Result<IVSolution, PricingError> {
        self.implied_volatility_with(market_price, &SolverConfig::default())
    }

    /// [`implied_volatility`](Self::implied_volatility) with an explicit solver configuration.
    ///
    /// # Errors
    /// Same as [`implied_volatility`](Self::implied_volatility).
    pub fn implied_volatility_with(
        &self,
        market_price: f64,
        config: &SolverConfig,
    ) -> Result<IVSolution, PricingError> {
        solve_iv(&self.market, market_price, self.volatility, config)
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    // also rejects NaN
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(name, value))
    }
}
