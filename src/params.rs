// src/params.rs
//! Shared pricing inputs for all valuation models
//!
//! `PricingParameters` is the single validation point of the library: a value
//! that made it through [`PricingParameters::new`] is guaranteed usable by
//! every model, so the models themselves never re-check spot, strike, time or
//! volatility. Invalid inputs are rejected, never clamped.

use crate::error::{validation::*, PricingResult};

/// Days-per-year convention used to annualize the maturity.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option exercise right: buy (call) or sell (put) at the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Exercise payoff against a terminal price
    pub fn payoff(&self, terminal_price: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (terminal_price - strike).max(0.0),
            OptionKind::Put => (strike - terminal_price).max(0.0),
        }
    }
}

/// Immutable, validated inputs shared by all pricing models.
///
/// Invariants established at construction:
/// - `spot_price > 0`, `strike_price > 0`
/// - `time_to_maturity_days >= 1`
/// - `volatility >= 0` (zero is the degenerate riskless asset)
/// - `risk_free_rate` finite (annualized, continuously compounded)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParameters {
    spot_price: f64,
    strike_price: f64,
    time_to_maturity_days: u32,
    risk_free_rate: f64,
    volatility: f64,
}

impl PricingParameters {
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity_days: u32,
        risk_free_rate: f64,
        volatility: f64,
    ) -> PricingResult<Self> {
        validate_positive("spot_price", spot_price)?;
        validate_positive("strike_price", strike_price)?;
        validate_count("time_to_maturity_days", time_to_maturity_days as usize)?;
        validate_finite("risk_free_rate", risk_free_rate)?;
        validate_non_negative("volatility", volatility)?;

        Ok(PricingParameters {
            spot_price,
            strike_price,
            time_to_maturity_days,
            risk_free_rate,
            volatility,
        })
    }

    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn time_to_maturity_days(&self) -> u32 {
        self.time_to_maturity_days
    }

    /// Annualized maturity: `days / 365.0`
    pub fn time_to_maturity_years(&self) -> f64 {
        self.time_to_maturity_days as f64 / DAYS_PER_YEAR
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Present-value factor over the full maturity: `e^(-rT)`
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity_years()).exp()
    }
}
