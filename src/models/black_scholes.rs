// src/models/black_scholes.rs
//! Analytical Black-Scholes pricing for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives closed-form option values:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! Call = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! Put  = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//! ```
//! where Φ is the standard normal CDF.

use crate::math_utils::norm_cdf;
use crate::params::{OptionKind, PricingParameters};

/// Closed-form European option pricer. O(1), no dependencies, stateless.
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesModel {
    params: PricingParameters,
}

impl BlackScholesModel {
    pub fn new(params: PricingParameters) -> Self {
        BlackScholesModel { params }
    }

    pub fn params(&self) -> &PricingParameters {
        &self.params
    }

    /// Theoretical price of a European call or put.
    ///
    /// When σ√T = 0 the d₁/d₂ terms are undefined (division by zero); the
    /// asset is then riskless and the price collapses to the discounted
    /// intrinsic value against the forward, handled as an explicit branch:
    /// ```text
    /// Call = max(S - K·e^(-rT), 0)
    /// Put  = max(K·e^(-rT) - S, 0)
    /// ```
    pub fn calculate_option_price(&self, kind: OptionKind) -> f64 {
        let s = self.params.spot_price();
        let k = self.params.strike_price();
        let r = self.params.risk_free_rate();
        let sigma = self.params.volatility();
        let t = self.params.time_to_maturity_years();

        let sigma_sqrt_t = sigma * t.sqrt();
        let discounted_strike = k * (-r * t).exp();

        if sigma_sqrt_t == 0.0 {
            return match kind {
                OptionKind::Call => (s - discounted_strike).max(0.0),
                OptionKind::Put => (discounted_strike - s).max(0.0),
            };
        }

        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        match kind {
            OptionKind::Call => s * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionKind::Put => discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1),
        }
    }
}
