// src/models/binomial_tree.rs
//! Cox-Ross-Rubinstein binomial lattice pricing, European exercise only
//!
//! # Math Framework
//!
//! The maturity is split into `n` steps of length Δt = T/n with
//! ```text
//! u = exp(σ√Δt),   d = 1/u,   p = (exp(rΔt) - d) / (u - d)
//! ```
//! Terminal node `i` (i up-moves) holds `S·u^i·d^(n-i)`; option values are
//! rolled back layer by layer under the risk-neutral probability `p`:
//! ```text
//! V[i] = e^(-rΔt) · (p·V[i+1] + (1-p)·V[i])
//! ```
//!
//! # Numerics
//!
//! `u^i·d^(n-i)` overflows for large `n`, so terminal prices are computed in
//! log space as `S·exp((2i - n)·ln u)`. Backward induction reuses a single
//! `n + 1` array rather than a 2-D tree, keeping memory at O(n) for step
//! counts up to 100,000.

use crate::error::{validation::*, PricingError, PricingResult};
use crate::params::{OptionKind, PricingParameters};
use rayon::prelude::*;

/// Discrete-time recombining lattice pricer.
#[derive(Debug, Clone, Copy)]
pub struct BinomialTreeModel {
    params: PricingParameters,
    number_of_time_steps: usize,
    dt: f64,
    ln_up: f64,
    up_probability: f64,
}

impl BinomialTreeModel {
    /// Build the lattice parameters.
    ///
    /// Fails with `InvalidParameter` when `number_of_time_steps == 0` or when
    /// the risk-neutral up-probability falls outside [0, 1] — the sign that
    /// this parameter/step-count combination violates the no-arbitrage
    /// discretization (too few steps for the given rate and volatility).
    pub fn new(params: PricingParameters, number_of_time_steps: usize) -> PricingResult<Self> {
        validate_count("number_of_time_steps", number_of_time_steps)?;

        let t = params.time_to_maturity_years();
        let dt = t / number_of_time_steps as f64;
        let ln_up = params.volatility() * dt.sqrt();

        // σ = 0 collapses the lattice (u = d = 1) and leaves p undefined;
        // pricing then short-circuits to the deterministic branch, so p is
        // only derived and range-checked for a genuine lattice.
        let up_probability = if ln_up == 0.0 {
            0.5
        } else {
            let up = ln_up.exp();
            let down = 1.0 / up;
            let p = ((params.risk_free_rate() * dt).exp() - down) / (up - down);
            if !(0.0..=1.0).contains(&p) {
                return Err(PricingError::InvalidParameter {
                    parameter: "risk_neutral_probability".to_string(),
                    value: p,
                    constraint: "must lie in [0, 1]; increase number_of_time_steps".to_string(),
                });
            }
            p
        };

        Ok(BinomialTreeModel {
            params,
            number_of_time_steps,
            dt,
            ln_up,
            up_probability,
        })
    }

    pub fn params(&self) -> &PricingParameters {
        &self.params
    }

    pub fn number_of_time_steps(&self) -> usize {
        self.number_of_time_steps
    }

    /// Risk-neutral up-probability `p`
    pub fn up_probability(&self) -> f64 {
        self.up_probability
    }

    /// Price by backward induction over the reused node-value array.
    pub fn calculate_option_price(&self, kind: OptionKind) -> f64 {
        let s = self.params.spot_price();
        let k = self.params.strike_price();
        let r = self.params.risk_free_rate();
        let n = self.number_of_time_steps;

        if self.ln_up == 0.0 {
            // Degenerate lattice: the asset grows deterministically to the
            // forward, same closed form as the zero-volatility analytic case.
            let discounted_strike = k * self.params.discount_factor();
            return match kind {
                OptionKind::Call => (s - discounted_strike).max(0.0),
                OptionKind::Put => (discounted_strike - s).max(0.0),
            };
        }

        // Terminal layer: node i after i up-moves and n-i down-moves.
        // ln(u^i d^(n-i)) = (2i - n)·ln(u), evaluated in log space.
        let ln_up = self.ln_up;
        let mut values: Vec<f64> = (0..=n)
            .into_par_iter()
            .map(|i| {
                let terminal = s * ((2.0 * i as f64 - n as f64) * ln_up).exp();
                kind.payoff(terminal, k)
            })
            .collect();

        let p = self.up_probability;
        let q = 1.0 - p;
        let step_discount = (-r * self.dt).exp();

        // In-place sweep: layer after layer, node i reads the old V[i] and
        // V[i+1] before either is needed again, so one array suffices.
        for layer in (0..n).rev() {
            for i in 0..=layer {
                values[i] = step_discount * (p * values[i + 1] + q * values[i]);
            }
        }

        values[0]
    }
}
