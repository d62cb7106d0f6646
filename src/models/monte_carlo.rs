// src/models/monte_carlo.rs
//! Monte Carlo pricing of European options under geometric Brownian motion
//!
//! # Math Framework
//!
//! Simulates the GBM SDE under the risk-neutral measure:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//! using the exact per-step solution
//! ```text
//! S_{t+Δt} = S_t · exp((r - σ²/2)Δt + σ√Δt · Z),   Z ~ N(0,1)
//! ```
//! so discretization introduces no bias: the only error is sampling error,
//! which shrinks as O(1/√N) in the number of simulated paths.
//!
//! # Step Granularity
//!
//! Paths are discretized with one step per day to maturity. The terminal
//! distribution is invariant to the step count (exact GBM steps), so this
//! choice only affects the shape of plotted paths and the cost of a run.
//!
//! # Reproducibility
//!
//! Each path derives its RNG stream from `(seed, path_index)` via
//! [`RngFactory`], so a fixed seed yields a bit-identical [`SimulationRun`]
//! regardless of how rayon schedules the path workers.

use crate::error::{validation::*, PricingError, PricingResult};
use crate::params::{OptionKind, PricingParameters};
use crate::rng::{self, RngFactory};
use rayon::prelude::*;

/// One batch of simulated price paths, owned by a [`MonteCarloPricing`]
/// instance.
///
/// Every path has the same length (`steps + 1` points, one per time step plus
/// the origin) and starts at the spot price; the last element is the terminal
/// price. A run is built whole by `simulate_prices` and never mutated in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    paths: Vec<Vec<f64>>,
}

impl SimulationRun {
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Points per path (`number_of_time_steps + 1`)
    pub fn path_length(&self) -> usize {
        self.paths.first().map_or(0, Vec::len)
    }

    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Terminal price of every path, in path order
    pub fn terminal_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.paths.iter().map(|p| *p.last().expect("non-empty path"))
    }
}

/// Stochastic European option pricer: discounted sample-mean payoff over
/// simulated GBM terminal prices.
#[derive(Debug, Clone)]
pub struct MonteCarloPricing {
    params: PricingParameters,
    number_of_simulations: usize,
    number_of_time_steps: usize,
    rng_factory: RngFactory,
    run: Option<SimulationRun>,
}

impl MonteCarloPricing {
    /// Default base seed, used by [`MonteCarloPricing::new`]
    pub const DEFAULT_SEED: u64 = 12345;

    pub fn new(params: PricingParameters, number_of_simulations: usize) -> PricingResult<Self> {
        Self::with_seed(params, number_of_simulations, Self::DEFAULT_SEED)
    }

    /// Construct with an explicit seed for deterministic runs
    pub fn with_seed(
        params: PricingParameters,
        number_of_simulations: usize,
        seed: u64,
    ) -> PricingResult<Self> {
        validate_count("number_of_simulations", number_of_simulations)?;

        Ok(MonteCarloPricing {
            params,
            number_of_simulations,
            // one step per day to maturity
            number_of_time_steps: params.time_to_maturity_days() as usize,
            rng_factory: RngFactory::new(seed),
            run: None,
        })
    }

    pub fn number_of_simulations(&self) -> usize {
        self.number_of_simulations
    }

    pub fn number_of_time_steps(&self) -> usize {
        self.number_of_time_steps
    }

    /// The completed simulation run, if `simulate_prices` has been called
    pub fn simulation_run(&self) -> Option<&SimulationRun> {
        self.run.as_ref()
    }

    /// Generate all price paths, replacing any previous run wholesale.
    ///
    /// Paths are generated in parallel; storage is exactly
    /// `number_of_simulations · (steps + 1)` floats, no intermediate copies.
    pub fn simulate_prices(&mut self) {
        let s0 = self.params.spot_price();
        let r = self.params.risk_free_rate();
        let sigma = self.params.volatility();
        let t = self.params.time_to_maturity_years();
        let steps = self.number_of_time_steps;

        let dt = t / steps as f64;
        let drift = (r - 0.5 * sigma * sigma) * dt;
        let vol_step = sigma * dt.sqrt();

        let paths: Vec<Vec<f64>> = if sigma == 0.0 {
            // Zero variance: the asset grows deterministically at the
            // riskless rate. No RNG involved, every path is the drift path.
            let drift_path: Vec<f64> = (0..=steps)
                .map(|i| s0 * (r * dt * i as f64).exp())
                .collect();
            vec![drift_path; self.number_of_simulations]
        } else {
            let factory = self.rng_factory;
            (0..self.number_of_simulations)
                .into_par_iter()
                .map(|path_id| {
                    let mut rng = factory.path_rng(path_id as u64);
                    let mut path = Vec::with_capacity(steps + 1);
                    path.push(s0);

                    let mut current = s0;
                    for _ in 0..steps {
                        let z = rng::normal_draw(&mut rng);
                        current *= (drift + vol_step * z).exp();
                        path.push(current);
                    }
                    path
                })
                .collect()
        };

        self.run = Some(SimulationRun { paths });
    }

    /// Discounted sample-mean payoff over all simulated terminal prices:
    /// ```text
    /// Call ≈ e^(-rT) · mean(max(S_T - K, 0))
    /// Put  ≈ e^(-rT) · mean(max(K - S_T, 0))
    /// ```
    ///
    /// Fails with [`PricingError::NotSimulated`] if no run exists yet.
    pub fn calculate_option_price(&self, kind: OptionKind) -> PricingResult<f64> {
        let run = self.run.as_ref().ok_or(PricingError::NotSimulated)?;
        let strike = self.params.strike_price();

        let sum_payoff: f64 = run
            .paths
            .par_iter()
            .map(|path| {
                let terminal = *path.last().expect("non-empty path");
                kind.payoff(terminal, strike)
            })
            .sum();

        Ok(self.params.discount_factor() * sum_payoff / run.num_paths() as f64)
    }

    /// First `count` paths of the current run, for the host's path plot.
    ///
    /// Returns all paths if `count` exceeds the run size and an empty slice
    /// for `count == 0`; never mutates the run. Fails with
    /// [`PricingError::NotSimulated`] if no run exists yet.
    pub fn plot_simulation_results(&self, count: usize) -> PricingResult<&[Vec<f64>]> {
        let run = self.run.as_ref().ok_or(PricingError::NotSimulated)?;
        Ok(&run.paths[..count.min(run.num_paths())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_params() -> PricingParameters {
        PricingParameters::new(100.0, 100.0, 365, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_price_before_simulation_fails() {
        let mc = MonteCarloPricing::with_seed(atm_params(), 100, 42).unwrap();
        assert_eq!(
            mc.calculate_option_price(OptionKind::Call),
            Err(PricingError::NotSimulated)
        );
        assert!(mc.plot_simulation_results(10).is_err());
        assert!(mc.simulation_run().is_none());
    }

    #[test]
    fn test_default_seed_constructor() {
        let mut mc1 = MonteCarloPricing::new(atm_params(), 100).unwrap();
        let mut mc2 =
            MonteCarloPricing::with_seed(atm_params(), 100, MonteCarloPricing::DEFAULT_SEED)
                .unwrap();
        mc1.simulate_prices();
        mc2.simulate_prices();
        assert_eq!(mc1.simulation_run(), mc2.simulation_run());
    }

    #[test]
    fn test_rejects_zero_simulations() {
        assert!(MonteCarloPricing::with_seed(atm_params(), 0, 42).is_err());
    }

    #[test]
    fn test_run_shape_invariants() {
        let mut mc = MonteCarloPricing::with_seed(atm_params(), 50, 42).unwrap();
        mc.simulate_prices();

        let run = mc.simulation_run().unwrap();
        assert_eq!(run.num_paths(), 50);
        assert_eq!(run.path_length(), 366); // 365 daily steps + origin
        for path in run.paths() {
            assert_eq!(path.len(), 366);
            assert_eq!(path[0], 100.0);
            assert!(path.iter().all(|p| p.is_finite() && *p > 0.0));
        }
    }

    #[test]
    fn test_fixed_seed_reproducibility() {
        let mut mc1 = MonteCarloPricing::with_seed(atm_params(), 200, 7).unwrap();
        let mut mc2 = MonteCarloPricing::with_seed(atm_params(), 200, 7).unwrap();
        mc1.simulate_prices();
        mc2.simulate_prices();

        assert_eq!(mc1.simulation_run(), mc2.simulation_run());
        assert_eq!(
            mc1.calculate_option_price(OptionKind::Call).unwrap(),
            mc2.calculate_option_price(OptionKind::Call).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut mc1 = MonteCarloPricing::with_seed(atm_params(), 200, 7).unwrap();
        let mut mc2 = MonteCarloPricing::with_seed(atm_params(), 200, 8).unwrap();
        mc1.simulate_prices();
        mc2.simulate_prices();

        assert_ne!(mc1.simulation_run(), mc2.simulation_run());
    }

    #[test]
    fn test_resimulation_replaces_run() {
        let mut mc = MonteCarloPricing::with_seed(atm_params(), 100, 42).unwrap();
        mc.simulate_prices();
        let first = mc.simulation_run().unwrap().clone();
        mc.simulate_prices();

        // Same seed, same parameters: the replacement run is identical
        assert_eq!(&first, mc.simulation_run().unwrap());
    }

    #[test]
    fn test_plot_selection_bounds() {
        let mut mc = MonteCarloPricing::with_seed(atm_params(), 25, 42).unwrap();
        mc.simulate_prices();

        assert_eq!(mc.plot_simulation_results(0).unwrap().len(), 0);
        assert_eq!(mc.plot_simulation_results(10).unwrap().len(), 10);
        assert_eq!(mc.plot_simulation_results(1000).unwrap().len(), 25);
    }

    #[test]
    fn test_zero_volatility_deterministic_path() {
        let params = PricingParameters::new(100.0, 100.0, 365, 0.05, 0.0).unwrap();
        let mut mc = MonteCarloPricing::with_seed(params, 10, 42).unwrap();
        mc.simulate_prices();

        let run = mc.simulation_run().unwrap();
        let expected_terminal = 100.0 * (0.05f64).exp();
        for terminal in run.terminal_prices() {
            assert!((terminal - expected_terminal).abs() < 1e-9);
        }

        // Price equals discounted intrinsic of the forward exactly
        let call = mc.calculate_option_price(OptionKind::Call).unwrap();
        let expected = (-0.05f64).exp() * (expected_terminal - 100.0);
        assert!((call - expected).abs() < 1e-9);
        let put = mc.calculate_option_price(OptionKind::Put).unwrap();
        assert_eq!(put, 0.0);
    }
}
