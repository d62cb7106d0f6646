//! # option-pricer: European Option Pricing Models
//!
//! A Rust library pricing European options under three independent valuation
//! models sharing one validated parameter contract:
//!
//! - **Black-Scholes**: closed-form analytic prices, O(1)
//! - **Monte Carlo**: parallel GBM path simulation with seedable,
//!   bit-reproducible randomness; simulated paths are exposed for plotting
//! - **Binomial tree**: Cox-Ross-Rubinstein lattice with O(steps) memory,
//!   stable up to 100,000 steps
//!
//! ## Quick Start
//!
//! ```rust
//! use option_pricer::{BlackScholesModel, OptionKind, PricingParameters};
//!
//! // S=100, K=100, 365 days, r=5%, σ=20%
//! let params = PricingParameters::new(100.0, 100.0, 365, 0.05, 0.2)?;
//!
//! let model = BlackScholesModel::new(params);
//! let call = model.calculate_option_price(OptionKind::Call);
//! let put = model.calculate_option_price(OptionKind::Put);
//! println!("call {:.4}  put {:.4}", call, put);
//! # Ok::<(), option_pricer::PricingError>(())
//! ```
//!
//! Every model instance is an independent pure computation over immutable
//! parameters; distinct pricings can run fully in parallel. The Monte Carlo
//! pricer is the only stateful component: it caches its own simulation run,
//! and pricing before `simulate_prices` fails with `NotSimulated` rather
//! than observing partial data.

// Module declarations
pub mod error;
pub mod market;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod params;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use models::{BinomialTreeModel, BlackScholesModel, MonteCarloPricing, SimulationRun};
pub use params::{OptionKind, PricingParameters};
