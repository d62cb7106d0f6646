// src/models/mod.rs
pub mod binomial_tree;
pub mod black_scholes;
pub mod monte_carlo;

pub use binomial_tree::BinomialTreeModel;
pub use black_scholes::BlackScholesModel;
pub use monte_carlo::{MonteCarloPricing, SimulationRun};
