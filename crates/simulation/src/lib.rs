//! Stochastic return simulation for optimized portfolios.
//!
//! Randomness is always injected through a [`return_path::ReturnPathGenerator`],
//! so callers choose between seeded, entropy-backed and fixed paths.

/// Prelude module for convenient imports.
pub mod prelude;

/// Illustrative backtest.
pub mod backtest;
/// Simulation errors.
pub mod error;
/// Return multiplier generators.
pub mod return_path;
