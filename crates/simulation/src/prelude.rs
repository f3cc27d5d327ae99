//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use yield_opt_simulation::prelude::*;
//! ```

// Backtest
pub use crate::backtest::{BacktestConfig, BacktestSimulator};

// Errors
pub use crate::error::SimulationError;

// Return paths
pub use crate::return_path::{DeterministicReturnPath, JitteredReturnPath, ReturnPathGenerator};
