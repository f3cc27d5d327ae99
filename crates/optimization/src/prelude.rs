//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use yield_opt_optimization::prelude::*;
//! ```

// Pipeline
pub use crate::error::OptimizerError;
pub use crate::optimizer::{Optimizer, OptimizerConfig};

// Stages
pub use crate::allocation::{AllocationConfig, AllocationPlan, AllocationStrategy, TieredAllocator};
pub use crate::diversification::DiversificationConfig;
pub use crate::objective::{ScoringObjective, ScoringWeights, WeightedMultiFactor};
pub use crate::recommendations::RecommendationThresholds;
