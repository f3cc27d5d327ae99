//! Yield portfolio optimization.
//!
//! This crate turns a catalog of yield opportunities into an allocation plan:
//! - Hard-constraint filtering and multi-factor scoring
//! - Tiered greedy allocation under position caps and minimum deposits
//! - Portfolio aggregation, diversification and risk analysis
//! - Recommendations, alternatives, backtest and monitoring plan

/// Prelude module for convenient imports.
pub mod prelude;

/// Capital allocation strategies.
pub mod allocation;
/// Alternative strategy generation.
pub mod alternatives;
/// Diversification scoring.
pub mod diversification;
/// Optimizer errors.
pub mod error;
/// Constraint filter.
pub mod filter;
/// Portfolio metrics and breakdowns.
pub mod metrics;
/// Monitoring plan builder.
pub mod monitoring;
/// Scoring objectives.
pub mod objective;
/// The end-to-end pipeline.
pub mod optimizer;
/// Portfolio aggregation.
pub mod portfolio;
/// Recommendation engine.
pub mod recommendations;
/// Risk analysis.
pub mod risk;
/// Opportunity ranking.
pub mod scoring;

pub use error::OptimizerError;
pub use optimizer::{Optimizer, OptimizerConfig};
