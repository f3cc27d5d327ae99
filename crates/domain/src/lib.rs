//! Domain model for the yield portfolio optimizer.
//!
//! This crate defines the types shared by every stage of the pipeline:
//! - Yield opportunities as supplied by a catalog
//! - Optimization requests and their validation
//! - Allocations, portfolios and the full optimization report

/// Enumerations used across the domain.
pub mod enums;
/// Catalog entities.
pub mod entities;
/// Validation errors.
pub mod error;
/// Rounding and weighting helpers.
pub mod math;
/// Request, allocation and report value objects.
pub mod value_objects;

/// Builders for tests in this and downstream crates.
#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use entities::YieldOpportunity;
pub use error::ValidationError;
pub use value_objects::{
    Allocation, OptimizationReport, OptimizationRequest, OptimizedPortfolio, ScoredOpportunity,
};
