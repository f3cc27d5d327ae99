use thiserror::Error;

/// A request that cannot be optimized as submitted.
///
/// Every violated field is collected so the caller can fix them in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid optimization request: {}", .violations.join("; "))]
pub struct ValidationError {
    /// Human-readable description of each violation.
    pub violations: Vec<String>,
}

impl ValidationError {
    #[must_use]
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}
