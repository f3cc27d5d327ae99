use thiserror::Error;
use yield_opt_data::ProviderError;
use yield_opt_domain::ValidationError;
use yield_opt_simulation::prelude::SimulationError;

/// Failure of an optimization run.
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("opportunity catalog unavailable: {0}")]
    Provider(#[from] ProviderError),

    #[error("backtest misconfigured: {0}")]
    Simulation(#[from] SimulationError),
}

impl OptimizerError {
    /// Whether the caller, not the system, is at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
