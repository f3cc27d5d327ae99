use std::sync::Arc;
use yield_opt_data::OpportunityProvider;
use yield_opt_optimization::Optimizer;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Catalog the optimizer draws from.
    pub provider: Arc<dyn OpportunityProvider>,
    pub optimizer: Arc<Optimizer>,
    /// Fixed backtest seed; a fresh entropy seed is used per request when unset.
    pub backtest_seed: Option<u64>,
}

impl AppState {
    #[must_use]
    pub fn new(provider: Arc<dyn OpportunityProvider>, optimizer: Optimizer) -> Self {
        Self {
            provider,
            optimizer: Arc::new(optimizer),
            backtest_seed: None,
        }
    }

    #[must_use]
    pub fn with_backtest_seed(mut self, seed: Option<u64>) -> Self {
        self.backtest_seed = seed;
        self
    }
}
