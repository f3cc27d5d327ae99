//! The optimization pipeline.
//!
//! Catalog → filter → score → allocate → aggregate, then recommendations,
//! alternatives, risk analysis, backtest and monitoring over the result.

use crate::allocation::{AllocationConfig, AllocationStrategy, TieredAllocator};
use crate::alternatives::generate_alternatives;
use crate::diversification::DiversificationConfig;
use crate::error::OptimizerError;
use crate::filter::filter_opportunities;
use crate::metrics::calculate_metrics;
use crate::monitoring::build_monitoring_plan;
use crate::objective::{ScoringObjective, ScoringWeights, WeightedMultiFactor};
use crate::portfolio::build_portfolio;
use crate::recommendations::{RecommendationThresholds, generate_recommendations};
use crate::risk::analyze_risk;
use crate::scoring::score_opportunities;
use chrono::Utc;
use tracing::{debug, info, warn};
use yield_opt_data::{OpportunityProvider, filter_by_chains};
use yield_opt_domain::{OptimizationReport, OptimizationRequest, YieldOpportunity};
use yield_opt_simulation::prelude::{BacktestConfig, BacktestSimulator, ReturnPathGenerator};

/// Tunables of every pipeline stage. `Default` reproduces the dashboard's behavior.
#[derive(Debug, Clone, Default)]
pub struct OptimizerConfig {
    pub weights: ScoringWeights,
    pub allocation: AllocationConfig,
    pub diversification: DiversificationConfig,
    pub recommendations: RecommendationThresholds,
    pub backtest: BacktestConfig,
}

/// Stateless optimizer; one instance serves any number of requests.
pub struct Optimizer {
    config: OptimizerConfig,
    objective: Box<dyn ScoringObjective>,
    allocator: Box<dyn AllocationStrategy>,
    backtest: BacktestSimulator,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

impl std::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer")
            .field("config", &self.config)
            .field("allocator", &self.allocator.name())
            .finish_non_exhaustive()
    }
}

impl Optimizer {
    /// Builds the weighted multi-factor scorer and tiered allocator from `config`.
    #[must_use]
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            objective: Box::new(WeightedMultiFactor::new(config.weights.clone())),
            allocator: Box::new(TieredAllocator::new(config.allocation.clone())),
            backtest: BacktestSimulator::new(config.backtest.clone()),
            config,
        }
    }

    /// Replaces the scoring objective.
    #[must_use]
    pub fn with_objective(mut self, objective: Box<dyn ScoringObjective>) -> Self {
        self.objective = objective;
        self
    }

    /// Replaces the allocation strategy.
    #[must_use]
    pub fn with_allocator(mut self, allocator: Box<dyn AllocationStrategy>) -> Self {
        self.allocator = allocator;
        self
    }

    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Backtest simulator, used by hosts to build seeded return paths.
    #[must_use]
    pub fn backtest(&self) -> &BacktestSimulator {
        &self.backtest
    }

    /// Runs the full pipeline over an already fetched catalog.
    ///
    /// Opportunities outside `request.preferred_chains` are dropped here as
    /// well, so the result does not depend on the provider honoring the chain
    /// filter. Apart from `path` and the timestamp, the output is a pure
    /// function of the inputs.
    ///
    /// # Errors
    /// Returns [`OptimizerError::Validation`] when the request is malformed.
    pub fn optimize(
        &self,
        request: &OptimizationRequest,
        opportunities: Vec<YieldOpportunity>,
        path: &mut dyn ReturnPathGenerator,
    ) -> Result<OptimizationReport, OptimizerError> {
        request.validate()?;

        let catalog_size = opportunities.len();
        let on_chain = filter_by_chains(opportunities, &request.preferred_chains);
        let eligible = filter_opportunities(on_chain, &request.constraints);
        debug!(
            catalog = catalog_size,
            eligible = eligible.len(),
            "Constraint filter applied"
        );

        let scored = score_opportunities(eligible, request, self.objective.as_ref());
        let plan = self.allocator.allocate(&scored, request);
        debug!(
            allocator = self.allocator.name(),
            positions = plan.allocations.len(),
            unallocated = %plan.unallocated_cash,
            "Allocation complete"
        );

        let portfolio = build_portfolio(plan, request, &self.config.diversification);
        if portfolio.is_empty() {
            warn!(
                catalog = catalog_size,
                "No opportunity survived filtering and minimum deposits"
            );
        }

        let recommendations =
            generate_recommendations(&portfolio, request, &self.config.recommendations);
        let metrics = calculate_metrics(&portfolio, &self.config.diversification);
        let alternative_strategies = generate_alternatives(&scored);
        let risk_analysis = analyze_risk(&portfolio);
        let backtest_results = self.backtest.run(portfolio.total_apy, path);
        let monitoring_plan = build_monitoring_plan(&portfolio);

        info!(
            positions = portfolio.allocations.len(),
            total_apy = %portfolio.total_apy,
            risk_score = %portfolio.risk_score,
            diversification = %portfolio.diversification_score,
            "Portfolio optimized"
        );

        Ok(OptimizationReport {
            portfolio,
            recommendations,
            metrics,
            alternative_strategies,
            risk_analysis,
            backtest_results,
            monitoring_plan,
            timestamp: Utc::now(),
        })
    }

    /// Validates the request, fetches the catalog from `provider` and runs the pipeline.
    ///
    /// # Errors
    /// Returns [`OptimizerError::Validation`] before touching the provider when
    /// the request is malformed, and [`OptimizerError::Provider`] when the
    /// catalog cannot be fetched.
    pub async fn optimize_from(
        &self,
        provider: &dyn OpportunityProvider,
        request: &OptimizationRequest,
        path: &mut (dyn ReturnPathGenerator + Send),
    ) -> Result<OptimizationReport, OptimizerError> {
        request.validate()?;

        let opportunities = provider
            .get_opportunities(&request.preferred_chains)
            .await
            .inspect_err(|e| warn!(provider = provider.name(), error = %e, "Catalog fetch failed"))?;
        debug!(
            provider = provider.name(),
            count = opportunities.len(),
            "Catalog fetched"
        );

        self.optimize(request, opportunities, path)
    }
}
