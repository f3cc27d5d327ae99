use crate::entities::{ApyRange, FeeSchedule, HistoricalPerformance, LiquidityMetrics};
use crate::enums::{Category, RiskTolerance, TimeHorizon};
use crate::value_objects::{Constraints, OptimizationRequest, ScoredOpportunity};
use crate::YieldOpportunity;
use rust_decimal::Decimal;

/// Fluent builder for [`YieldOpportunity`] fixtures.
#[derive(Debug, Clone)]
pub struct OpportunityBuilder {
    inner: YieldOpportunity,
}

impl OpportunityBuilder {
    /// A liquid, mid-risk lending opportunity on Ethereum.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            inner: YieldOpportunity {
                id: id.to_string(),
                protocol: format!("{id}-protocol"),
                strategy: "Supply".to_string(),
                chain: "Ethereum".to_string(),
                asset: "USDC".to_string(),
                apy: Decimal::from(10),
                apy_range: ApyRange {
                    min: Decimal::from(5),
                    max: Decimal::from(15),
                },
                tvl: Decimal::from(100_000_000),
                minimum_deposit: Decimal::from(10),
                lockup_period: 0,
                risk_score: Decimal::from(5),
                category: Category::Lending,
                features: vec![],
                fees: FeeSchedule::default(),
                risks: vec![],
                requirements: vec![],
                historical_performance: HistoricalPerformance {
                    apy_7d: Decimal::from(10),
                    apy_30d: Decimal::from(10),
                    apy_90d: Decimal::from(10),
                    max_drawdown: Decimal::from(2),
                    sharpe_ratio: Decimal::from(2),
                },
                liquidity_metrics: LiquidityMetrics {
                    exit_time: "< 1 minute".to_string(),
                    exit_time_minutes: Some(1),
                    slippage_1k: Decimal::ZERO,
                    slippage_10k: Decimal::ZERO,
                    slippage_100k: Decimal::ZERO,
                },
            },
        }
    }

    #[must_use]
    pub fn protocol(mut self, protocol: &str) -> Self {
        self.inner.protocol = protocol.to_string();
        self
    }

    #[must_use]
    pub fn chain(mut self, chain: &str) -> Self {
        self.inner.chain = chain.to_string();
        self
    }

    #[must_use]
    pub fn asset(mut self, asset: &str) -> Self {
        self.inner.asset = asset.to_string();
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.inner.category = category;
        self
    }

    #[must_use]
    pub fn apy(mut self, apy: Decimal) -> Self {
        self.inner.apy = apy;
        self
    }

    #[must_use]
    pub fn tvl(mut self, tvl: Decimal) -> Self {
        self.inner.tvl = tvl;
        self
    }

    #[must_use]
    pub fn risk_score(mut self, risk_score: Decimal) -> Self {
        self.inner.risk_score = risk_score;
        self
    }

    #[must_use]
    pub fn minimum_deposit(mut self, minimum_deposit: Decimal) -> Self {
        self.inner.minimum_deposit = minimum_deposit;
        self
    }

    #[must_use]
    pub fn lockup_days(mut self, days: u32) -> Self {
        self.inner.lockup_period = days;
        self
    }

    #[must_use]
    pub fn sharpe(mut self, sharpe: Decimal) -> Self {
        self.inner.historical_performance.sharpe_ratio = sharpe;
        self
    }

    #[must_use]
    pub fn exit_minutes(mut self, minutes: Option<u64>) -> Self {
        self.inner.liquidity_metrics.exit_time_minutes = minutes;
        self
    }

    #[must_use]
    pub fn risk(mut self, risk: &str) -> Self {
        self.inner.risks.push(risk.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> YieldOpportunity {
        self.inner
    }

    /// Builds with a fixed optimization score, bypassing the scorer.
    #[must_use]
    pub fn scored(self, score: Decimal) -> ScoredOpportunity {
        ScoredOpportunity {
            opportunity: self.inner,
            optimization_score: score,
        }
    }
}

/// A moderate, medium-horizon request with a 40% position cap and no liquidity floor.
#[must_use]
pub fn request(portfolio_size: Decimal) -> OptimizationRequest {
    OptimizationRequest {
        portfolio_size,
        risk_tolerance: RiskTolerance::Moderate,
        time_horizon: TimeHorizon::Medium,
        preferred_chains: vec![],
        current_positions: vec![],
        constraints: Constraints {
            max_single_position: Decimal::from(40),
            min_liquidity: Decimal::ZERO,
            exclude_protocols: vec![],
            require_audited: false,
        },
    }
}
