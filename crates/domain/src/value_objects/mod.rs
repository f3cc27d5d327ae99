pub mod allocation;
pub mod portfolio;
pub mod report;
pub mod request;

pub use allocation::{Allocation, ScoredOpportunity};
pub use portfolio::OptimizedPortfolio;
pub use report::{
    AlternativeStrategy, BacktestPeriod, BacktestResults, CategoryBreakdown, ChainBreakdown,
    MonitoringPlan, OptimizationReport, PortfolioMetrics, Recommendation, RiskAnalysis,
    RiskBreakdown, RiskBucket,
};
pub use request::{
    Constraints, CurrentPosition, MAX_AMOUNT, MAX_POSITION_APY, OptimizationRequest,
};
