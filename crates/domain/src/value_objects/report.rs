//! Everything the optimizer returns alongside the portfolio.

use crate::enums::{Category, Priority, RecommendationKind};
use crate::value_objects::portfolio::OptimizedPortfolio;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Advisory message derived from portfolio thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainBreakdown {
    pub chain: String,
    pub percentage: Decimal,
    pub allocation: Decimal,
    /// Number of positions on the chain.
    pub protocols: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub percentage: Decimal,
    pub allocation: Decimal,
    pub protocols: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskBucket {
    pub percentage: Decimal,
    pub protocols: usize,
}

/// Allocation share by risk band: low ≤ 4, medium ≤ 7, high > 7.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub low: RiskBucket,
    pub medium: RiskBucket,
    pub high: RiskBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub expected_annual_yield: Decimal,
    pub risk_adjusted_return: Decimal,
    /// Diversification score as a percentage of its maximum.
    pub diversification_ratio: Decimal,
    pub efficiency_score: Decimal,
    pub breakdown_by_chain: Vec<ChainBreakdown>,
    pub breakdown_by_category: Vec<CategoryBreakdown>,
    pub breakdown_by_risk: RiskBreakdown,
}

/// Descriptive summary of an alternative opportunity set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeStrategy {
    pub name: String,
    pub description: String,
    #[serde(rename = "estimatedAPY")]
    pub estimated_apy: Decimal,
    pub risk_score: Decimal,
    pub protocols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub correlation_risk: Decimal,
    pub liquidity_risk: Decimal,
    pub protocol_risk: Decimal,
    pub overall_risk: Decimal,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestPeriod {
    pub period: String,
    pub monthly_return: Decimal,
    pub cumulative_return: Decimal,
    /// Value of 100 units invested at the start.
    pub portfolio_value: Decimal,
}

/// Illustrative, randomized return series. Not a historical replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResults {
    pub total_return: Decimal,
    pub annualized_return: Decimal,
    pub max_drawdown: Decimal,
    pub sharpe_ratio: Decimal,
    pub results: Vec<BacktestPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringPlan {
    pub frequency: String,
    pub key_metrics: Vec<String>,
    pub alerts: Vec<String>,
    pub high_risk_protocols: Vec<String>,
    pub rebalance_triggers: Vec<String>,
}

/// Complete optimizer output for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    pub portfolio: OptimizedPortfolio,
    pub recommendations: Vec<Recommendation>,
    pub metrics: PortfolioMetrics,
    pub alternative_strategies: Vec<AlternativeStrategy>,
    pub risk_analysis: RiskAnalysis,
    pub backtest_results: BacktestResults,
    pub monitoring_plan: MonitoringPlan,
    pub timestamp: DateTime<Utc>,
}
