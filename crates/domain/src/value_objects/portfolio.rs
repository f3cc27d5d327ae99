use crate::enums::MonitoringLevel;
use crate::value_objects::allocation::Allocation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level view of the chosen allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedPortfolio {
    /// Percentage-weighted APY.
    #[serde(rename = "totalAPY")]
    pub total_apy: Decimal,
    /// Percentage-weighted risk score.
    pub risk_score: Decimal,
    /// 0–10.
    pub diversification_score: Decimal,
    pub allocations: Vec<Allocation>,
    /// Capital left undeployed after minimum-deposit skips and caps, in USD.
    pub unallocated_cash: Decimal,
    pub rebalance_frequency: String,
    pub monitoring_level: MonitoringLevel,
    pub exit_strategy: String,
    pub hedging_recommendations: Vec<String>,
}

impl OptimizedPortfolio {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Sum of allocation percentages.
    #[must_use]
    pub fn allocated_percentage(&self) -> Decimal {
        self.allocations.iter().map(|a| a.percentage).sum()
    }
}
