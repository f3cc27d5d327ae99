use crate::entities::YieldOpportunity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An opportunity annotated with its optimization score (0–100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOpportunity {
    #[serde(flatten)]
    pub opportunity: YieldOpportunity,
    pub optimization_score: Decimal,
}

impl Deref for ScoredOpportunity {
    type Target = YieldOpportunity;

    fn deref(&self) -> &Self::Target {
        &self.opportunity
    }
}

/// Capital assigned to a single opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub opportunity: ScoredOpportunity,
    /// Amount in USD.
    pub allocation: Decimal,
    /// Share of the requested portfolio size, 0–100.
    pub percentage: Decimal,
    /// Expected USD yield per year.
    pub expected_yield: Decimal,
}
