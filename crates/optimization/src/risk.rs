//! Portfolio risk analysis over the chosen allocations.

use crate::portfolio::weighted_average;
use rust_decimal::Decimal;
use yield_opt_domain::enums::Category;
use yield_opt_domain::math::{round_to, weight};
use yield_opt_domain::value_objects::RiskAnalysis;
use yield_opt_domain::{Allocation, OptimizedPortfolio};

/// Risk points assigned to a fully correlated portfolio.
const CORRELATION_CEILING: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Whether the position moves with ETH or with DEX market activity.
fn is_correlated(allocation: &Allocation) -> bool {
    allocation.opportunity.has_eth_exposure() || allocation.opportunity.category == Category::Dex
}

/// Share of ETH- or DEX-correlated capital scaled to eight points.
#[must_use]
pub fn correlation_risk(allocations: &[Allocation]) -> Decimal {
    let correlated: Decimal = allocations
        .iter()
        .filter(|a| is_correlated(a))
        .map(|a| a.percentage)
        .sum();
    weight(correlated) * CORRELATION_CEILING
}

/// Weighted exit-time risk points.
#[must_use]
pub fn liquidity_risk(allocations: &[Allocation]) -> Decimal {
    weighted_average(allocations, |a| {
        a.opportunity.liquidity_metrics.exit_bucket().risk_points()
    })
}

/// Weighted opportunity risk score.
#[must_use]
pub fn protocol_risk(allocations: &[Allocation]) -> Decimal {
    weighted_average(allocations, |a| a.opportunity.risk_score)
}

/// Computes the three risk sub-scores and their mean, rounded to one decimal.
///
/// Only allocated positions contribute, so an empty portfolio reports zero
/// everywhere.
#[must_use]
pub fn analyze_risk(portfolio: &OptimizedPortfolio) -> RiskAnalysis {
    let correlation = correlation_risk(&portfolio.allocations);
    let liquidity = liquidity_risk(&portfolio.allocations);
    let protocol = protocol_risk(&portfolio.allocations);
    let overall = (correlation + liquidity + protocol) / Decimal::from(3);

    RiskAnalysis {
        correlation_risk: round_to(correlation, 1),
        liquidity_risk: round_to(liquidity, 1),
        protocol_risk: round_to(protocol, 1),
        overall_risk: round_to(overall, 1),
        risk_factors: vec![
            format!("{}% correlation risk from ETH exposure", round_to(correlation, 0)),
            format!("{}% liquidity risk from exit times", round_to(liquidity, 0)),
            format!("{}% protocol risk from smart contracts", round_to(protocol, 0)),
        ],
    }
}
