//! Portfolio aggregation.
//!
//! Rolls the allocation plan up into blended APY and risk, diversification,
//! rebalance cadence, monitoring level, exit strategy and hedging notes.

use crate::allocation::AllocationPlan;
use crate::diversification::{DiversificationConfig, diversification_score};
use rust_decimal::Decimal;
use yield_opt_domain::entities::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use yield_opt_domain::enums::{MonitoringLevel, TimeHorizon};
use yield_opt_domain::math::{round_to, weight};
use yield_opt_domain::{Allocation, OptimizationRequest, OptimizedPortfolio};

/// Risk score above which a position calls for a stablecoin buffer.
pub const HEDGE_RISK_THRESHOLD: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Percentage-weighted average of `value` over the allocations.
#[must_use]
pub fn weighted_average<F>(allocations: &[Allocation], value: F) -> Decimal
where
    F: Fn(&Allocation) -> Decimal,
{
    allocations
        .iter()
        .map(|a| weight(a.percentage) * value(a))
        .sum()
}

/// Builds the portfolio view of an allocation plan.
///
/// # Arguments
/// * `plan` - Allocations and leftover cash from the allocator
/// * `request` - The request the plan was built for
/// * `diversification` - Bounds for the diversification score
///
/// # Returns
/// The aggregated portfolio; an empty plan yields zeroed figures and a cash
/// exit strategy.
#[must_use]
pub fn build_portfolio(
    plan: AllocationPlan,
    request: &OptimizationRequest,
    diversification: &DiversificationConfig,
) -> OptimizedPortfolio {
    let allocations = plan.allocations;

    let total_apy = weighted_average(&allocations, |a| a.opportunity.apy);
    let risk_score = weighted_average(&allocations, |a| a.opportunity.risk_score);
    let diversification_score = diversification_score(&allocations, diversification);

    OptimizedPortfolio {
        total_apy: round_to(total_apy, 2),
        risk_score: round_to(risk_score, 2),
        diversification_score: round_to(diversification_score, 2),
        rebalance_frequency: request.time_horizon.rebalance_frequency().to_string(),
        monitoring_level: MonitoringLevel::from_risk_score(risk_score),
        exit_strategy: exit_strategy(&allocations, request.time_horizon),
        hedging_recommendations: hedging_recommendations(&allocations),
        unallocated_cash: plan.unallocated_cash,
        allocations,
    }
}

/// Describes how the portfolio would be unwound.
#[must_use]
pub fn exit_strategy(allocations: &[Allocation], horizon: TimeHorizon) -> String {
    if allocations.is_empty() {
        return "No positions allocated; capital remains in cash and can be withdrawn immediately"
            .to_string();
    }
    if horizon == TimeHorizon::Short {
        return "Maintain 20% in instant-liquidity positions for quick exits".to_string();
    }
    if allocations.iter().any(|a| a.opportunity.lockup_period > 0) {
        return "Stagger exits over 2-4 weeks to minimize market impact".to_string();
    }

    let slowest = allocations
        .iter()
        .filter_map(|a| a.opportunity.liquidity_metrics.exit_time_minutes)
        .max();
    let unknown = allocations
        .iter()
        .filter(|a| a.opportunity.liquidity_metrics.exit_time_minutes.is_none())
        .count();

    let mut message = match slowest {
        Some(minutes) => format!(
            "Portfolio can be fully exited within {} under normal conditions",
            describe_minutes(minutes)
        ),
        None => "Exit times are not published for any position; plan exits manually".to_string(),
    };
    if slowest.is_some() && unknown > 0 {
        message.push_str(&format!(
            " (exit time unknown for {unknown} position{})",
            if unknown == 1 { "" } else { "s" }
        ));
    }
    message
}

fn describe_minutes(minutes: u64) -> String {
    let (value, unit) = if minutes < MINUTES_PER_HOUR {
        (minutes.max(1), "minute")
    } else if minutes < MINUTES_PER_DAY {
        (minutes.div_ceil(MINUTES_PER_HOUR), "hour")
    } else {
        (minutes.div_ceil(MINUTES_PER_DAY), "day")
    };
    if value == 1 {
        format!("1 {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Hedging notes triggered by the portfolio's exposures.
///
/// The stop-loss line is always present.
#[must_use]
pub fn hedging_recommendations(allocations: &[Allocation]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if allocations.iter().any(|a| a.opportunity.has_eth_exposure()) {
        recommendations.push("Consider ETH perpetual futures hedge for directional exposure".to_string());
    }
    if allocations
        .iter()
        .any(|a| a.opportunity.has_risk("Impermanent Loss"))
    {
        recommendations.push("Use options strategies to hedge impermanent loss risk".to_string());
    }
    if allocations
        .iter()
        .any(|a| a.opportunity.risk_score > HEDGE_RISK_THRESHOLD)
    {
        recommendations
            .push("Maintain 15-25% allocation in stablecoins for risk management".to_string());
    }
    recommendations
        .push("Set up automated stop-losses for positions exceeding 8.0 risk score".to_string());

    recommendations
}
