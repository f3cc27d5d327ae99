//! Post-deployment monitoring plan.

use rust_decimal::Decimal;
use yield_opt_domain::OptimizedPortfolio;
use yield_opt_domain::value_objects::MonitoringPlan;

/// Risk score above which a protocol is listed for close watching.
pub const WATCH_RISK_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

const KEY_METRICS: [&str; 5] = [
    "APY changes > 20%",
    "TVL changes > 30%",
    "Protocol security incidents",
    "Governance proposals",
    "Token price movements > 15%",
];

const ALERTS: [&str; 4] = [
    "Risk score increases above 8.0",
    "Liquidity drops below 50% of allocation",
    "Yield drops below 50% of expected",
    "Smart contract upgrades or changes",
];

const REBALANCE_TRIGGERS: [&str; 4] = [
    "Allocation drift > 20% from target",
    "New opportunities with +5% APY advantage",
    "Risk score changes > 2 points",
    "Scheduled rebalance date",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn build_monitoring_plan(portfolio: &OptimizedPortfolio) -> MonitoringPlan {
    let high_risk_protocols = portfolio
        .allocations
        .iter()
        .filter(|a| a.opportunity.risk_score > WATCH_RISK_THRESHOLD)
        .map(|a| a.opportunity.protocol.clone())
        .collect();

    MonitoringPlan {
        frequency: portfolio.monitoring_level.check_frequency().to_string(),
        key_metrics: owned(&KEY_METRICS),
        alerts: owned(&ALERTS),
        high_risk_protocols,
        rebalance_triggers: owned(&REBALANCE_TRIGGERS),
    }
}
