//! Advisory messages derived from portfolio thresholds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yield_opt_domain::enums::{Priority, RecommendationKind, TimeHorizon};
use yield_opt_domain::math::{HUNDRED, round_to, safe_div};
use yield_opt_domain::value_objects::{CurrentPosition, Recommendation};
use yield_opt_domain::{OptimizationRequest, OptimizedPortfolio};

/// Thresholds that trigger each recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Blended APY above which the portfolio counts as high-yield.
    pub high_apy: Decimal,
    /// Blended risk score above which risk management is advised.
    pub high_risk: Decimal,
    /// Diversification score below which more breadth is suggested.
    pub low_diversification: Decimal,
    /// Lockup in days that conflicts with a short horizon.
    pub short_horizon_lockup_days: u32,
    /// Share of idle capital, in percent, that is worth flagging.
    pub idle_cash_pct: Decimal,
    /// APY uplift, in percentage points, that justifies migrating positions.
    pub migration_uplift: Decimal,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            high_apy: Decimal::from(25),
            high_risk: Decimal::from(6),
            low_diversification: Decimal::from(6),
            short_horizon_lockup_days: 30,
            idle_cash_pct: Decimal::from(20),
            migration_uplift: Decimal::TWO,
        }
    }
}

fn recommendation(
    kind: RecommendationKind,
    title: &str,
    message: impl Into<String>,
    priority: Priority,
) -> Recommendation {
    Recommendation {
        kind,
        title: title.to_string(),
        message: message.into(),
        priority,
    }
}

/// Derives recommendations for a built portfolio.
///
/// An empty portfolio yields a single warning; the threshold rules only apply
/// once something has been allocated.
#[must_use]
pub fn generate_recommendations(
    portfolio: &OptimizedPortfolio,
    request: &OptimizationRequest,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    if portfolio.is_empty() {
        return vec![recommendation(
            RecommendationKind::Warning,
            "No Eligible Opportunities",
            "No opportunity satisfied your constraints and minimum deposits. Relax the liquidity \
             floor, the excluded protocols or the audit requirement, or widen the chain selection.",
            Priority::High,
        )];
    }

    let mut recommendations = Vec::new();

    if portfolio.total_apy > thresholds.high_apy {
        recommendations.push(recommendation(
            RecommendationKind::Warning,
            "High Yield Portfolio",
            "Your portfolio targets high yields. Monitor positions daily and be prepared for volatility.",
            Priority::High,
        ));
    }

    if portfolio.risk_score > thresholds.high_risk {
        recommendations.push(recommendation(
            RecommendationKind::Caution,
            "Risk Management",
            "Consider reducing position sizes in high-risk protocols and implementing hedging strategies.",
            Priority::Medium,
        ));
    }

    if portfolio.diversification_score < thresholds.low_diversification {
        recommendations.push(recommendation(
            RecommendationKind::Suggestion,
            "Increase Diversification",
            "Consider adding positions in different chains or protocol categories.",
            Priority::Low,
        ));
    }

    if request.time_horizon == TimeHorizon::Short
        && portfolio
            .allocations
            .iter()
            .any(|a| a.opportunity.lockup_period > thresholds.short_horizon_lockup_days)
    {
        recommendations.push(recommendation(
            RecommendationKind::Mismatch,
            "Time Horizon Mismatch",
            "Some positions have lockup periods that exceed your short-term horizon.",
            Priority::High,
        ));
    }

    let idle_pct = safe_div(portfolio.unallocated_cash, request.portfolio_size) * HUNDRED;
    if idle_pct > thresholds.idle_cash_pct {
        recommendations.push(recommendation(
            RecommendationKind::Suggestion,
            "Idle Capital",
            format!(
                "{}% of your capital is unallocated because of position caps or minimum deposits. \
                 Consider raising the position cap or adding chains.",
                round_to(idle_pct, 0)
            ),
            Priority::Medium,
        ));
    }

    if let Some(current_apy) = current_apy(&request.current_positions) {
        let uplift = portfolio.total_apy - current_apy;
        if uplift >= thresholds.migration_uplift {
            recommendations.push(recommendation(
                RecommendationKind::Suggestion,
                "Migrate Existing Positions",
                format!(
                    "The optimized portfolio yields {}% versus {}% on your current positions, \
                     an uplift of {} percentage points.",
                    portfolio.total_apy,
                    round_to(current_apy, 2),
                    round_to(uplift, 2)
                ),
                Priority::Medium,
            ));
        }
    }

    recommendations
}

/// Amount-weighted APY of the user's current positions, if they hold any capital.
#[must_use]
pub fn current_apy(positions: &[CurrentPosition]) -> Option<Decimal> {
    let total: Decimal = positions.iter().map(|p| p.amount).sum();
    if total <= Decimal::ZERO {
        return None;
    }
    let weighted: Decimal = positions.iter().map(|p| p.amount * p.apy).sum();
    Some(weighted / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use yield_opt_domain::Allocation;
    use yield_opt_domain::enums::MonitoringLevel;
    use yield_opt_domain::testkit::{OpportunityBuilder, request};

    fn portfolio(total_apy: Decimal, risk: Decimal, diversification: Decimal) -> OptimizedPortfolio {
        OptimizedPortfolio {
            total_apy,
            risk_score: risk,
            diversification_score: diversification,
            allocations: vec![Allocation {
                opportunity: OpportunityBuilder::new("a").scored(dec!(50)),
                allocation: dec!(9000),
                percentage: dec!(90),
                expected_yield: Decimal::ZERO,
            }],
            unallocated_cash: dec!(1000),
            rebalance_frequency: "Bi-weekly".to_string(),
            monitoring_level: MonitoringLevel::Medium,
            exit_strategy: String::new(),
            hedging_recommendations: vec![],
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_quiet_portfolio_has_no_recommendations() {
        let recs = generate_recommendations(
            &portfolio(dec!(10), dec!(4), dec!(7)),
            &request(dec!(10000)),
            &RecommendationThresholds::default(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_threshold_rules() {
        let recs = generate_recommendations(
            &portfolio(dec!(30), dec!(6.5), dec!(5)),
            &request(dec!(10000)),
            &RecommendationThresholds::default(),
        );
        assert_eq!(
            titles(&recs),
            vec!["High Yield Portfolio", "Risk Management", "Increase Diversification"]
        );
        assert_eq!(recs[0].kind, RecommendationKind::Warning);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[2].priority, Priority::Low);
    }

    #[test]
    fn test_short_horizon_lockup_mismatch() {
        let mut p = portfolio(dec!(10), dec!(4), dec!(7));
        p.allocations[0].opportunity = OpportunityBuilder::new("lido").lockup_days(31).scored(dec!(50));
        let mut req = request(dec!(10000));
        req.time_horizon = TimeHorizon::Short;

        let recs = generate_recommendations(&p, &req, &RecommendationThresholds::default());
        assert_eq!(titles(&recs), vec!["Time Horizon Mismatch"]);
        assert_eq!(recs[0].kind, RecommendationKind::Mismatch);
    }

    #[test]
    fn test_idle_capital() {
        let mut p = portfolio(dec!(10), dec!(4), dec!(7));
        p.unallocated_cash = dec!(2500);
        let recs = generate_recommendations(&p, &request(dec!(10000)), &RecommendationThresholds::default());
        assert_eq!(titles(&recs), vec!["Idle Capital"]);
        assert!(recs[0].message.starts_with("25%"));
    }

    #[test]
    fn test_migration_uplift() {
        let mut req = request(dec!(10000));
        req.current_positions = vec![
            CurrentPosition {
                protocol: "Compound V3".to_string(),
                amount: dec!(3000),
                asset: "USDC".to_string(),
                apy: dec!(4),
            },
            CurrentPosition {
                protocol: "Aave V3".to_string(),
                amount: dec!(1000),
                asset: "USDC".to_string(),
                apy: dec!(8),
            },
        ];
        assert_eq!(current_apy(&req.current_positions), Some(dec!(5)));

        let recs = generate_recommendations(
            &portfolio(dec!(7), dec!(4), dec!(7)),
            &req,
            &RecommendationThresholds::default(),
        );
        assert_eq!(titles(&recs), vec!["Migrate Existing Positions"]);

        let recs = generate_recommendations(
            &portfolio(dec!(6.99), dec!(4), dec!(7)),
            &req,
            &RecommendationThresholds::default(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_empty_portfolio_single_warning() {
        let mut p = portfolio(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        p.allocations.clear();
        let recs = generate_recommendations(&p, &request(dec!(10000)), &RecommendationThresholds::default());
        assert_eq!(titles(&recs), vec!["No Eligible Opportunities"]);
    }

    #[test]
    fn test_no_current_positions() {
        assert_eq!(current_apy(&[]), None);
    }
}
