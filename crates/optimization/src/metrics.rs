//! Summary metrics and breakdowns of a built portfolio.

use crate::diversification::{DiversificationConfig, diversification_ratio};
use rust_decimal::Decimal;
use yield_opt_domain::enums::Category;
use yield_opt_domain::math::{round_to, safe_div};
use yield_opt_domain::value_objects::{
    CategoryBreakdown, ChainBreakdown, PortfolioMetrics, RiskBreakdown, RiskBucket,
};
use yield_opt_domain::{Allocation, OptimizedPortfolio};

const LOW_RISK_MAX: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const MEDIUM_RISK_MAX: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Running totals for one breakdown group.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    percentage: Decimal,
    allocation: Decimal,
    count: usize,
}

impl Tally {
    fn add(&mut self, allocation: &Allocation) {
        self.percentage += allocation.percentage;
        self.allocation += allocation.allocation;
        self.count += 1;
    }
}

/// Groups allocations by `key`, keeping first-seen order.
fn group_by<K, F>(allocations: &[Allocation], key: F) -> Vec<(K, Tally)>
where
    K: PartialEq,
    F: Fn(&Allocation) -> K,
{
    let mut groups: Vec<(K, Tally)> = Vec::new();
    for allocation in allocations {
        let k = key(allocation);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, tally)) => tally.add(allocation),
            None => {
                let mut tally = Tally::default();
                tally.add(allocation);
                groups.push((k, tally));
            }
        }
    }
    groups
}

#[must_use]
pub fn breakdown_by_chain(allocations: &[Allocation]) -> Vec<ChainBreakdown> {
    group_by(allocations, |a| a.opportunity.chain.clone())
        .into_iter()
        .map(|(chain, t)| ChainBreakdown {
            chain,
            percentage: round_to(t.percentage, 2),
            allocation: round_to(t.allocation, 2),
            protocols: t.count,
        })
        .collect()
}

#[must_use]
pub fn breakdown_by_category(allocations: &[Allocation]) -> Vec<CategoryBreakdown> {
    group_by(allocations, |a| a.opportunity.category)
        .into_iter()
        .map(|(category, t): (Category, Tally)| CategoryBreakdown {
            category,
            percentage: round_to(t.percentage, 2),
            allocation: round_to(t.allocation, 2),
            protocols: t.count,
        })
        .collect()
}

/// Allocation share in the low (≤ 4), medium (≤ 7) and high (> 7) risk bands.
#[must_use]
pub fn breakdown_by_risk(allocations: &[Allocation]) -> RiskBreakdown {
    let bucket = |pred: &dyn Fn(Decimal) -> bool| {
        let members = allocations
            .iter()
            .filter(|a| pred(a.opportunity.risk_score));
        let (percentage, protocols) = members.fold((Decimal::ZERO, 0), |(pct, n), a| {
            (pct + a.percentage, n + 1)
        });
        RiskBucket {
            percentage: round_to(percentage, 2),
            protocols,
        }
    };

    RiskBreakdown {
        low: bucket(&|r| r <= LOW_RISK_MAX),
        medium: bucket(&|r| r > LOW_RISK_MAX && r <= MEDIUM_RISK_MAX),
        high: bucket(&|r| r > MEDIUM_RISK_MAX),
    }
}

/// Computes the portfolio metrics. Ratios over a zero risk score are zero.
#[must_use]
pub fn calculate_metrics(
    portfolio: &OptimizedPortfolio,
    diversification: &DiversificationConfig,
) -> PortfolioMetrics {
    let expected: Decimal = portfolio.allocations.iter().map(|a| a.expected_yield).sum();

    PortfolioMetrics {
        expected_annual_yield: round_to(expected, 2),
        risk_adjusted_return: round_to(safe_div(portfolio.total_apy, portfolio.risk_score), 2),
        diversification_ratio: diversification_ratio(
            portfolio.diversification_score,
            diversification,
        ),
        efficiency_score: round_to(
            safe_div(
                portfolio.total_apy * portfolio.diversification_score,
                portfolio.risk_score,
            ),
            2,
        ),
        breakdown_by_chain: breakdown_by_chain(&portfolio.allocations),
        breakdown_by_category: breakdown_by_category(&portfolio.allocations),
        breakdown_by_risk: breakdown_by_risk(&portfolio.allocations),
    }
}
