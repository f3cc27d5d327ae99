//! Hard-constraint filtering.

use rust_decimal::Decimal;
use tracing::debug;
use yield_opt_domain::YieldOpportunity;
use yield_opt_domain::value_objects::Constraints;

/// Risk score above which an opportunity counts as unaudited.
pub const AUDIT_RISK_THRESHOLD: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Why an opportunity was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InsufficientLiquidity,
    ExcludedProtocol,
    Unaudited,
}

/// Returns the first constraint the opportunity violates, if any.
#[must_use]
pub fn check(opp: &YieldOpportunity, constraints: &Constraints) -> Option<Rejection> {
    if opp.tvl < constraints.min_liquidity {
        return Some(Rejection::InsufficientLiquidity);
    }
    if constraints.exclude_protocols.iter().any(|p| p == &opp.protocol) {
        return Some(Rejection::ExcludedProtocol);
    }
    if constraints.require_audited && opp.risk_score > AUDIT_RISK_THRESHOLD {
        return Some(Rejection::Unaudited);
    }
    None
}

/// Drops every opportunity that violates a hard constraint, preserving order.
///
/// An empty result is valid and yields an empty portfolio downstream.
#[must_use]
pub fn filter_opportunities(
    opportunities: Vec<YieldOpportunity>,
    constraints: &Constraints,
) -> Vec<YieldOpportunity> {
    opportunities
        .into_iter()
        .filter(|opp| match check(opp, constraints) {
            Some(reason) => {
                debug!(id = %opp.id, ?reason, "Opportunity rejected");
                false
            }
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use yield_opt_domain::testkit::{OpportunityBuilder, request};

    #[test]
    fn test_liquidity_floor() {
        let mut constraints = request(dec!(1000)).constraints;
        constraints.min_liquidity = dec!(50000000);

        let opps = vec![
            OpportunityBuilder::new("thin").tvl(dec!(49999999)).build(),
            OpportunityBuilder::new("exact").tvl(dec!(50000000)).build(),
        ];
        let kept = filter_opportunities(opps, &constraints);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "exact");
    }

    #[test]
    fn test_excluded_protocols() {
        let mut constraints = request(dec!(1000)).constraints;
        constraints.exclude_protocols = vec!["GMX V2".to_string()];

        let gmx = OpportunityBuilder::new("gmx").protocol("GMX V2").build();
        let aave = OpportunityBuilder::new("aave").protocol("Aave V3").build();
        assert_eq!(check(&gmx, &constraints), Some(Rejection::ExcludedProtocol));
        assert_eq!(check(&aave, &constraints), None);
    }

    #[test]
    fn test_audit_requirement_uses_risk_proxy() {
        let mut constraints = request(dec!(1000)).constraints;
        let risky = OpportunityBuilder::new("snx").risk_score(dec!(8.2)).build();
        let borderline = OpportunityBuilder::new("edge").risk_score(dec!(7)).build();

        assert_eq!(check(&risky, &constraints), None);

        constraints.require_audited = true;
        assert_eq!(check(&risky, &constraints), Some(Rejection::Unaudited));
        assert_eq!(check(&borderline, &constraints), None);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let mut constraints = request(dec!(1000)).constraints;
        constraints.min_liquidity = dec!(1000000000000);
        let opps = vec![OpportunityBuilder::new("a").build()];
        assert!(filter_opportunities(opps, &constraints).is_empty());
    }
}
