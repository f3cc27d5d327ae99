//! Capital allocation across ranked opportunities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use yield_opt_domain::math::{HUNDRED, floor_cents, round_to, truncate_to};
use yield_opt_domain::{Allocation, OptimizationRequest, ScoredOpportunity};

/// Allocations produced for a request plus the capital left over.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationPlan {
    pub allocations: Vec<Allocation>,
    /// Capital not assigned to any position, in USD.
    pub unallocated_cash: Decimal,
}

/// Strategy for sizing positions over a ranked opportunity list.
pub trait AllocationStrategy: Send + Sync {
    /// Sizes positions for `ranked`, which is sorted best first.
    fn allocate(&self, ranked: &[ScoredOpportunity], request: &OptimizationRequest)
    -> AllocationPlan;

    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;
}

/// Share of the remaining capital offered to ranks below `until_rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTier {
    pub until_rank: usize,
    pub fraction: Decimal,
}

/// Configuration for tiered allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Number of top-ranked opportunities considered.
    pub max_positions: usize,
    /// Tiers in ascending `until_rank` order.
    pub tiers: Vec<AllocationTier>,
    /// Fraction used past the last tier.
    pub tail_fraction: Decimal,
    /// Smallest position worth taking, as a percentage of the portfolio.
    pub min_allocation_pct: Decimal,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_positions: 8,
            tiers: vec![
                AllocationTier {
                    until_rank: 1,
                    fraction: Decimal::new(35, 2),
                },
                AllocationTier {
                    until_rank: 3,
                    fraction: Decimal::new(25, 2),
                },
                AllocationTier {
                    until_rank: 6,
                    fraction: Decimal::new(15, 2),
                },
            ],
            tail_fraction: Decimal::new(10, 2),
            min_allocation_pct: Decimal::from(5),
        }
    }
}

impl AllocationConfig {
    /// Fraction of the remaining capital targeted at `rank` (0-based).
    #[must_use]
    pub fn fraction_for(&self, rank: usize) -> Decimal {
        self.tiers
            .iter()
            .find(|t| rank < t.until_rank)
            .map_or(self.tail_fraction, |t| t.fraction)
    }
}

/// Greedy, front-loaded allocation.
///
/// Walks the ranked list once: the best opportunity gets the largest share of
/// what remains, later ranks taper off. Every target is capped at the
/// per-position limit and raised to the minimum position size while enough
/// capital remains. An opportunity whose target is below its minimum deposit
/// is skipped without consuming capital. There is no backtracking.
#[derive(Debug, Clone, Default)]
pub struct TieredAllocator {
    pub config: AllocationConfig,
}

impl TieredAllocator {
    #[must_use]
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }
}

impl AllocationStrategy for TieredAllocator {
    fn allocate(
        &self,
        ranked: &[ScoredOpportunity],
        request: &OptimizationRequest,
    ) -> AllocationPlan {
        let size = request.portfolio_size;
        let cap = request.position_cap();
        let floor = size * self.config.min_allocation_pct / HUNDRED;

        let mut remaining = size;
        let mut allocations = Vec::new();

        for (rank, opp) in ranked.iter().take(self.config.max_positions).enumerate() {
            if remaining <= Decimal::ZERO {
                break;
            }

            let mut target = (remaining * self.config.fraction_for(rank)).min(cap);
            if target < floor && remaining >= floor {
                target = floor.min(cap);
            }

            // Truncated to cents so rounding can never breach the cap.
            let amount = floor_cents(target);
            if amount <= Decimal::ZERO || amount < opp.minimum_deposit {
                debug!(
                    id = %opp.id,
                    rank,
                    target = %amount,
                    minimum_deposit = %opp.minimum_deposit,
                    "Skipping opportunity below minimum deposit"
                );
                continue;
            }

            allocations.push(Allocation {
                opportunity: opp.clone(),
                allocation: amount,
                percentage: truncate_to(amount / size * HUNDRED, 2),
                expected_yield: round_to(amount * opp.apy / HUNDRED, 2),
            });
            remaining -= amount;
        }

        AllocationPlan {
            allocations,
            unallocated_cash: remaining,
        }
    }

    fn name(&self) -> &'static str {
        "Tiered Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use yield_opt_domain::testkit::{OpportunityBuilder, request};

    fn ranked(n: usize) -> Vec<ScoredOpportunity> {
        (0..n)
            .map(|i| {
                OpportunityBuilder::new(&format!("opp-{i}"))
                    .scored(Decimal::from(100 - i as i64))
            })
            .collect()
    }

    #[test]
    fn test_tier_fractions() {
        let config = AllocationConfig::default();
        assert_eq!(config.fraction_for(0), dec!(0.35));
        assert_eq!(config.fraction_for(1), dec!(0.25));
        assert_eq!(config.fraction_for(2), dec!(0.25));
        assert_eq!(config.fraction_for(3), dec!(0.15));
        assert_eq!(config.fraction_for(5), dec!(0.15));
        assert_eq!(config.fraction_for(6), dec!(0.10));
        assert_eq!(config.fraction_for(7), dec!(0.10));
    }

    #[test]
    fn test_front_loaded_allocation() {
        let mut req = request(dec!(10000));
        req.constraints.max_single_position = dec!(100);
        let plan = TieredAllocator::default().allocate(&ranked(3), &req);

        let amounts: Vec<Decimal> = plan.allocations.iter().map(|a| a.allocation).collect();
        // 35% of 10000, 25% of 6500, 25% of 4875
        assert_eq!(amounts, vec![dec!(3500), dec!(1625), dec!(1218.75)]);
        assert_eq!(plan.allocations[0].percentage, dec!(35));
        assert_eq!(plan.unallocated_cash, dec!(3656.25));
    }

    #[test]
    fn test_cap_limits_every_position() {
        let mut req = request(dec!(10000));
        req.constraints.max_single_position = dec!(20);
        let plan = TieredAllocator::default().allocate(&ranked(8), &req);

        let cap = req.position_cap();
        assert!(plan.allocations.iter().all(|a| a.allocation <= cap));
        assert_eq!(plan.allocations[0].allocation, dec!(2000));
    }

    #[test]
    fn test_floor_raises_small_targets() {
        let mut req = request(dec!(10000));
        req.constraints.max_single_position = dec!(100);
        let plan = TieredAllocator::default().allocate(&ranked(8), &req);

        // Rank 6 would get 10% of ~2108, below the 500 floor
        assert_eq!(plan.allocations.len(), 8);
        assert_eq!(plan.allocations[6].allocation, dec!(500));
        assert_eq!(plan.allocations[7].allocation, dec!(500));
    }

    #[test]
    fn test_floor_never_exceeds_cap() {
        let mut req = request(dec!(10000));
        req.constraints.max_single_position = dec!(3);
        let plan = TieredAllocator::default().allocate(&ranked(8), &req);
        assert!(plan.allocations.iter().all(|a| a.allocation <= dec!(300)));
    }

    #[test]
    fn test_only_top_eight_considered() {
        let mut req = request(dec!(1000000));
        req.constraints.max_single_position = dec!(100);
        let plan = TieredAllocator::default().allocate(&ranked(12), &req);
        assert_eq!(plan.allocations.len(), 8);
        assert!(plan.allocations.iter().all(|a| a.opportunity.id != "opp-8"));
    }

    #[test]
    fn test_minimum_deposit_skip_keeps_capital() {
        let mut req = request(dec!(10000));
        req.constraints.max_single_position = dec!(30);
        let ranked = vec![
            OpportunityBuilder::new("whale-only")
                .minimum_deposit(dec!(5000))
                .scored(dec!(90)),
            OpportunityBuilder::new("open").scored(dec!(80)),
        ];
        let plan = TieredAllocator::default().allocate(&ranked, &req);

        assert_eq!(plan.allocations.len(), 1);
        assert_eq!(plan.allocations[0].opportunity.id, "open");
        // Rank 1 still sees the full 10000 remaining: 25% → 2500
        assert_eq!(plan.allocations[0].allocation, dec!(2500));
    }

    #[test]
    fn test_percentages_never_exceed_hundred() {
        let mut req = request(dec!(333.33));
        req.constraints.max_single_position = dec!(100);
        let plan = TieredAllocator::default().allocate(&ranked(8), &req);

        let total: Decimal = plan.allocations.iter().map(|a| a.percentage).sum();
        assert!(total <= dec!(100));
        let allocated: Decimal = plan.allocations.iter().map(|a| a.allocation).sum();
        assert_eq!(allocated + plan.unallocated_cash, dec!(333.33));
    }

    #[test]
    fn test_empty_ranking() {
        let plan = TieredAllocator::default().allocate(&[], &request(dec!(1000)));
        assert!(plan.allocations.is_empty());
        assert_eq!(plan.unallocated_cash, dec!(1000));
    }
}
