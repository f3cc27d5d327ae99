//! Diversification scoring.
//!
//! The score blends a Herfindahl-based concentration score with a breadth
//! score counting distinct chains, categories and protocols.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use yield_opt_domain::Allocation;
use yield_opt_domain::math::{HUNDRED, round_to, weight};

/// Bounds applied to the diversification score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiversificationConfig {
    pub min_score: Decimal,
    pub max_score: Decimal,
}

impl Default for DiversificationConfig {
    fn default() -> Self {
        Self {
            min_score: Decimal::ZERO,
            max_score: Decimal::TEN,
        }
    }
}

/// `(1 − Σ w²) × 10` where `w` is each allocation's weight.
///
/// Ten for an infinitely spread portfolio, zero for a single position holding
/// everything.
#[must_use]
pub fn concentration_score(allocations: &[Allocation]) -> Decimal {
    let herfindahl: Decimal = allocations
        .iter()
        .map(|a| {
            let w = weight(a.percentage);
            w * w
        })
        .sum();
    (Decimal::ONE - herfindahl) * Decimal::TEN
}

/// Mean of the distinct chain, category and protocol counts.
#[must_use]
pub fn diversity_score(allocations: &[Allocation]) -> Decimal {
    let chains: HashSet<&str> = allocations.iter().map(|a| a.opportunity.chain.as_str()).collect();
    let categories: HashSet<_> = allocations.iter().map(|a| a.opportunity.category).collect();
    let protocols: HashSet<&str> = allocations
        .iter()
        .map(|a| a.opportunity.protocol.as_str())
        .collect();

    Decimal::from(chains.len() + categories.len() + protocols.len()) / Decimal::from(3)
}

/// Average of the concentration and diversity scores, clamped to the
/// configured range. An empty portfolio scores the minimum.
#[must_use]
pub fn diversification_score(allocations: &[Allocation], config: &DiversificationConfig) -> Decimal {
    if allocations.is_empty() {
        return config.min_score;
    }
    let raw = (concentration_score(allocations) + diversity_score(allocations)) / Decimal::TWO;
    raw.clamp(config.min_score, config.max_score)
}

/// Diversification as a whole-number percentage of the configured maximum.
#[must_use]
pub fn diversification_ratio(score: Decimal, config: &DiversificationConfig) -> Decimal {
    if config.max_score.is_zero() {
        return Decimal::ZERO;
    }
    round_to(score / config.max_score * HUNDRED, 0)
}
