//! Named alternative opportunity sets.

use rust_decimal::Decimal;
use yield_opt_domain::math::{mean, round_to};
use yield_opt_domain::value_objects::AlternativeStrategy;
use yield_opt_domain::ScoredOpportunity;

const CONSERVATIVE_MAX_RISK: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const HIGH_YIELD_MIN_RISK: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
const MIN_MEMBERS: usize = 3;

fn summarize(name: String, description: String, members: &[&ScoredOpportunity]) -> AlternativeStrategy {
    AlternativeStrategy {
        name,
        description,
        estimated_apy: round_to(mean(members.iter().map(|o| o.apy)), 2),
        risk_score: round_to(mean(members.iter().map(|o| o.risk_score)), 2),
        protocols: members.iter().map(|o| o.protocol.clone()).collect(),
    }
}

/// Chain with the most entries; ties go to the chain listed first.
#[must_use]
pub fn dominant_chain(scored: &[ScoredOpportunity]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for opp in scored {
        match counts.iter_mut().find(|(chain, _)| *chain == opp.chain) {
            Some((_, count)) => *count += 1,
            None => counts.push((opp.chain.as_str(), 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (chain, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((chain, count)),
        })
        .map(|(chain, _)| chain)
}

/// Builds up to three alternatives from the scored, best-first list.
///
/// Each set needs at least three members to be reported. Ordering is always
/// Conservative, High-Yield, then single-chain.
#[must_use]
pub fn generate_alternatives(scored: &[ScoredOpportunity]) -> Vec<AlternativeStrategy> {
    let mut alternatives = Vec::new();

    let conservative: Vec<&ScoredOpportunity> = scored
        .iter()
        .filter(|o| o.risk_score <= CONSERVATIVE_MAX_RISK)
        .take(5)
        .collect();
    if conservative.len() >= MIN_MEMBERS {
        alternatives.push(summarize(
            "Conservative Strategy".to_string(),
            "Lower risk, stable yields focusing on blue-chip protocols".to_string(),
            &conservative,
        ));
    }

    let high_yield: Vec<&ScoredOpportunity> = scored
        .iter()
        .filter(|o| o.risk_score >= HIGH_YIELD_MIN_RISK)
        .take(5)
        .collect();
    if high_yield.len() >= MIN_MEMBERS {
        alternatives.push(summarize(
            "High-Yield Strategy".to_string(),
            "Maximum yield targeting with active risk management required".to_string(),
            &high_yield,
        ));
    }

    if let Some(chain) = dominant_chain(scored) {
        let single_chain: Vec<&ScoredOpportunity> =
            scored.iter().filter(|o| o.chain == chain).take(4).collect();
        if single_chain.len() >= MIN_MEMBERS {
            alternatives.push(summarize(
                format!("{chain}-Only Strategy"),
                format!("Focused strategy on {chain} ecosystem for reduced complexity"),
                &single_chain,
            ));
        }
    }

    alternatives
}
