//! Ranking of filtered opportunities.

use crate::objective::ScoringObjective;
use tracing::debug;
use yield_opt_domain::math::round_to;
use yield_opt_domain::{OptimizationRequest, ScoredOpportunity, YieldOpportunity};

/// Scores every opportunity and sorts them best first.
///
/// Scores are rounded to two decimals before sorting; the sort is stable, so
/// equal scores keep catalog order.
#[must_use]
pub fn score_opportunities(
    opportunities: Vec<YieldOpportunity>,
    request: &OptimizationRequest,
    objective: &dyn ScoringObjective,
) -> Vec<ScoredOpportunity> {
    let mut scored: Vec<ScoredOpportunity> = opportunities
        .into_iter()
        .map(|opp| {
            let score = round_to(objective.evaluate(&opp, request), 2);
            debug!(id = %opp.id, score = %score, "Scored opportunity");
            ScoredOpportunity {
                opportunity: opp,
                optimization_score: score,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.optimization_score.cmp(&a.optimization_score));
    scored
}
