//! Scoring objectives used to rank opportunities.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use yield_opt_domain::{OptimizationRequest, YieldOpportunity};

/// Ranks an opportunity against a request; higher is better.
pub trait ScoringObjective: Send + Sync {
    /// Unrounded score of `opportunity` for `request`.
    fn evaluate(&self, opportunity: &YieldOpportunity, request: &OptimizationRequest) -> Decimal;
}

/// Weights and normalization constants of the multi-factor score.
///
/// The five weights sum to 100, so a score reads as points out of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub apy: Decimal,
    pub risk: Decimal,
    pub liquidity: Decimal,
    pub performance: Decimal,
    pub time_horizon: Decimal,
    /// APY (percent) at which the APY factor saturates.
    pub apy_saturation: Decimal,
    /// Sharpe ratio that earns the full performance weight.
    pub sharpe_reference: Decimal,
    /// TVL (USD) that scores zero on the liquidity factor.
    pub tvl_reference: Decimal,
    /// Orders of magnitude above the reference that saturate the liquidity factor.
    pub tvl_decades: Decimal,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            apy: Decimal::from(30),
            risk: Decimal::from(25),
            liquidity: Decimal::from(20),
            performance: Decimal::from(15),
            time_horizon: Decimal::from(10),
            apy_saturation: Decimal::from(50),
            sharpe_reference: Decimal::from(5),
            tvl_reference: Decimal::from(1_000_000),
            tvl_decades: Decimal::from(4),
        }
    }
}

/// Weighted sum of APY, risk, liquidity, performance and time-horizon factors.
#[derive(Debug, Clone, Default)]
pub struct WeightedMultiFactor {
    pub weights: ScoringWeights,
}

impl WeightedMultiFactor {
    #[must_use]
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// `min(apy / saturation, 1) × weight`
    #[must_use]
    pub fn apy_score(&self, opp: &YieldOpportunity) -> Decimal {
        (opp.apy / self.weights.apy_saturation).min(Decimal::ONE) * self.weights.apy
    }

    /// `max(0, (10 − risk) / 10) × tolerance adjustment × weight`
    #[must_use]
    pub fn risk_score(&self, opp: &YieldOpportunity, request: &OptimizationRequest) -> Decimal {
        let ten = Decimal::TEN;
        ((ten - opp.risk_score) / ten).max(Decimal::ZERO)
            * request.risk_tolerance.risk_adjustment()
            * self.weights.risk
    }

    /// `min(log10(tvl / reference) / decades, 1) × weight`.
    ///
    /// Logarithmic so a $1B pool does not score 1000× a $1M pool. Pools below the
    /// reference score negative without a lower bound; non-positive TVL, where the
    /// logarithm is undefined, scores `−weight`.
    #[must_use]
    pub fn liquidity_score(&self, opp: &YieldOpportunity) -> Decimal {
        let ratio = (opp.tvl / self.weights.tvl_reference).to_f64().unwrap_or(0.0);
        let decades = self.weights.tvl_decades.to_f64().unwrap_or(4.0);
        let normalized = if ratio > 0.0 {
            (ratio.log10() / decades).min(1.0)
        } else {
            -1.0
        };
        Decimal::from_f64(normalized).unwrap_or(Decimal::ZERO) * self.weights.liquidity
    }

    /// `(sharpe / reference) × weight`
    #[must_use]
    pub fn performance_score(&self, opp: &YieldOpportunity) -> Decimal {
        opp.historical_performance.sharpe_ratio / self.weights.sharpe_reference
            * self.weights.performance
    }

    /// `max(0, 1 − lockup_years × horizon penalty) × weight`
    #[must_use]
    pub fn time_horizon_score(
        &self,
        opp: &YieldOpportunity,
        request: &OptimizationRequest,
    ) -> Decimal {
        let penalty = opp.lockup_years() * request.time_horizon.lockup_penalty();
        (Decimal::ONE - penalty).max(Decimal::ZERO) * self.weights.time_horizon
    }
}

impl ScoringObjective for WeightedMultiFactor {
    fn evaluate(&self, opp: &YieldOpportunity, request: &OptimizationRequest) -> Decimal {
        self.apy_score(opp)
            + self.risk_score(opp, request)
            + self.liquidity_score(opp)
            + self.performance_score(opp)
            + self.time_horizon_score(opp, request)
    }
}
