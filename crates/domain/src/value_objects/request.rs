//! User intent submitted to the optimizer.

use crate::enums::{RiskTolerance, TimeHorizon};
use crate::error::ValidationError;
use crate::math::HUNDRED;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest accepted `portfolioSize` or position amount, in USD.
///
/// Keeps every derived product (caps, yields, weighted sums) inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Largest accepted APY on a current position, in percent.
pub const MAX_POSITION_APY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Hard constraints every allocated opportunity must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Largest single position as a percentage of the portfolio, in (0, 100].
    pub max_single_position: Decimal,
    /// Minimum TVL in USD.
    pub min_liquidity: Decimal,
    #[serde(default)]
    pub exclude_protocols: Vec<String>,
    /// When set, opportunities with a risk score above 7 are treated as unaudited.
    #[serde(default)]
    pub require_audited: bool,
}

/// A position the user already holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPosition {
    pub protocol: String,
    pub amount: Decimal,
    pub asset: String,
    pub apy: Decimal,
}

/// Request to build an optimized yield portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    /// Capital to deploy, in USD.
    pub portfolio_size: Decimal,
    pub risk_tolerance: RiskTolerance,
    pub time_horizon: TimeHorizon,
    /// Chains to draw from; empty means every chain.
    #[serde(default)]
    pub preferred_chains: Vec<String>,
    #[serde(default)]
    pub current_positions: Vec<CurrentPosition>,
    pub constraints: Constraints,
}

impl OptimizationRequest {
    /// Checks the invariants serde cannot express.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] listing every violated field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.portfolio_size <= Decimal::ZERO {
            violations.push(format!(
                "portfolioSize: must be greater than zero, got {}",
                self.portfolio_size
            ));
        } else if self.portfolio_size > MAX_AMOUNT {
            violations.push(format!(
                "portfolioSize: must be at most {MAX_AMOUNT}, got {}",
                self.portfolio_size
            ));
        }

        let max_single = self.constraints.max_single_position;
        if max_single <= Decimal::ZERO || max_single > HUNDRED {
            violations.push(format!(
                "constraints.maxSinglePosition: must be in (0, 100], got {max_single}"
            ));
        }

        if self.constraints.min_liquidity < Decimal::ZERO {
            violations.push(format!(
                "constraints.minLiquidity: must be non-negative, got {}",
                self.constraints.min_liquidity
            ));
        }

        for (i, position) in self.current_positions.iter().enumerate() {
            if position.amount < Decimal::ZERO || position.amount > MAX_AMOUNT {
                violations.push(format!(
                    "currentPositions[{i}].amount: must be in [0, {MAX_AMOUNT}]"
                ));
            }
            if position.apy < Decimal::ZERO || position.apy > MAX_POSITION_APY {
                violations.push(format!(
                    "currentPositions[{i}].apy: must be in [0, {MAX_POSITION_APY}]"
                ));
            }
        }

        if self.preferred_chains.iter().any(|c| c.trim().is_empty()) {
            violations.push("preferredChains: chain names must not be blank".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    /// Upper bound for any single allocation, in USD.
    #[must_use]
    pub fn position_cap(&self) -> Decimal {
        self.portfolio_size * self.constraints.max_single_position / HUNDRED
    }
}
