//! Yield-bearing positions offered by a catalog.

use crate::enums::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Observed APY band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApyRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Fees charged by the protocol, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub deposit: Decimal,
    pub withdrawal: Decimal,
    pub performance: Decimal,
    pub management: Decimal,
}

/// Trailing performance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPerformance {
    #[serde(rename = "apy7d")]
    pub apy_7d: Decimal,
    #[serde(rename = "apy30d")]
    pub apy_30d: Decimal,
    #[serde(rename = "apy90d")]
    pub apy_90d: Decimal,
    pub max_drawdown: Decimal,
    pub sharpe_ratio: Decimal,
}

/// How quickly and cheaply a position can be unwound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityMetrics {
    /// Display text, e.g. "< 1 minute". Never parsed.
    pub exit_time: String,
    /// Structured exit time in minutes, `None` when unknown.
    #[serde(default)]
    pub exit_time_minutes: Option<u64>,
    #[serde(rename = "slippage1k")]
    pub slippage_1k: Decimal,
    #[serde(rename = "slippage10k")]
    pub slippage_10k: Decimal,
    #[serde(rename = "slippage100k")]
    pub slippage_100k: Decimal,
}

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u64 = 60;
/// Minutes in a day.
pub const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;
/// Minutes in a week.
pub const MINUTES_PER_WEEK: u64 = 7 * MINUTES_PER_DAY;

/// Coarse exit-time classification used by risk analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitBucket {
    Minutes,
    Hours,
    Days,
    Extended,
}

impl ExitBucket {
    /// Liquidity risk points for the bucket.
    #[must_use]
    pub fn risk_points(&self) -> Decimal {
        match self {
            Self::Minutes => Decimal::ONE,
            Self::Hours => Decimal::from(3),
            Self::Days => Decimal::from(5),
            Self::Extended => Decimal::from(8),
        }
    }
}

impl LiquidityMetrics {
    /// Classifies the exit time. Unknown exit times fall into [`ExitBucket::Extended`].
    #[must_use]
    pub fn exit_bucket(&self) -> ExitBucket {
        match self.exit_time_minutes {
            Some(m) if m < MINUTES_PER_HOUR => ExitBucket::Minutes,
            Some(m) if m < MINUTES_PER_DAY => ExitBucket::Hours,
            Some(m) if m < MINUTES_PER_WEEK => ExitBucket::Days,
            _ => ExitBucket::Extended,
        }
    }
}

/// A candidate yield position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldOpportunity {
    pub id: String,
    pub protocol: String,
    pub strategy: String,
    pub chain: String,
    pub asset: String,
    pub apy: Decimal,
    pub apy_range: ApyRange,
    /// Total value locked in USD.
    pub tvl: Decimal,
    pub minimum_deposit: Decimal,
    /// Lockup in days.
    pub lockup_period: u32,
    /// 0 (safest) to 10.
    pub risk_score: Decimal,
    pub category: Category,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub fees: FeeSchedule,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub historical_performance: HistoricalPerformance,
    pub liquidity_metrics: LiquidityMetrics,
}

impl YieldOpportunity {
    /// Whether the underlying asset carries ETH price exposure.
    #[must_use]
    pub fn has_eth_exposure(&self) -> bool {
        self.asset.contains("ETH")
    }

    #[must_use]
    pub fn has_risk(&self, risk: &str) -> bool {
        self.risks.iter().any(|r| r == risk)
    }

    /// Lockup expressed in years.
    #[must_use]
    pub fn lockup_years(&self) -> Decimal {
        Decimal::from(self.lockup_period) / Decimal::from(365)
    }
}
