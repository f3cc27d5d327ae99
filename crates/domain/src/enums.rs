use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of yield strategy an opportunity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lending,
    Dex,
    Staking,
    Farming,
    Derivatives,
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lending => "lending",
            Self::Dex => "dex",
            Self::Staking => "staking",
            Self::Farming => "farming",
            Self::Derivatives => "derivatives",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much risk the user is willing to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// Multiplier applied to the risk-adjusted sub-score.
    ///
    /// Conservative users reward low risk scores more strongly.
    #[must_use]
    pub fn risk_adjustment(&self) -> Decimal {
        match self {
            Self::Conservative => Decimal::new(15, 1),
            Self::Moderate => Decimal::ONE,
            Self::Aggressive => Decimal::new(6, 1),
        }
    }
}

/// Intended holding period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

impl TimeHorizon {
    /// Penalty per year of lockup used by the time-horizon sub-score.
    #[must_use]
    pub fn lockup_penalty(&self) -> Decimal {
        match self {
            Self::Short => Decimal::from(4),
            Self::Medium => Decimal::from(2),
            Self::Long => Decimal::new(5, 1),
        }
    }

    #[must_use]
    pub fn rebalance_frequency(&self) -> &'static str {
        match self {
            Self::Short => "Weekly",
            Self::Medium => "Bi-weekly",
            Self::Long => "Monthly",
        }
    }
}

/// Attention a portfolio needs once deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringLevel {
    Low,
    Medium,
    High,
}

impl MonitoringLevel {
    /// Maps a blended risk score onto a monitoring level.
    #[must_use]
    pub fn from_risk_score(risk_score: Decimal) -> Self {
        if risk_score <= Decimal::from(3) {
            Self::Low
        } else if risk_score <= Decimal::from(6) {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub fn check_frequency(&self) -> &'static str {
        match self {
            Self::High => "Daily",
            Self::Medium => "Every 2-3 days",
            Self::Low => "Weekly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Warning,
    Caution,
    Suggestion,
    Mismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}
