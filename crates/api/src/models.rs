//! Response envelopes.

use serde::{Deserialize, Serialize};
use yield_opt_domain::{OptimizationReport, YieldOpportunity};

/// Successful optimization: the report fields at the top level plus `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: OptimizationReport,
}

impl From<OptimizationReport> for OptimizeResponse {
    fn from(report: OptimizationReport) -> Self {
        Self {
            success: true,
            report,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunitiesResponse {
    pub success: bool,
    pub count: usize,
    pub opportunities: Vec<YieldOpportunity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
}

/// Query string of the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpportunitiesQuery {
    /// Comma-separated chain names.
    pub chains: Option<String>,
}

impl OpportunitiesQuery {
    /// Parsed chain list; blank entries are ignored.
    #[must_use]
    pub fn chain_list(&self) -> Vec<String> {
        self.chains
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect()
    }
}
