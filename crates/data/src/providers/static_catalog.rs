//! In-memory catalog.

use crate::{OpportunityProvider, ProviderError, filter_by_chains};
use async_trait::async_trait;
use std::sync::Arc;
use yield_opt_domain::YieldOpportunity;

const BUNDLED_CATALOG: &str = include_str!("../../catalog/default.json");

/// A fixed set of opportunities held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    opportunities: Arc<Vec<YieldOpportunity>>,
}

impl StaticCatalog {
    /// Creates a catalog from the given opportunities, preserving their order.
    #[must_use]
    pub fn new(opportunities: Vec<YieldOpportunity>) -> Self {
        Self {
            opportunities: Arc::new(opportunities),
        }
    }

    /// The cross-chain catalog bundled with the crate.
    ///
    /// # Errors
    /// Returns an error if the bundled JSON does not match the domain model.
    pub fn bundled() -> Result<Self, ProviderError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parses a JSON array of opportunities.
    ///
    /// # Errors
    /// Returns [`ProviderError::Parse`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let opportunities: Vec<YieldOpportunity> = serde_json::from_str(json)?;
        Ok(Self::new(opportunities))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }
}

#[async_trait]
impl OpportunityProvider for StaticCatalog {
    async fn get_opportunities(
        &self,
        chains: &[String],
    ) -> Result<Vec<YieldOpportunity>, ProviderError> {
        Ok(filter_by_chains(self.opportunities.as_ref().clone(), chains))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
