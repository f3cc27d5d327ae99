//! Opportunity catalogs for the yield optimizer.
//!
//! The optimizer never owns opportunity data. It asks an [`OpportunityProvider`]
//! for the catalog at call time; this crate ships the providers:
//! - [`providers::StaticCatalog`], an in-memory table (including the bundled default catalog)
//! - [`providers::JsonFileCatalog`], a catalog read from a JSON file on every call
//! - [`providers::HttpCatalog`], a catalog fetched from an indexer endpoint

/// Provider errors.
pub mod error;
/// Catalog provider implementations.
pub mod providers;

pub use error::ProviderError;

use async_trait::async_trait;
use yield_opt_domain::YieldOpportunity;

/// Source of yield opportunities.
#[async_trait]
pub trait OpportunityProvider: Send + Sync {
    /// Returns the opportunities on the given chains, or every opportunity when `chains` is empty.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the catalog cannot be read.
    async fn get_opportunities(
        &self,
        chains: &[String],
    ) -> Result<Vec<YieldOpportunity>, ProviderError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Keeps opportunities whose chain is listed; an empty list keeps everything.
#[must_use]
pub fn filter_by_chains(
    opportunities: Vec<YieldOpportunity>,
    chains: &[String],
) -> Vec<YieldOpportunity> {
    if chains.is_empty() {
        return opportunities;
    }
    opportunities
        .into_iter()
        .filter(|o| chains.iter().any(|c| c == &o.chain))
        .collect()
}
