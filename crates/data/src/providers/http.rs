//! Catalog fetched from a remote indexer.

use crate::{OpportunityProvider, ProviderError, filter_by_chains};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use yield_opt_domain::YieldOpportunity;

/// Fetches a JSON array of opportunities from an HTTP endpoint.
///
/// No retries are attempted; a failed fetch fails the request.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    /// Creates a provider for the given endpoint with a 10 second timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl OpportunityProvider for HttpCatalog {
    async fn get_opportunities(
        &self,
        chains: &[String],
    ) -> Result<Vec<YieldOpportunity>, ProviderError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Catalog endpoint failed");
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let opportunities: Vec<YieldOpportunity> = response.json().await?;
        debug!(url = %self.url, count = opportunities.len(), "Fetched catalog");
        Ok(filter_by_chains(opportunities, chains))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
