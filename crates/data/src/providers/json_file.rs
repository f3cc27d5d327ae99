//! Catalog backed by a JSON file.

use crate::{OpportunityProvider, ProviderError, filter_by_chains};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use yield_opt_domain::YieldOpportunity;

/// Reads a JSON array of opportunities from disk on every request,
/// so edits to the file are picked up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OpportunityProvider for JsonFileCatalog {
    async fn get_opportunities(
        &self,
        chains: &[String],
    ) -> Result<Vec<YieldOpportunity>, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Io {
                path: self.path.clone(),
                source,
            })?;
        let opportunities: Vec<YieldOpportunity> = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), count = opportunities.len(), "Loaded catalog file");
        Ok(filter_by_chains(opportunities, chains))
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use yield_opt_domain::testkit::OpportunityBuilder;

    #[tokio::test]
    async fn test_reads_catalog_file() {
        let opps = vec![
            OpportunityBuilder::new("a").chain("Base").build(),
            OpportunityBuilder::new("b").chain("Arbitrum").build(),
        ];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&opps).unwrap().as_bytes())
            .unwrap();

        let catalog = JsonFileCatalog::new(file.path());
        let all = catalog.get_opportunities(&[]).await.unwrap();
        assert_eq!(all, opps);

        let arbitrum = catalog
            .get_opportunities(&["Arbitrum".to_string()])
            .await
            .unwrap();
        assert_eq!(arbitrum.len(), 1);
        assert_eq!(arbitrum[0].id, "b");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonFileCatalog::new(dir.path().join("missing.json"));
        let err = catalog.get_opportunities(&[]).await.unwrap_err();
        assert!(matches!(err, ProviderError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let catalog = JsonFileCatalog::new(file.path());
        let err = catalog.get_opportunities(&[]).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
