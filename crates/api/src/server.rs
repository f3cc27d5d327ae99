//! Server configuration and startup.

use crate::error::ConfigError;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use yield_opt_data::providers::{HttpCatalog, JsonFileCatalog, StaticCatalog};
use yield_opt_data::{OpportunityProvider, ProviderError};

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "YIELD_OPT_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "YIELD_OPT_PORT";
/// Environment variable holding a catalog file path or URL.
pub const CATALOG_VAR: &str = "YIELD_OPT_CATALOG";
/// Environment variable holding a fixed backtest seed.
pub const SEED_VAR: &str = "YIELD_OPT_BACKTEST_SEED";

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog bundled with the data crate.
    Bundled,
    /// A JSON file re-read on every request.
    File(PathBuf),
    /// A JSON endpoint fetched on every request.
    Url(String),
}

impl CatalogSource {
    /// URLs starting with `http://` or `https://` are fetched, anything else is a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Builds the provider for this source.
    ///
    /// # Errors
    /// Returns an error when the bundled catalog is malformed or the HTTP
    /// client cannot be built.
    pub fn provider(&self) -> Result<Arc<dyn OpportunityProvider>, ProviderError> {
        Ok(match self {
            Self::Bundled => Arc::new(StaticCatalog::bundled()?),
            Self::File(path) => Arc::new(JsonFileCatalog::new(path.clone())),
            Self::Url(url) => Arc::new(HttpCatalog::new(url.clone())?),
        })
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog: CatalogSource,
    pub backtest_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            catalog: CatalogSource::Bundled,
            backtest_seed: None,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidVar`] when the port or seed does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for unset variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidVar`] when the port or seed does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidVar {
                var: PORT_VAR,
                value: port,
            })?;
        }
        if let Some(catalog) = lookup(CATALOG_VAR).filter(|c| !c.is_empty()) {
            config.catalog = CatalogSource::parse(&catalog);
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.backtest_seed = Some(seed.parse().map_err(|_| ConfigError::InvalidVar {
                var: SEED_VAR,
                value: seed,
            })?);
        }

        Ok(config)
    }

    /// Socket address string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP server hosting the optimizer.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Binds and serves until Ctrl-C.
    ///
    /// # Errors
    /// Returns an error when the address cannot be bound or the server fails.
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        let addr: SocketAddr = listener.local_addr()?;
        info!(
            %addr,
            provider = self.state.provider.name(),
            seeded = self.state.backtest_seed.is_some(),
            "Yield optimizer API listening"
        );

        axum::serve(listener, create_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.catalog, CatalogSource::Bundled);
        assert_eq!(config.backtest_seed, None);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "9000"),
            (CATALOG_VAR, "/srv/catalog.json"),
            (SEED_VAR, "42"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.catalog, CatalogSource::File("/srv/catalog.json".into()));
        assert_eq!(config.backtest_seed, Some(42));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }

    #[test]
    fn test_catalog_source_parsing() {
        assert_eq!(
            CatalogSource::parse("https://indexer.example/yields"),
            CatalogSource::Url("https://indexer.example/yields".to_string())
        );
        assert!(matches!(CatalogSource::parse("catalog.json"), CatalogSource::File(_)));
    }
}
