use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a catalog.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("catalog endpoint returned HTTP {status}")]
    Status { status: u16 },
}
