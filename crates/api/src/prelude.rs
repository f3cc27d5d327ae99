//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use yield_opt_api::prelude::*;
//! ```

pub use crate::error::{ApiError, ConfigError};
pub use crate::models::{OpportunitiesResponse, OptimizeResponse};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, CatalogSource, ServerConfig};
pub use crate::state::AppState;
