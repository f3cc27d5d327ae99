//! REST API server and endpoints.
//!
//! This crate exposes the yield optimizer over HTTP:
//! - `POST /api/v1/optimize` runs the full optimization pipeline
//! - `GET /api/v1/opportunities` lists the catalog, optionally by chain
//! - `GET /health` reports liveness and the active catalog provider

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// Middleware components.
pub mod middleware;
/// API request/response models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::{ApiError, ConfigError};
pub use routes::create_router;
pub use server::{ApiServer, CatalogSource, ServerConfig};
pub use state::AppState;
