//! Route definitions.

use crate::handlers;
use crate::middleware::request_id;
use crate::state::AppState;
use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the router with tracing, CORS and request ids.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/optimize", post(handlers::optimize))
        .route("/api/v1/opportunities", get(handlers::list_opportunities))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id))
        .layer(cors)
        .with_state(state)
}
