//! Request handlers.

use crate::error::ApiError;
use crate::models::{HealthResponse, OpportunitiesQuery, OpportunitiesResponse, OptimizeResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use tracing::{debug, info};
use yield_opt_domain::OptimizationRequest;
use yield_opt_optimization::OptimizerError;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.provider.name().to_string(),
    })
}

/// `POST /api/v1/optimize`
///
/// Malformed JSON and failed validation map to 400; catalog and backtest failures to 500.
pub async fn optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizationRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    debug!(
        portfolio_size = %request.portfolio_size,
        risk_tolerance = ?request.risk_tolerance,
        time_horizon = ?request.time_horizon,
        chains = request.preferred_chains.len(),
        "Optimization requested"
    );

    let mut path = state
        .optimizer
        .backtest()
        .jittered_path(state.backtest_seed)
        .map_err(OptimizerError::from)?;

    let report = state
        .optimizer
        .optimize_from(state.provider.as_ref(), &request, &mut path)
        .await?;

    info!(
        positions = report.portfolio.allocations.len(),
        total_apy = %report.portfolio.total_apy,
        "Optimization served"
    );
    Ok(Json(report.into()))
}

/// `GET /api/v1/opportunities?chains=Ethereum,Base`
pub async fn list_opportunities(
    State(state): State<AppState>,
    Query(query): Query<OpportunitiesQuery>,
) -> Result<Json<OpportunitiesResponse>, ApiError> {
    let chains = query.chain_list();
    let opportunities = state
        .provider
        .get_opportunities(&chains)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(OpportunitiesResponse {
        success: true,
        count: opportunities.len(),
        opportunities,
    }))
}
