use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use yield_opt_optimization::OptimizerError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or query was malformed or failed validation.
    #[error("{0}")]
    BadRequest(String),
    /// The optimization could not be computed.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Machine-readable error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Internal(_) => "internal",
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<OptimizerError> for ApiError {
    fn from(err: OptimizerError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(message) = &self {
            error!(%message, "Request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Configuration errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidVar { var: &'static str, value: String },
}
