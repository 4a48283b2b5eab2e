//! Error types for the REST API.
//!
//! Every failure leaving the API has the same body shape:
//! `{ "detail": "<human message>" }` with a non-2xx status. The client
//! shows `detail` verbatim, so messages here are customer-facing.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use verdant_core::PricingError;
use verdant_db::DbError;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A pricing/discount rule rejected the request.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A resource lookup came up empty (catalog detail pages).
    #[error("{0}")]
    NotFound(String),

    /// The data store failed; the request can be retried later.
    #[error("Service temporarily unavailable")]
    Dependency(String),
}

/// Database failures are never the customer's fault: every DbError
/// surfaces as a 503, mirroring DependencyUnavailable in the core.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Dependency(err.to_string())
    }
}

impl ApiError {
    /// Maps an error kind to its HTTP status.
    ///
    /// ```text
    /// UnknownPlant / InvalidCode / NotFound        → 404
    /// CodeNotUsable / MinimumNotMet /
    ///   InsufficientStock / Validation             → 400
    /// DependencyUnavailable / Dependency           → 503
    /// ```
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Pricing(err) => match err {
                PricingError::UnknownPlant(_) | PricingError::InvalidCode(_) => {
                    StatusCode::NOT_FOUND
                }
                PricingError::InsufficientStock { .. }
                | PricingError::CodeNotUsable { .. }
                | PricingError::MinimumNotMet { .. }
                | PricingError::Validation(_) => StatusCode::BAD_REQUEST,
                PricingError::DependencyUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Dependency(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// The customer-facing message for the `detail` field.
    fn detail(&self) -> String {
        match self {
            // Store failures carry internals (paths, SQL); log them and
            // hand the client a generic message
            ApiError::Dependency(_) | ApiError::Pricing(PricingError::DependencyUnavailable(_)) => {
                "Service temporarily unavailable".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Dependency(internal)
            | ApiError::Pricing(PricingError::DependencyUnavailable(internal)) => {
                error!(%internal, "Data store failure");
            }
            other => {
                warn!(status = %status, detail = %other, "Request rejected");
            }
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
