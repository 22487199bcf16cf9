pub mod currency;
pub mod history;

use axum::{http::StatusCode, Json};
use tracing::{error, warn};

use crate::models::price::ErrorResponse;
use crate::services::error::ServiceError;

/// Translate a service failure into its HTTP status and error body.
pub(crate) fn error_response(err: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        ServiceError::NotFound(_) => {
            warn!(error = %err, "Currency not found");
            (StatusCode::NOT_FOUND, "CURRENCY_NOT_FOUND")
        }
        ServiceError::UpstreamUnavailable(_) => {
            error!(error = %err, "Price feed request failed");
            (StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_UNAVAILABLE")
        }
        ServiceError::StorageFailure(_) => {
            error!(error = %err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: Some(code.to_string()),
        }),
    )
}
