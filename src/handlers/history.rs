use axum::{extract::State, http::StatusCode, Json};

use super::error_response;
use crate::models::price::{ErrorResponse, PriceObservation};
use crate::AppState;

/// GET /history: the five most recent observations, newest first.
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceObservation>>, (StatusCode, Json<ErrorResponse>)> {
    let recent = state.history.get_recent().await.map_err(error_response)?;

    tracing::info!(count = recent.len(), "History query completed");

    Ok(Json(recent))
}
