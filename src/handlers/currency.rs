//! GET /currency/{coin_id}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::error_response;
use crate::models::price::{ErrorResponse, PriceObservation};
use crate::AppState;

/// Fetch the current USD price for `coin_id`, store it, and return the stored row.
///
/// # Response
/// - 200: Stored observation
/// - 404: CoinGecko has no quote for `coin_id`
/// - 503: CoinGecko unreachable or returned garbage
/// - 500: Database error
pub async fn get_coin_price(
    State(state): State<AppState>,
    Path(coin_id): Path<String>,
) -> Result<Json<PriceObservation>, (StatusCode, Json<ErrorResponse>)> {
    info!(coin_id = %coin_id, "Fetching coin price");

    let observation = state
        .price_fetch
        .get_price(&coin_id)
        .await
        .map_err(error_response)?;

    info!(
        id = observation.id,
        coin_id = %coin_id,
        price_usd = observation.price_usd,
        "Price stored"
    );

    Ok(Json(observation))
}
