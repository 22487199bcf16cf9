//! Price observation models
//!
//! Wire shapes for `GET /currency/{coin_id}` and `GET /history`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::entities::crypto_prices;

/// One persisted price record with its database-assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub id: i32,
    /// CoinGecko coin id as requested, e.g. "bitcoin"
    pub symbol: String,
    pub price_usd: f64,
    /// RFC 3339 on the wire
    pub fetched_at: DateTime<FixedOffset>,
}

impl From<crypto_prices::Model> for PriceObservation {
    fn from(row: crypto_prices::Model) -> Self {
        Self {
            id: row.id,
            symbol: row.symbol,
            price_usd: row.price_usd,
            fetched_at: row.fetched_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
