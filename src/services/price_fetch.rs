//! Fetch-and-persist flow behind `GET /currency/{coin_id}`

use std::sync::Arc;

use super::coingecko::{PriceFeed, UpstreamError};
use super::error::ServiceError;
use super::price_store::PriceStore;
use crate::models::price::PriceObservation;

#[derive(Clone)]
pub struct PriceFetchService {
    feed: Arc<dyn PriceFeed>,
    store: PriceStore,
}

impl PriceFetchService {
    pub fn new(feed: Arc<dyn PriceFeed>, store: PriceStore) -> Self {
        Self { feed, store }
    }

    /// Query the feed once and store the quote.
    ///
    /// The currency id is forwarded to the feed as-is. Nothing is written
    /// unless the feed returned a USD price.
    pub async fn get_price(&self, currency_id: &str) -> Result<PriceObservation, ServiceError> {
        let price = self
            .feed
            .fetch_price(currency_id)
            .await
            .map_err(|e| match e {
                UpstreamError::ConnectionFailed(detail) => ServiceError::UpstreamUnavailable(detail),
                UpstreamError::UnknownCurrency => ServiceError::NotFound(currency_id.to_string()),
            })?;

        let observation = self.store.insert(currency_id, price).await?;

        Ok(observation)
    }
}
