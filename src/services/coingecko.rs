//! CoinGecko `/simple/price` client
//!
//! One outbound request per call, no retries and no caching. Every transport
//! problem (refused connection, timeout, TLS, bad status, unparseable body)
//! is reported as [`UpstreamError::ConnectionFailed`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("price feed request failed: {0}")]
    ConnectionFailed(String),
    #[error("price feed has no USD quote for this currency")]
    UnknownCurrency,
}

/// Source of current USD prices keyed by CoinGecko coin id.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_price(&self, currency_id: &str) -> Result<f64, UpstreamError>;
}

// {"bitcoin": {"usd": 95000.5}}
type SimplePriceResponse = HashMap<String, SimplePriceQuote>;

#[derive(Debug, Deserialize)]
struct SimplePriceQuote {
    usd: Option<f64>,
}

#[derive(Clone)]
pub struct CoinGeckoClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PriceFeed for CoinGeckoClient {
    async fn fetch_price(&self, currency_id: &str) -> Result<f64, UpstreamError> {
        let url = format!("{}/simple/price", self.base_url);

        tracing::debug!("Fetching USD price for {} from CoinGecko", currency_id);

        let mut request = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&[("ids", currency_id), ("vs_currencies", "usd")]);

        if let Some(api_key) = &self.api_key {
            request = request.header("x-cg-pro-api-key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("CoinGecko API error {}: {}", status, error_text);
            return Err(UpstreamError::ConnectionFailed(format!(
                "CoinGecko API error {}",
                status
            )));
        }

        let data: SimplePriceResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::ConnectionFailed(e.to_string()))?;

        let price = data
            .get(currency_id)
            .and_then(|quote| quote.usd)
            .ok_or(UpstreamError::UnknownCurrency)?;

        tracing::debug!("CoinGecko quoted {} at ${}", currency_id, price);

        Ok(price)
    }
}
