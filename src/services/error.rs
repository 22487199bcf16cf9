use thiserror::Error;

use super::price_store::StoreError;

/// Failures surfaced by the price services, one per HTTP status class.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("price feed unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("currency '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    StorageFailure(#[from] StoreError),
}
