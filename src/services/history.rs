//! Recent observations behind `GET /history`

use super::error::ServiceError;
use super::price_store::PriceStore;
use crate::models::price::PriceObservation;

/// Fixed page size; there is no pagination.
pub const HISTORY_PAGE_SIZE: u64 = 5;

#[derive(Clone)]
pub struct HistoryService {
    store: PriceStore,
}

impl HistoryService {
    pub fn new(store: PriceStore) -> Self {
        Self { store }
    }

    pub async fn get_recent(&self) -> Result<Vec<PriceObservation>, ServiceError> {
        Ok(self.store.recent_history(HISTORY_PAGE_SIZE).await?)
    }
}
