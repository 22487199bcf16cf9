//! Persistence for price observations (`crypto_prices` table)

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use thiserror::Error;

use crate::entities::{crypto_prices, prelude::CryptoPrices};
use crate::models::price::PriceObservation;

#[derive(Debug, Error)]
#[error("price store error: {0}")]
pub struct StoreError(#[from] pub DbErr);

#[derive(Clone)]
pub struct PriceStore {
    db: DatabaseConnection,
}

impl PriceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new observation and return the row as stored.
    ///
    /// `id` and `fetched_at` come from the database. The row is committed
    /// before this returns; on error the transaction is rolled back when dropped.
    pub async fn insert(&self, symbol: &str, price_usd: f64) -> Result<PriceObservation, StoreError> {
        let txn = self.db.begin().await?;

        let row = crypto_prices::ActiveModel {
            symbol: Set(symbol.to_string()),
            price_usd: Set(price_usd),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::debug!(id = row.id, symbol = %row.symbol, "Stored price observation");

        Ok(row.into())
    }

    /// Up to `limit` observations, newest first (ties on `fetched_at` by id).
    pub async fn recent_history(&self, limit: u64) -> Result<Vec<PriceObservation>, StoreError> {
        let rows = CryptoPrices::find()
            .order_by_desc(crypto_prices::Column::FetchedAt)
            .order_by_desc(crypto_prices::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(PriceObservation::from).collect())
    }
}
