//! `SeaORM` Entity for crypto_prices table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crypto_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// CoinGecko coin id, e.g. "bitcoin"
    pub symbol: String,
    #[sea_orm(column_type = "Double")]
    pub price_usd: f64,
    /// Set by the database default on insert
    pub fetched_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
