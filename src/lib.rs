// src/lib.rs

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use services::{
    coingecko::PriceFeed, history::HistoryService, price_fetch::PriceFetchService,
    price_store::PriceStore,
};

#[derive(Clone)]
pub struct AppState {
    pub price_fetch: PriceFetchService,
    pub history: HistoryService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, feed: Arc<dyn PriceFeed>) -> Self {
        let store = PriceStore::new(db);
        Self {
            price_fetch: PriceFetchService::new(feed, store.clone()),
            history: HistoryService::new(store),
        }
    }
}

pub mod entities {
    pub mod prelude;
    pub mod crypto_prices;
}

pub mod services {
    pub mod coingecko;
    pub mod error;
    pub mod history;
    pub mod price_fetch;
    pub mod price_store;
}

pub mod config;
pub mod models;
pub mod handlers;


pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/", get(hello))
        .route("/currency/{coin_id}", get(handlers::currency::get_coin_price))
        .route("/history", get(handlers::history::get_history))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn hello() -> &'static str {
    "Hello from Crypto Watcher!"
}
