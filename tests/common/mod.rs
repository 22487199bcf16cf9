#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Query,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http_body_util::BodyExt;
use crypto_watcher::{build_router, services::coingecko::CoinGeckoClient, AppState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const STUB_API_KEY: &str = "test-api-key";

/// Set up test database connection
/// In-memory SQLite with the schema applied; a single pooled connection keeps one database
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Stand-in for CoinGecko's `/simple/price`.
///
/// - `bitcoin`, `ethereum`: normal quotes
/// - `premium-coin`: quoted only when the API key header is present
/// - `no-usd`: entry without a USD field
/// - `rate-limited`: HTTP 429
/// - `garbled`: body that is not JSON
/// - `slow`: answers after 2 seconds
/// - anything else: `{}`
async fn simple_price(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let id = params.get("ids").cloned().unwrap_or_default();

    if params.get("vs_currencies").map(String::as_str) != Some("usd") {
        return (StatusCode::BAD_REQUEST, "vs_currencies must be usd").into_response();
    }

    match id.as_str() {
        "bitcoin" => Json(json!({ "bitcoin": { "usd": 95000.5 } })).into_response(),
        "ethereum" => Json(json!({ "ethereum": { "usd": 3500.25 } })).into_response(),
        "premium-coin" => {
            let authorized = headers
                .get("x-cg-pro-api-key")
                .and_then(|v| v.to_str().ok())
                == Some(STUB_API_KEY);
            if authorized {
                Json(json!({ "premium-coin": { "usd": 1.5 } })).into_response()
            } else {
                Json(json!({})).into_response()
            }
        }
        "no-usd" => Json(json!({ "no-usd": {} })).into_response(),
        "rate-limited" => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "status": { "error_code": 429, "error_message": "rate limited" } })),
        )
            .into_response(),
        "garbled" => "<html>bad gateway</html>".into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "slow": { "usd": 1.0 } })).into_response()
        }
        _ => Json(json!({})).into_response(),
    }
}

/// Spawn the stub feed on an ephemeral port and return its base URL.
pub async fn spawn_stub_coingecko() -> String {
    let app = Router::new().route("/simple/price", get(simple_price));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr: SocketAddr = listener.local_addr().expect("No address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str, timeout: Duration) -> CoinGeckoClient {
    CoinGeckoClient::new(base_url.to_string(), None, timeout).expect("Failed to build client")
}

/// Full application router backed by `db` and a CoinGecko client at `base_url`.
pub fn build_test_router(db: DatabaseConnection, base_url: &str) -> Router {
    let client = client_for(base_url, Duration::from_millis(500));
    build_router(AppState::new(db, Arc::new(client)))
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
