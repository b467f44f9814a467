//! HTTP transport: routing, parameter validation, and CORS.
//!
//! The transport is deliberately thin. It rejects malformed requests before
//! they reach the core and otherwise hands off to
//! [`SearchAggregator`], which never fails for data-shape reasons.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::search::SearchAggregator;
use crate::search::query::{MIN_QUERY_LEN, clamp_query, normalize_query};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<SearchAggregator>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    limit: Option<i64>,
}

/// Build the application router with its CORS layer.
pub fn app_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/search", get(search))
        .with_state(state)
        .layer(cors)
}

/// Bind and serve until the process is stopped.
pub async fn run(config: Config, aggregator: Arc<SearchAggregator>) -> anyhow::Result<()> {
    let app = app_router(AppState { aggregator }, &config.allowed_origins);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("content-search listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let normalized = normalize_query(params.q.as_deref().unwrap_or(""));
    if normalized.chars().count() < MIN_QUERY_LEN {
        return bad_request("search term must be between 2 and 60 characters");
    }

    let limit = match params.limit {
        Some(n) if n < 1 => return bad_request("limit must be at least 1"),
        Some(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        None => None,
    };

    let results = state.aggregator.search(clamp_query(&normalized), limit).await;
    Json(results).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
}
