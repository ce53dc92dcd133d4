//! Stocks Server
//!
//! HTTP backend serving stock prices from SQLite with a cache-aside layer in
//! front (Redis, or an in-process map).

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::StockService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub stock_service: Arc<StockService>,
}

impl AppState {
    pub fn new(stock_service: Arc<StockService>) -> Self {
        Self { stock_service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/stocks/:ticker",
            get(handlers::stocks::get).post(handlers::stocks::update),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
