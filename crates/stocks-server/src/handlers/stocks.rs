//! Stock handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use stocks_core::stock::is_valid_price;
use stocks_core::StockRecord;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    price: f64,
}

pub async fn get(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<StockRecord>, ApiError> {
    info!("GET /stocks/{}", ticker);

    state
        .stock_service
        .get_stock(&ticker)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(ticker))
}

pub async fn update(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    body: Result<Json<UpdateStockRequest>, JsonRejection>,
) -> Result<Json<StockRecord>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    if !is_valid_price(req.price) {
        return Err(ApiError::InvalidRequest(
            "price must be a positive number".to_string(),
        ));
    }

    info!("POST /stocks/{} (price: {})", ticker, req.price);

    state
        .stock_service
        .update_stock(&ticker, req.price)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(ticker))
}
