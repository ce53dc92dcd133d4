//! Error types for the stocks service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StockError>;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Stock not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl StockError {
    /// Stable machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            StockError::NotFound(_) => "not_found",
            StockError::StoreUnavailable(_) => "store_unavailable",
            StockError::CacheUnavailable(_) => "cache_unavailable",
            StockError::Validation(_) => "invalid_request",
            StockError::Config(_) => "config_error",
        }
    }
}
