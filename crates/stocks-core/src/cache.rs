//! Cache key derivation and payload codec

use crate::error::{Result, StockError};
use crate::stock::StockRecord;

const KEY_PREFIX: &str = "stock:";

/// Cache key for a ticker: `stock:<ticker>`
pub fn cache_key(ticker: &str) -> String {
    format!("{}{}", KEY_PREFIX, ticker)
}

/// Serialize a record into its cached form
pub fn encode(record: &StockRecord) -> Result<String> {
    serde_json::to_string(record)
        .map_err(|e| StockError::CacheUnavailable(format!("Failed to encode cache payload: {}", e)))
}

/// Parse a cached payload.
///
/// A blank payload counts as a miss. Anything else that is not a valid
/// record is an error, never a partially typed value.
pub fn decode(payload: &str) -> Result<Option<StockRecord>> {
    if payload.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(payload)
        .map(Some)
        .map_err(|e| StockError::CacheUnavailable(format!("Malformed cache payload: {}", e)))
}
