//! Stock record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted stock price, also the payload stored in the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: i64,
    pub ticker: String,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

impl StockRecord {
    pub fn new(id: i64, ticker: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            ticker: ticker.into(),
            price,
            updated_at: Utc::now(),
        }
    }

    /// Stamp the record as persisted now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Initial row inserted on first run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedStock {
    pub ticker: String,
    pub price: f64,
}

impl SeedStock {
    pub fn new(ticker: impl Into<String>, price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            price,
        }
    }

    /// Rows seeded into an empty table when nothing else is configured
    pub fn defaults() -> Vec<SeedStock> {
        vec![SeedStock::new("AAPL", 150.0), SeedStock::new("MSFT", 300.0)]
    }
}

/// Check a requested price before it reaches the service
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}
