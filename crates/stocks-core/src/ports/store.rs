//! Durable stock storage

use crate::stock::StockRecord;
use crate::Result;
use async_trait::async_trait;

/// Stock store, one row per ticker
#[async_trait]
pub trait StockStore: Send + Sync {
    async fn find_by_ticker(&self, ticker: &str) -> Result<Option<StockRecord>>;

    /// Persist the record's price and return it with a fresh `updated_at`.
    async fn save(&self, record: &StockRecord) -> Result<StockRecord>;
}
