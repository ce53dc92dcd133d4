//! Side cache holding serialized stock records

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// TTL-based key-value cache
///
/// Entries expire on their own; nothing in this crate deletes them.
#[async_trait]
pub trait StockCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite `key` unconditionally.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    async fn ping(&self) -> Result<()>;
}
