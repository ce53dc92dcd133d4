//! Redis-backed cache

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::time::Duration;
use stocks_core::{Result, StockCache, StockError};

/// Redis cache over a reconnecting multiplexed connection
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(url: &str) -> Result<Self> {
        tracing::info!("Connecting to Redis at {}", url);

        let client = redis::Client::open(url).map_err(cache_error)?;
        let conn = ConnectionManager::new(client).await.map_err(cache_error)?;

        let cache = Self { conn };
        cache.ping().await?;

        tracing::info!("Connected to Redis");

        Ok(cache)
    }
}

#[async_trait]
impl StockCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await
            .map_err(cache_error)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        // EX rejects 0, so sub-second TTLs round up to one second
        let seconds = ttl.as_secs().max(1);
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(seconds)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(cache_error)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(cache_error)
    }
}

fn cache_error(e: redis::RedisError) -> StockError {
    StockError::CacheUnavailable(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/0".to_string())
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = RedisCache::connect("not-a-redis-url").await.err().unwrap();
        assert!(matches!(err, StockError::CacheUnavailable(_)));
    }

    #[tokio::test]
    #[ignore = "requires a running redis server"]
    async fn test_set_then_get_with_expiry() {
        let cache = RedisCache::connect(&redis_url()).await.unwrap();

        cache
            .set("stock:TEST", "payload".to_string(), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(cache.get("stock:TEST").await.unwrap(), Some("payload".to_string()));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(cache.get("stock:TEST").await.unwrap(), None);
    }
}
