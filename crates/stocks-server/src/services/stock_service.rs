//! Stock service: cache-aside reads and write-through updates
//!
//! Reads consult the cache first and only fall back to the store on a miss,
//! populating the cache with what the store returned. Updates go to the store
//! and then overwrite the cache entry unconditionally.
//!
//! Nothing here coordinates concurrent callers. Two misses on the same ticker
//! both read the store and both populate the cache; two updates race and the
//! last one wins in both places.

use crate::config::CacheTtl;
use std::sync::Arc;
use stocks_core::cache::{cache_key, decode, encode};
use stocks_core::{Result, StockCache, StockRecord, StockStore};
use tracing::{debug, info};

pub struct StockService {
    store: Arc<dyn StockStore>,
    cache: Arc<dyn StockCache>,
    ttl: CacheTtl,
}

impl StockService {
    pub fn new(store: Arc<dyn StockStore>, cache: Arc<dyn StockCache>, ttl: CacheTtl) -> Self {
        Self { store, cache, ttl }
    }

    pub async fn get_stock(&self, ticker: &str) -> Result<Option<StockRecord>> {
        let key = cache_key(ticker);

        if let Some(payload) = self.cache.get(&key).await? {
            if let Some(stock) = decode(&payload)? {
                debug!("Cache hit: {}", key);
                return Ok(Some(stock));
            }
        }

        debug!("Cache miss: {}", key);

        let Some(stock) = self.store.find_by_ticker(ticker).await? else {
            info!("Stock {} not found in store", ticker);
            return Ok(None);
        };

        self.cache.set(&key, encode(&stock)?, self.ttl.read).await?;
        debug!("Cached {} for {:?}", key, self.ttl.read);

        Ok(Some(stock))
    }

    pub async fn update_stock(&self, ticker: &str, price: f64) -> Result<Option<StockRecord>> {
        let Some(mut stock) = self.store.find_by_ticker(ticker).await? else {
            info!("Update skipped, stock {} not found", ticker);
            return Ok(None);
        };

        stock.price = price;
        let updated = self.store.save(&stock).await?;

        self.cache
            .set(&cache_key(ticker), encode(&updated)?, self.ttl.write)
            .await?;

        info!("Updated {} price to {}", ticker, price);

        Ok(Some(updated))
    }

    pub async fn ping_cache(&self) -> Result<()> {
        self.cache.ping().await
    }
}
