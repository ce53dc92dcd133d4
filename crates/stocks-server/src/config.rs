//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `stocks.toml` (or the file named by `STOCKS_CONFIG`), then `STOCKS_*`
//! environment variables using `__` for nesting
//! (e.g. `STOCKS_CACHE__READ_TTL_SECS=30`).

use serde::Deserialize;
use std::time::Duration;
use stocks_core::{Result, SeedStock, StockError};

const DEFAULT_CONFIG_FILE: &str = "stocks";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_path: String,
    pub cache: CacheConfig,
    #[serde(default = "SeedStock::defaults")]
    pub seed: Vec<SeedStock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub redis_url: String,
    pub read_ttl_secs: u64,
    pub write_ttl_secs: u64,
}

/// Expiry applied on each cache write path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtl {
    /// Used when a read miss populates the cache
    pub read: Duration,
    /// Used when an update overwrites the cache
    pub write: Duration,
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(60),
            write: Duration::from_secs(60),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> CacheTtl {
        CacheTtl {
            read: Duration::from_secs(self.read_ttl_secs),
            write: Duration::from_secs(self.write_ttl_secs),
        }
    }
}

impl ServerConfig {
    /// Load from the default file name and the process environment
    pub fn load() -> Result<Self> {
        let file = std::env::var("STOCKS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&file)
    }

    pub fn load_from(file: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")
            .and_then(|b| b.set_default("database_path", "data/stocks.db"))
            .and_then(|b| b.set_default("cache.backend", "redis"))
            .and_then(|b| b.set_default("cache.redis_url", "redis://127.0.0.1:6379/0"))
            .and_then(|b| b.set_default("cache.read_ttl_secs", 60_i64))
            .and_then(|b| b.set_default("cache.write_ttl_secs", 60_i64))
            .map_err(config_error)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("STOCKS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_error)?;

        let config: ServerConfig = settings.try_deserialize().map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.cache.read_ttl_secs == 0 || self.cache.write_ttl_secs == 0 {
            return Err(StockError::Config(
                "cache TTLs must be at least one second".to_string(),
            ));
        }

        if let Some(bad) = self
            .seed
            .iter()
            .find(|s| s.ticker.is_empty() || !stocks_core::stock::is_valid_price(s.price))
        {
            return Err(StockError::Config(format!(
                "invalid seed entry: {:?}",
                bad
            )));
        }

        Ok(())
    }
}

fn config_error(e: config::ConfigError) -> StockError {
    StockError::Config(e.to_string())
}
