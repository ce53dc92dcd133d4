//! Stocks Core Library
//!
//! Domain types, cache payload codec, error taxonomy and the port traits
//! implemented by the server's storage layer.

pub mod cache;
pub mod error;
pub mod ports;
pub mod stock;

pub use error::{Result, StockError};
pub use ports::{StockCache, StockStore};
pub use stock::{SeedStock, StockRecord};
