//! Storage layer
//!
//! SQLite (embedded) is the durable store. The side cache is Redis, or an
//! in-process DashMap when no Redis is available.

pub mod db;
pub mod memory;
pub mod redis;

pub use db::Database;
pub use memory::MemoryCache;
pub use self::redis::RedisCache;
