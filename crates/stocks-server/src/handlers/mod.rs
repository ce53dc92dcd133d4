//! HTTP handlers

pub mod health;
pub mod stocks;

pub use health::health;
