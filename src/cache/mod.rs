//! Key-value cache stores and the lot-listing read-through cache.
//!
//! The cache is a pure performance optimization: mutations never invalidate
//! it, so staleness is bounded only by the entry TTL. `CacheStore` abstracts
//! the backing store so the listing cache can run against Redis in production
//! and an in-process map in tests and development.

pub mod lot_listing;
pub mod memory;
pub mod redis;

use std::time::Duration;

use thiserror::Error;

pub use lot_listing::LotListingCache;
pub use memory::MemoryCacheStore;
pub use redis::RedisCacheStore;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Redis(#[from] ::redis::RedisError),
}

/// Get/set-with-expiry interface over a key-value store.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetches a value if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a value that expires after `ttl`.
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}
