//! Infrastructure layer - Storage tiers and configuration

pub mod cache;
pub mod config;
pub mod local_store;

pub use cache::{CacheBackend, CacheError, CacheStore, MemoryCache, RedisCache};
pub use config::{CacheSettings, Config};
pub use local_store::LocalStore;
