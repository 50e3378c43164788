//! Cache tier
//!
//! An expiring key-value store used as the fast path for recent journal days
//! and as the only home of the shared clipboard. Backends implement
//! [`CacheBackend`]; [`CacheStore`] owns key naming, encoding and TTLs.

mod memory;
mod redis_backend;

pub use memory::MemoryCache;
pub use redis_backend::RedisCache;

use crate::domain::JournalEntry;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Retention of journal entries in the cache tier
pub const JOURNAL_TTL: Duration = Duration::from_secs(30 * 86_400);

/// Key of the shared clipboard text
pub const CLIPBOARD_KEY: &str = "cloud_clipboard";

/// Cache key for a journal date, e.g. `journal:2025-01-17`
pub fn journal_key(date: NaiveDate) -> String {
    format!("journal:{}", date.format("%Y-%m-%d"))
}

#[derive(Debug, Error)]
pub enum CacheError {
    /// The backend could not be reached in time. Callers may treat the tier as absent.
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but the operation failed
    #[error("cache backend error: {0}")]
    Backend(String),
}

impl CacheError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CacheError::Unavailable(_))
    }
}

/// Minimal key-value operations the cache tier needs
pub trait CacheBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value`, replacing any previous one. `ttl` of `None` never expires;
    /// a new TTL replaces the old one.
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Connectivity check bounded by `timeout`
    fn ping(&self, timeout: Duration) -> Result<(), CacheError>;
}

/// Typed access to the cache tier. A disabled store behaves as an empty cache
/// that accepts and drops writes.
#[derive(Clone)]
pub struct CacheStore {
    backend: Option<Arc<dyn CacheBackend>>,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl CacheStore {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        CacheStore {
            backend: Some(backend),
        }
    }

    pub fn disabled() -> Self {
        CacheStore { backend: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&Arc<dyn CacheBackend>> {
        self.backend.as_ref()
    }

    /// Store the entry under its date key with the journal TTL
    pub fn set_entry(&self, entry: &JournalEntry) -> Result<(), CacheError> {
        let Some(backend) = &self.backend else {
            return Ok(());
        };
        let payload = serde_json::to_string(entry)
            .map_err(|e| CacheError::Backend(format!("failed to encode entry: {}", e)))?;
        backend.set(&journal_key(entry.date), &payload, Some(JOURNAL_TTL))
    }

    /// Entry for `date`, or `None` if absent or expired
    pub fn get_entry(&self, date: NaiveDate) -> Result<Option<JournalEntry>, CacheError> {
        let Some(backend) = &self.backend else {
            return Ok(None);
        };
        let Some(payload) = backend.get(&journal_key(date))? else {
            return Ok(None);
        };
        serde_json::from_str(&payload)
            .map(Some)
            .map_err(|e| CacheError::Backend(format!("undecodable entry for {}: {}", date, e)))
    }

    pub fn remove_entry(&self, date: NaiveDate) -> Result<(), CacheError> {
        match &self.backend {
            Some(backend) => backend.delete(&journal_key(date)),
            None => Ok(()),
        }
    }

    /// Raw text stored without expiry
    pub fn get_text(&self, key: &str) -> Result<Option<String>, CacheError> {
        match &self.backend {
            Some(backend) => backend.get(key),
            None => Err(CacheError::Unavailable("cache is disabled".to_string())),
        }
    }

    pub fn set_text(&self, key: &str, value: &str) -> Result<(), CacheError> {
        match &self.backend {
            Some(backend) => backend.set(key, value, None),
            None => Err(CacheError::Unavailable("cache is disabled".to_string())),
        }
    }
}
