//! In-process cache backend with per-key expiry

use super::{CacheBackend, CacheError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Slot {
    value: String,
    expires_at: Option<Instant>,
}

impl Slot {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Expiring map kept in memory. Expired keys are dropped when next touched.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        MemoryCache::default()
    }

    /// Remaining lifetime of `key`; `None` if missing, expired or persistent
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let slots = self.slots.lock().ok()?;
        let now = Instant::now();
        let slot = slots.get(key)?;
        if slot.is_expired(now) {
            return None;
        }
        slot.expires_at.map(|at| at.saturating_duration_since(now))
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.slots
            .lock()
            .map(|slots| slots.values().filter(|s| !s.is_expired(now)).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Slot>>, CacheError> {
        self.slots
            .lock()
            .map_err(|_| CacheError::Backend("memory cache lock poisoned".to_string()))
    }
}

impl CacheBackend for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut slots = self.lock()?;
        let now = Instant::now();

        match slots.get(key) {
            Some(slot) if slot.is_expired(now) => {
                slots.remove(key);
                Ok(None)
            }
            Some(slot) => Ok(Some(slot.value.clone())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut slots = self.lock()?;
        slots.insert(
            key.to_string(),
            Slot {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| Instant::now() + ttl),
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn ping(&self, _timeout: Duration) -> Result<(), CacheError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_set_and_get() {
        let cache = MemoryCache::new();
        cache.set("k", "v", None).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(cache.get("other").unwrap(), None);
    }

    #[test]
    fn test_overwrite_replaces_value_and_ttl() {
        let cache = MemoryCache::new();
        cache.set("k", "old", Some(Duration::from_millis(1))).unwrap();
        cache.set("k", "new", None).unwrap();
        thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get("k").unwrap(), Some("new".to_string()));
        assert_eq!(cache.ttl("k"), None);
    }

    #[test]
    fn test_expired_key_is_gone() {
        let cache = MemoryCache::new();
        cache.set("k", "v", Some(Duration::from_millis(1))).unwrap();
        thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get("k").unwrap(), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_delete_and_ping() {
        let cache = MemoryCache::new();
        cache.set("k", "v", None).unwrap();
        cache.delete("k").unwrap();
        assert_eq!(cache.get("k").unwrap(), None);
        assert!(cache.ping(Duration::from_secs(1)).is_ok());
    }
}
