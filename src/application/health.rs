//! Startup connectivity probe for the cache tier

use crate::infrastructure::CacheStore;
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Connected,
    Unreachable(String),
    Disabled,
}

impl CacheStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, CacheStatus::Connected)
    }

    pub fn describe(&self) -> String {
        match self {
            CacheStatus::Connected => "cache: connected".to_string(),
            CacheStatus::Unreachable(reason) => format!("cache: unreachable ({})", reason),
            CacheStatus::Disabled => "cache: disabled".to_string(),
        }
    }
}

/// Ping the cache once. Only logs; never fails.
pub fn probe_cache(cache: &CacheStore, timeout: Duration) -> CacheStatus {
    let Some(backend) = cache.backend() else {
        info!("cache tier disabled");
        return CacheStatus::Disabled;
    };

    match backend.ping(timeout) {
        Ok(()) => {
            info!("cache connection established");
            CacheStatus::Connected
        }
        Err(e) => {
            warn!(error = %e, "cache unreachable, continuing with local storage only");
            CacheStatus::Unreachable(e.to_string())
        }
    }
}

/// Keep the cache only if the probe reached it
pub fn degrade_if_unreachable(cache: CacheStore, status: &CacheStatus) -> CacheStore {
    match status {
        CacheStatus::Connected => cache,
        _ => CacheStore::disabled(),
    }
}
