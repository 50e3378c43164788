//! Shared clipboard use case
//!
//! One global text value kept in the cache tier without expiry. There is no
//! durable copy, so any cache failure is a persistence failure here.

use crate::domain::validation::validate_clipboard;
use crate::error::{Result, ToolshedError};
use crate::infrastructure::cache::CLIPBOARD_KEY;
use crate::infrastructure::CacheStore;
use tracing::{error, info};

pub struct ClipboardService {
    cache: CacheStore,
}

impl ClipboardService {
    pub fn new(cache: CacheStore) -> Self {
        ClipboardService { cache }
    }

    /// Current clipboard text; empty if nothing was ever stored
    pub fn show(&self) -> Result<String> {
        self.cache
            .get_text(CLIPBOARD_KEY)
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                error!(error = %e, "failed to read clipboard");
                ToolshedError::persistence(e)
            })
    }

    /// Replace the clipboard text and return what was stored
    pub fn replace(&self, text: &str) -> Result<String> {
        let text = validate_clipboard(text)?;

        self.cache.set_text(CLIPBOARD_KEY, &text).map_err(|e| {
            error!(error = %e, "failed to store clipboard");
            ToolshedError::persistence(e)
        })?;

        info!(chars = text.chars().count(), "clipboard replaced");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::infrastructure::MemoryCache;
    use std::sync::Arc;

    fn service() -> ClipboardService {
        ClipboardService::new(CacheStore::new(Arc::new(MemoryCache::new())))
    }

    #[test]
    fn test_empty_until_set() {
        assert_eq!(service().show().unwrap(), "");
    }

    #[test]
    fn test_replace_trims_and_overwrites() {
        let clipboard = service();
        clipboard.replace("first").unwrap();
        assert_eq!(clipboard.replace("  second \n").unwrap(), "second");
        assert_eq!(clipboard.show().unwrap(), "second");
    }

    #[test]
    fn test_replace_rejects_control_characters() {
        let clipboard = service();
        clipboard.replace("kept").unwrap();

        assert!(matches!(
            clipboard.replace("bad\u{7}"),
            Err(ToolshedError::Validation(ValidationError::IllegalCharacter { .. }))
        ));
        assert_eq!(clipboard.show().unwrap(), "kept");
    }

    #[test]
    fn test_disabled_cache_is_persistence_error() {
        let clipboard = ClipboardService::new(CacheStore::disabled());
        assert!(matches!(
            clipboard.replace("hello"),
            Err(ToolshedError::Persistence(_))
        ));
        assert!(matches!(clipboard.show(), Err(ToolshedError::Persistence(_))));
    }
}
