#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{DateTime, NaiveDate};
use std::path::Path;
use std::sync::Arc;
use toolshed::application::JournalService;
use toolshed::domain::{FixedClock, JournalDraft, JournalEntry};
use toolshed::infrastructure::{CacheStore, LocalStore, MemoryCache};

/// Binary with a clean environment, local storage under `data_dir` and no cache
pub fn toolshed_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("toolshed").unwrap();
    cmd.env_remove("TOOLSHED_CONFIG");
    cmd.env_remove("TOOLSHED_LOG");
    cmd.env_remove("REDIS_HOST");
    cmd.env_remove("REDIS_PORT");
    cmd.env_remove("REDIS_PASSWORD");
    cmd.env_remove("REDIS_TIMEOUT");
    cmd.env("TOOLSHED_CACHE", "off");
    cmd.env("TOOLSHED_DATA_DIR", data_dir);
    cmd.current_dir(data_dir);
    cmd
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Journal service over a memory cache and a local store rooted at `root`
pub fn journal_at(root: &Path, today: NaiveDate) -> (JournalService, Arc<MemoryCache>) {
    let backend = Arc::new(MemoryCache::new());
    let service = JournalService::new(
        CacheStore::new(backend.clone()),
        LocalStore::new(root.to_path_buf()),
        Arc::new(FixedClock::on(today)),
    );
    (service, backend)
}

pub fn sample_draft() -> JournalDraft {
    JournalDraft::new(
        "Shipped the export feature",
        "Skipped the morning run",
        "Dinner with family",
        "Renewed the passport",
    )
}

/// A stored entry for an arbitrary past date
pub fn entry_on(date: NaiveDate, text: &str) -> JournalEntry {
    JournalEntry {
        date,
        timestamp: DateTime::parse_from_rfc3339("2025-01-01T20:00:00+00:00").unwrap(),
        success: format!("{} success", text),
        regret: format!("{} regret", text),
        highlight: format!("{} highlight", text),
        frog: format!("{} frog", text),
    }
}
