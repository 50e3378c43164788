//! Durable per-day journal files
//!
//! Layout: `<root>/<YYYY-MM>/<YYYY-MM-DD>.toml`, one file per date.

use crate::domain::JournalEntry;
use crate::error::{Result, ToolshedError};
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;

/// File extension of stored entries
pub const RECORD_EXTENSION: &str = "toml";

#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`. Nothing is created until the first save.
    pub fn new(root: PathBuf) -> Self {
        LocalStore { root }
    }

    /// Path of the file holding `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(date.format("%Y-%m").to_string())
            .join(format!("{}.{}", date.format("%Y-%m-%d"), RECORD_EXTENSION))
    }

    /// Write the entry, replacing any file for the same date.
    ///
    /// The content goes to a temporary file in the target directory first and
    /// is renamed over the destination, so a crash never leaves half a record.
    pub fn save(&self, entry: &JournalEntry) -> Result<PathBuf> {
        let path = self.path_for(entry.date);
        let dir = path
            .parent()
            .ok_or_else(|| ToolshedError::Config(format!("Invalid record path: {}", path.display())))?;

        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(entry)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| ToolshedError::Io(e.error))?;

        debug!(date = %entry.date, path = %path.display(), "saved journal record");
        Ok(path)
    }

    /// Read the entry for `date`, if one was ever saved
    pub fn load(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        let path = self.path_for(date);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ToolshedError::Io(e)),
        };

        let entry: JournalEntry =
            toml::from_str(&contents).map_err(|e| ToolshedError::CorruptRecord {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        if entry.date != date {
            return Err(ToolshedError::CorruptRecord {
                path,
                reason: format!("file holds the entry for {}", entry.date),
            });
        }

        Ok(Some(entry))
    }

    /// All stored dates, newest first. Files whose name is not a date are skipped.
    pub fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(2).max_depth(2) {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
                if self.path_for(date) == path {
                    dates.push(date);
                }
            }
        }

        dates.sort_by(|a, b| b.cmp(a));
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn entry(date: NaiveDate, success: &str) -> JournalEntry {
        JournalEntry {
            date,
            timestamp: DateTime::parse_from_rfc3339("2025-01-17T21:30:00+01:00").unwrap(),
            success: success.to_string(),
            regret: "Stayed up late".to_string(),
            highlight: "Dinner with \"friends\"\nand dessert".to_string(),
            frog: "Inbox zero".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_path_layout() {
        let store = LocalStore::new(PathBuf::from("/data"));
        assert_eq!(
            store.path_for(date(2025, 1, 7)),
            PathBuf::from("/data/2025-01/2025-01-07.toml")
        );
    }

    #[test]
    fn test_save_creates_month_dir_and_loads_back() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().join("journal"));
        let original = entry(date(2025, 1, 17), "Finished the draft");

        let path = store.save(&original).unwrap();

        assert!(temp.path().join("journal/2025-01").is_dir());
        assert_eq!(path, temp.path().join("journal/2025-01/2025-01-17.toml"));
        assert_eq!(store.load(original.date).unwrap(), Some(original));
    }

    #[test]
    fn test_file_is_human_readable_toml() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().to_path_buf());
        let path = store.save(&entry(date(2025, 1, 17), "Wrote tests")).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("date = \"2025-01-17\""));
        assert!(content.contains("success = \"Wrote tests\""));
        assert!(content.contains("timestamp = \"2025-01-17T21:30:00+01:00\""));
    }

    #[test]
    fn test_save_overwrites_single_file() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().to_path_buf());
        let day = date(2025, 1, 17);

        store.save(&entry(day, "first")).unwrap();
        store.save(&entry(day, "second")).unwrap();

        let files: Vec<_> = fs::read_dir(temp.path().join("2025-01"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(files.len(), 1);
        assert_eq!(store.load(day).unwrap().unwrap().success, "second");
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().to_path_buf());
        assert_eq!(store.load(date(2025, 1, 17)).unwrap(), None);
    }

    #[test]
    fn test_load_corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().to_path_buf());
        let day = date(2025, 1, 17);
        let path = store.path_for(day);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "success = \"half written").unwrap();

        match store.load(day) {
            Err(ToolshedError::CorruptRecord { path: reported, .. }) => {
                assert_eq!(reported, path)
            }
            other => panic!("Expected CorruptRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_mismatched_date() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().to_path_buf());
        let saved = store.save(&entry(date(2025, 1, 16), "wrong day")).unwrap();
        let target = store.path_for(date(2025, 1, 17));
        fs::rename(saved, &target).unwrap();

        assert!(matches!(
            store.load(date(2025, 1, 17)),
            Err(ToolshedError::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_list_dates_newest_first() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().to_path_buf());
        for day in [date(2024, 12, 31), date(2025, 1, 17), date(2025, 1, 2)] {
            store.save(&entry(day, "x")).unwrap();
        }
        fs::write(temp.path().join("2025-01/notes.txt"), "ignored").unwrap();
        fs::write(temp.path().join("2025-01/2024-05-05.toml"), "misplaced").unwrap();

        assert_eq!(
            store.list_dates().unwrap(),
            vec![date(2025, 1, 17), date(2025, 1, 2), date(2024, 12, 31)]
        );
    }

    #[test]
    fn test_list_dates_without_root() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().join("absent"));
        assert!(store.list_dates().unwrap().is_empty());
    }
}
