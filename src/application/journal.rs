//! Journal read/write use cases
//!
//! Writes go to the cache tier first and then to the local tier, which is the
//! durable record. Reads try cache, then local, then settle on an explicit
//! "no entry" record; absence is never an error.

use crate::application::lookup::{first_hit, EntrySource};
use crate::domain::validation::{validate_date, validate_field};
use crate::domain::{Clock, JournalDraft, JournalEntry, JournalRecord};
use crate::error::{Result, ToolshedError};
use crate::infrastructure::{CacheStore, LocalStore};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Service orchestrating validation and both storage tiers
pub struct JournalService {
    cache: CacheStore,
    local: LocalStore,
    clock: Arc<dyn Clock>,
}

impl JournalService {
    pub fn new(cache: CacheStore, local: LocalStore, clock: Arc<dyn Clock>) -> Self {
        JournalService {
            cache,
            local,
            clock,
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    /// Today's date according to the service clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validate the draft and store it as today's entry, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// - `Validation` for the first invalid field (success, regret, highlight, frog)
    /// - `Persistence` if the local tier, or a reachable cache, rejects the write
    pub fn submit(&self, draft: &JournalDraft) -> Result<JournalEntry> {
        let [success, regret, highlight, frog] = draft.fields();

        let entry = JournalEntry {
            success: validate_field(success.1, success.0)?,
            regret: validate_field(regret.1, regret.0)?,
            highlight: validate_field(highlight.1, highlight.0)?,
            frog: validate_field(frog.1, frog.0)?,
            date: self.clock.today(),
            timestamp: self.clock.now(),
        };

        match self.cache.set_entry(&entry) {
            Ok(()) => {}
            Err(e) if e.is_unavailable() => {
                warn!(date = %entry.date, error = %e, "cache unreachable, writing local tier only");
            }
            Err(e) => {
                error!(date = %entry.date, error = %e, "cache rejected journal entry");
                return Err(ToolshedError::persistence(e));
            }
        }

        let path = self.local.save(&entry).map_err(|e| {
            error!(date = %entry.date, error = %e, "failed to write journal record");
            ToolshedError::persistence(e)
        })?;

        info!(date = %entry.date, path = %path.display(), "journal entry saved");
        Ok(entry)
    }

    /// Entry for a user-supplied date, or for yesterday when none is given
    pub fn fetch(&self, date: Option<&str>) -> Result<JournalRecord> {
        let today = self.clock.today();
        let date = match date {
            Some(input) => validate_date(input, today)?,
            None => today - Duration::days(1),
        };
        self.resolve(date)
    }

    /// Look `date` up in cache, then local storage, falling back to an empty record
    pub fn resolve(&self, date: NaiveDate) -> Result<JournalRecord> {
        let sources: [&dyn EntrySource; 2] = [&self.cache, &self.local];

        Ok(match first_hit(&sources, date)? {
            Some((entry, _tier)) => JournalRecord::found(entry),
            None => JournalRecord::missing(date),
        })
    }

    /// Dates with a durable record, newest first
    pub fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        self.local.list_dates()
    }
}
