//! Ordered lookup of journal entries across storage tiers

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::{CacheStore, LocalStore};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// A place a journal entry may be found
pub trait EntrySource {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means "not here, ask the next source"
    fn lookup(&self, date: NaiveDate) -> Result<Option<JournalEntry>>;
}

impl EntrySource for CacheStore {
    fn name(&self) -> &'static str {
        "cache"
    }

    /// Cache failures never fail a read: the tier is treated as empty
    fn lookup(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        match self.get_entry(date) {
            Ok(found) => Ok(found),
            Err(e) => {
                warn!(%date, error = %e, "cache lookup failed, falling through");
                Ok(None)
            }
        }
    }
}

impl EntrySource for LocalStore {
    fn name(&self) -> &'static str {
        "local"
    }

    fn lookup(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        self.load(date)
    }
}

/// Ask each source in order; the first hit wins
pub fn first_hit(
    sources: &[&dyn EntrySource],
    date: NaiveDate,
) -> Result<Option<(JournalEntry, &'static str)>> {
    for source in sources {
        if let Some(entry) = source.lookup(date)? {
            debug!(%date, tier = source.name(), "journal hit");
            return Ok(Some((entry, source.name())));
        }
        debug!(%date, tier = source.name(), "journal miss");
    }
    Ok(None)
}
