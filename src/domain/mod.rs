//! Domain layer - Journal model, validation rules and export view

pub mod calendar;
pub mod clock;
pub mod entry;
pub mod validation;

pub use calendar::{CalendarDay, CalendarExportView};
pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{EntryView, JournalDraft, JournalEntry, JournalRecord, PLACEHOLDER_TEXT};
