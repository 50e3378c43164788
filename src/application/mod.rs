//! Application layer - Use cases and orchestration

pub mod clipboard;
pub mod export;
pub mod health;
pub mod journal;
pub mod lookup;

pub use clipboard::ClipboardService;
pub use export::ExportService;
pub use health::{probe_cache, CacheStatus};
pub use journal::JournalService;
pub use lookup::EntrySource;
