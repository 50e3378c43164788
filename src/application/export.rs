//! Calendar export use case

use crate::application::journal::JournalService;
use crate::domain::validation::validate_period;
use crate::domain::CalendarExportView;
use crate::error::Result;
use chrono::Duration;
use tracing::info;

/// Builds calendar views over the most recent days
pub struct ExportService<'a> {
    journal: &'a JournalService,
}

impl<'a> ExportService<'a> {
    pub fn new(journal: &'a JournalService) -> Self {
        ExportService { journal }
    }

    /// Parse a user-supplied period and render it
    pub fn render_period(&self, period: &str) -> Result<CalendarExportView> {
        let days = validate_period(period)?;
        self.render(days)
    }

    /// Resolve today and the `days - 1` days before it into a calendar view.
    ///
    /// `days` must already be validated (1..=365).
    pub fn render(&self, days: u32) -> Result<CalendarExportView> {
        let today = self.journal.today();

        let mut discovered = Vec::with_capacity(days as usize);
        for offset in 0..days {
            let date = today - Duration::days(i64::from(offset));
            discovered.push(self.journal.resolve(date)?);
        }

        let view = CalendarExportView::build(today, days, discovered);
        info!(
            days,
            stored = view.entries.iter().filter(|d| !d.record.is_placeholder()).count(),
            "journal export rendered"
        );
        Ok(view)
    }
}
