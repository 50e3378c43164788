//! Calendar-grid export view
//!
//! Arranges a run of journal days into a Monday-first week grid. The first
//! row is padded with empty cells up to the weekday of the earliest day.

use crate::domain::entry::{JournalRecord, PLACEHOLDER_TEXT};
use chrono::{Datelike, NaiveDate, Weekday};

const SHORT_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LONG_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Short label for a weekday (Mon..Sun)
pub fn weekday_short(weekday: Weekday) -> &'static str {
    SHORT_LABELS[weekday.num_days_from_monday() as usize]
}

/// Long label for a weekday (Monday..Sunday)
pub fn weekday_long(weekday: Weekday) -> &'static str {
    LONG_LABELS[weekday.num_days_from_monday() as usize]
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub record: JournalRecord,
    /// Monday = 0
    pub weekday_index: u32,
    pub weekday_short: &'static str,
    pub weekday_long: &'static str,
    pub day_of_month: u32,
}

impl CalendarDay {
    fn new(record: JournalRecord) -> Self {
        let weekday = record.date.weekday();
        CalendarDay {
            weekday_index: weekday.num_days_from_monday(),
            weekday_short: weekday_short(weekday),
            weekday_long: weekday_long(weekday),
            day_of_month: record.date.day(),
            record,
        }
    }
}

/// Read-only projection of a date range for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarExportView {
    pub days: u32,
    pub generated_on: NaiveDate,
    /// Records in the order they were looked up (newest first)
    pub discovered: Vec<JournalRecord>,
    /// Grid cells, oldest first
    pub entries: Vec<CalendarDay>,
    /// Number of empty cells before the first day (Monday = 0)
    pub first_weekday: u32,
    pub filename: String,
}

impl CalendarExportView {
    /// Build the view from records in discovery order
    pub fn build(generated_on: NaiveDate, days: u32, discovered: Vec<JournalRecord>) -> Self {
        let mut sorted = discovered.clone();
        sorted.sort_by_key(|record| record.date);

        let entries: Vec<CalendarDay> = sorted.into_iter().map(CalendarDay::new).collect();
        let first_weekday = entries.first().map_or(0, |day| day.weekday_index);

        CalendarExportView {
            days,
            generated_on,
            discovered,
            entries,
            first_weekday,
            filename: export_filename(days, generated_on),
        }
    }

    /// Render a standalone HTML document suitable for download
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>Journal, last {} days ({})</title>\n",
            self.days, self.generated_on
        ));
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!(
            "<h1>Journal, last {} days</h1>\n<p class=\"generated\">Exported {}</p>\n",
            self.days, self.generated_on
        ));

        html.push_str("<div class=\"calendar\">\n");
        for label in SHORT_LABELS {
            html.push_str(&format!("<div class=\"weekday\">{}</div>\n", label));
        }
        for _ in 0..self.first_weekday {
            html.push_str("<div class=\"day blank\"></div>\n");
        }
        for day in &self.entries {
            html.push_str(&render_day(day));
        }
        html.push_str("</div>\n</body>\n</html>\n");

        html
    }
}

/// Suggested download name, e.g. `journal_export_7d_2025-01-17.html`
pub fn export_filename(days: u32, generated_on: NaiveDate) -> String {
    format!(
        "journal_export_{}d_{}.html",
        days,
        generated_on.format("%Y-%m-%d")
    )
}

fn render_day(day: &CalendarDay) -> String {
    let view = day.record.to_view();
    let class = if day.record.is_placeholder() {
        "day empty"
    } else {
        "day"
    };

    let mut cell = format!(
        "<div class=\"{}\" title=\"{} {}\">\n<div class=\"date\"><span class=\"num\">{}</span> <span class=\"dow\">{}</span></div>\n",
        class, day.weekday_long, day.record.date, day.day_of_month, day.weekday_short
    );
    for (label, value) in [
        ("Success", &view.success),
        ("Regret", &view.regret),
        ("Highlight", &view.highlight),
        ("Frog", &view.frog),
    ] {
        let muted = if day.record.is_placeholder() && value == PLACEHOLDER_TEXT {
            " muted"
        } else {
            ""
        };
        cell.push_str(&format!(
            "<div class=\"field{}\"><b>{}</b> {}</div>\n",
            muted,
            label,
            escape_html(value)
        ));
    }
    cell.push_str("</div>\n");
    cell
}

/// Escape text for inclusion in HTML element content and attributes
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("<br>"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = "<style>
body { font-family: sans-serif; margin: 2rem; }
.calendar { display: grid; grid-template-columns: repeat(7, 1fr); gap: 6px; }
.weekday { font-weight: bold; text-align: center; }
.day { border: 1px solid #ccc; border-radius: 4px; padding: 6px; min-height: 6rem; font-size: 0.85rem; }
.day.blank { border: none; }
.day.empty { background: #f6f6f6; }
.num { font-size: 1.2rem; font-weight: bold; }
.field { margin-top: 4px; }
.muted { color: #999; }
.generated { color: #666; }
</style>
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::JournalEntry;
    use chrono::DateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored(day: NaiveDate, text: &str) -> JournalRecord {
        JournalRecord::found(JournalEntry {
            date: day,
            timestamp: DateTime::parse_from_rfc3339("2025-01-17T20:00:00+00:00").unwrap(),
            success: text.to_string(),
            regret: text.to_string(),
            highlight: text.to_string(),
            frog: text.to_string(),
        })
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_short(Weekday::Mon), "Mon");
        assert_eq!(weekday_long(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_build_sorts_ascending() {
        // Friday 17th back to Wednesday 15th
        let discovered = vec![
            stored(date(2025, 1, 17), "fri"),
            JournalRecord::missing(date(2025, 1, 16)),
            stored(date(2025, 1, 15), "wed"),
        ];
        let view = CalendarExportView::build(date(2025, 1, 17), 3, discovered.clone());

        assert_eq!(view.discovered, discovered);
        let dates: Vec<NaiveDate> = view.entries.iter().map(|d| d.record.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 15), date(2025, 1, 16), date(2025, 1, 17)]
        );
        assert_eq!(view.first_weekday, 2);
        assert_eq!(view.entries[0].weekday_short, "Wed");
        assert_eq!(view.entries[2].day_of_month, 17);
        assert!(view.entries[1].record.is_placeholder());
    }

    #[test]
    fn test_filename_embeds_days_and_date() {
        assert_eq!(
            export_filename(30, date(2025, 3, 9)),
            "journal_export_30d_2025-03-09.html"
        );
    }

    #[test]
    fn test_html_has_leading_blanks() {
        let view = CalendarExportView::build(
            date(2025, 1, 17),
            1,
            vec![stored(date(2025, 1, 17), "done")],
        );
        let html = view.to_html();

        // Friday: four blank cells precede it
        assert_eq!(view.first_weekday, 4);
        assert_eq!(html.matches("day blank").count(), 4);
        assert!(html.contains("<span class=\"num\">17</span>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let view = CalendarExportView::build(
            date(2025, 1, 17),
            1,
            vec![stored(date(2025, 1, 17), "<script>alert('x')</script>\nnext")],
        );
        let html = view.to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;<br>next"));
    }

    #[test]
    fn test_html_marks_placeholder_days() {
        let view = CalendarExportView::build(
            date(2025, 1, 13),
            1,
            vec![JournalRecord::missing(date(2025, 1, 13))],
        );
        let html = view.to_html();

        assert_eq!(view.first_weekday, 0);
        assert!(html.contains("class=\"day empty\""));
        assert_eq!(html.matches("field muted").count(), 4);
        assert!(html.contains("<b>Frog</b> None"));
    }
}
