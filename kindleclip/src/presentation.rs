//! Presentation projection
//!
//! Maps visible clippings to display rows: a bounded one-line preview, the
//! timestamp as `YYYY-MM-DD HH:MM`, and the status line.

use crate::interface::{ClipEntry, DisplayRow};
use chrono::NaiveDateTime;

/// Texts longer than this many chars get truncated in the preview
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Chars of original text kept before the ellipsis marker
pub const PREVIEW_KEEP_CHARS: usize = PREVIEW_MAX_CHARS - 1;

/// Appended to truncated previews
pub const ELLIPSIS: &str = "(…)";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One-line preview of a clipping body.
///
/// Counts chars, not bytes. Every `\n` becomes a single space.
pub fn preview_text(text: &str) -> String {
    let preview = if text.chars().count() > PREVIEW_MAX_CHARS {
        let mut truncated: String = text.chars().take(PREVIEW_KEEP_CHARS).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    };
    preview.replace('\n', " ")
}

/// Timestamp as parsed, no timezone conversion
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn project(entry: &ClipEntry) -> DisplayRow {
    DisplayRow {
        kind: entry.kind,
        formatted_timestamp: format_timestamp(&entry.timestamp),
        book: entry.book.clone(),
        preview_text: preview_text(&entry.text),
        full_text: entry.text.clone(),
    }
}

/// Status line for the current visible set
pub fn summarize(visible: &[&ClipEntry]) -> String {
    format!("Showing {} clippings", visible.len())
}

/// Text for the details pane of a selected row
pub fn detail_text(row: &DisplayRow) -> String {
    format!(
        "Book: {}\n{}\n\n{}",
        row.book, row.formatted_timestamp, row.full_text
    )
}
