//! KindleClip Interface Definition
//!
//! Shared types handed between the core and its collaborators: the parsed
//! clipping record, the display row the view renders, and the error types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Category of a clipping, as defined by the parsing collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipKind {
    Highlight,
    Note,
    Bookmark,
}

impl ClipKind {
    pub const ALL: [ClipKind; 3] = [ClipKind::Highlight, ClipKind::Note, ClipKind::Bookmark];

    /// Label shown in the "Type" column
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipKind::Highlight => "Highlight",
            ClipKind::Note => "Note",
            ClipKind::Bookmark => "Bookmark",
        }
    }
}

impl fmt::Display for ClipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// One parsed clipping record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipEntry {
    pub kind: ClipKind,
    /// Title/author string exactly as the export gives it
    pub book: String,
    /// Minute precision, no timezone attached
    pub timestamp: NaiveDateTime,
    /// Full clipping body, usually empty for bookmarks
    pub text: String,
}

impl ClipEntry {
    pub fn new(
        kind: ClipKind,
        book: impl Into<String>,
        timestamp: NaiveDateTime,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            book: book.into(),
            timestamp,
            text: text.into(),
        }
    }
}

/// Display-ready projection of a visible clipping.
///
/// Recomputed on every filter change; the view owns whatever row storage it
/// builds from these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub kind: ClipKind,
    /// `YYYY-MM-DD HH:MM`
    pub formatted_timestamp: String,
    pub book: String,
    /// At most 100 chars of body text, newlines flattened to spaces
    pub preview_text: String,
    pub full_text: String,
}

/// Everything the view repaints after a filter or source change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Listing {
    /// Distinct books of the loaded collection, sorted
    pub books: Vec<String>,
    pub rows: Vec<DisplayRow>,
    /// Status line, e.g. "Showing 3 clippings"
    pub status: String,
}

/// Result of (re)loading a clippings source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { entries: usize, books: usize },
    /// The parser rejected the source structure; an empty collection was
    /// substituted. The view should notify the user.
    Recovered { reason: String },
}

/// Contents of the about box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutInfo {
    pub app_name: String,
    pub version: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Failure reported by a `ClippingsParser`
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Source text does not follow the expected structure. Recoverable.
    #[error("Invalid clippings structure: {0}")]
    InvalidStructure(String),
    /// Any other parser failure. Not recovered by the core.
    #[error("Parser failure: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for KindleClip operations
#[derive(Debug, Error)]
pub enum KindleClipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parser error: {0}")]
    Parser(Box<dyn std::error::Error + Send + Sync>),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for KindleClipError {
    fn from(e: serde_json::Error) -> Self {
        KindleClipError::Config(e.to_string())
    }
}

pub type KindleClipResult<T> = Result<T, KindleClipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        let labels: Vec<&str> = ClipKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(labels, vec!["Highlight", "Note", "Bookmark"]);
        assert_eq!(ClipKind::Note.to_string(), "Note");
    }

    #[test]
    fn test_invalid_structure_message() {
        let err = ParseFailure::InvalidStructure("missing separator".into());
        assert_eq!(err.to_string(), "Invalid clippings structure: missing separator");
    }
}
