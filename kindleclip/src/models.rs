//! Clipping collection model
//!
//! A `ClipCollection` is built once per parsed source and replaced wholesale
//! on reload. Entries keep file order; the book index is derived up front so
//! the view can list books without rescanning.

use crate::interface::{ClipEntry, ParseFailure};
use crate::source::ClippingsParser;

/// Ordered clippings plus the sorted, duplicate-free set of their books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipCollection {
    entries: Vec<ClipEntry>,
    books: Vec<String>,
}

impl ClipCollection {
    /// Build a collection from already-parsed entries
    pub fn new(entries: Vec<ClipEntry>) -> Self {
        let mut books: Vec<String> = entries.iter().map(|e| e.book.clone()).collect();
        // Plain byte-wise ordering, no collation
        books.sort_unstable();
        books.dedup();
        Self { entries, books }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse `raw_text` with `parser`. Any failure is returned as-is so the
    /// caller can tell `InvalidStructure` apart from the rest.
    pub fn from_source(parser: &dyn ClippingsParser, raw_text: &str) -> Result<Self, ParseFailure> {
        parser.parse(raw_text).map(Self::new)
    }

    pub fn entries(&self) -> &[ClipEntry] {
        &self.entries
    }

    pub fn books(&self) -> &[String] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
