//! Filter state and filter engine
//!
//! The engine is a pure function of (collection, state). It keeps the
//! collection's order and evaluates three predicates as a conjunction:
//! book (exact match), kind (per-kind toggle) and text (literal substring).

use crate::config::FilterDefaults;
use crate::interface::{ClipEntry, ClipKind};
use crate::models::ClipCollection;

// ─────────────────────────────────────────────────────────────────────────────
// FILTER STATE
// ─────────────────────────────────────────────────────────────────────────────

/// Current filter configuration of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    show_notes: bool,
    show_bookmarks: bool,
    show_highlights: bool,
    selected_book: Option<String>,
    text_query: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(&FilterDefaults::default())
    }
}

impl FilterState {
    pub fn new(defaults: &FilterDefaults) -> Self {
        Self {
            show_notes: defaults.show_notes,
            show_bookmarks: defaults.show_bookmarks,
            show_highlights: defaults.show_highlights,
            selected_book: None,
            text_query: None,
        }
    }

    /// Every kind shown, no book, no text
    pub fn show_all() -> Self {
        Self {
            show_notes: true,
            show_bookmarks: true,
            show_highlights: true,
            selected_book: None,
            text_query: None,
        }
    }

    pub fn is_kind_shown(&self, kind: ClipKind) -> bool {
        match kind {
            ClipKind::Highlight => self.show_highlights,
            ClipKind::Note => self.show_notes,
            ClipKind::Bookmark => self.show_bookmarks,
        }
    }

    pub fn set_kind_shown(&mut self, kind: ClipKind, shown: bool) {
        match kind {
            ClipKind::Highlight => self.show_highlights = shown,
            ClipKind::Note => self.show_notes = shown,
            ClipKind::Bookmark => self.show_bookmarks = shown,
        }
    }

    pub fn selected_book(&self) -> Option<&str> {
        self.selected_book.as_deref()
    }

    /// `None` clears the selection (all books)
    pub fn select_book(&mut self, book: Option<String>) {
        self.selected_book = book;
    }

    /// The active text query. Blank queries are never stored.
    pub fn text_query(&self) -> Option<&str> {
        self.text_query.as_deref()
    }

    /// Set the text filter. Empty or whitespace-only input clears it;
    /// anything else is kept verbatim and matched literally.
    pub fn set_text_query(&mut self, query: Option<&str>) {
        self.text_query = query
            .filter(|q| !q.trim().is_empty())
            .map(str::to_string);
    }

    /// Reset kind toggles and book selection. The text query is left as is.
    pub fn revert(&mut self) {
        self.show_bookmarks = false;
        self.show_highlights = true;
        self.show_notes = true;
        self.selected_book = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FILTER ENGINE
// ─────────────────────────────────────────────────────────────────────────────

fn book_matches(entry: &ClipEntry, state: &FilterState) -> bool {
    match state.selected_book() {
        Some(book) => entry.book == book,
        None => true,
    }
}

fn kind_matches(entry: &ClipEntry, state: &FilterState) -> bool {
    state.is_kind_shown(entry.kind)
}

fn text_matches(entry: &ClipEntry, state: &FilterState) -> bool {
    match state.text_query() {
        Some(query) => entry.text.contains(query),
        None => true,
    }
}

/// Whether `entry` passes every active filter
pub fn accepts(entry: &ClipEntry, state: &FilterState) -> bool {
    // Cheapest first; the substring scan goes last
    kind_matches(entry, state) && book_matches(entry, state) && text_matches(entry, state)
}

/// Filter an arbitrary sequence of entries, keeping their relative order
pub fn filter_entries<'a, I>(entries: I, state: &FilterState) -> Vec<&'a ClipEntry>
where
    I: IntoIterator<Item = &'a ClipEntry>,
{
    entries.into_iter().filter(|e| accepts(e, state)).collect()
}

/// Visible subset of `collection` under `state`, in collection order
pub fn visible<'a>(collection: &'a ClipCollection, state: &FilterState) -> Vec<&'a ClipEntry> {
    filter_entries(collection.entries(), state)
}
