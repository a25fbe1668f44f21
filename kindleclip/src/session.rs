//! ClipSession - the core side of the view binding
//!
//! Owns the loaded collection and the filter state for one session. The view
//! forwards each discrete UI event to `handle`, which mutates state and
//! returns what has to be repainted. Every repaint is a full recomputation:
//! filter, project, summarize.
//!
//! All calls run on the caller's thread; nothing here is shared.

use crate::config::SessionConfig;
use crate::filter::{self, FilterState};
use crate::interface::{
    AboutInfo, ClipKind, KindleClipError, KindleClipResult, Listing, LoadOutcome, ParseFailure,
};
use crate::models::ClipCollection;
use crate::presentation;
use crate::source::{self, ClippingsParser};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Discrete events the view can send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SetKindShown { kind: ClipKind, shown: bool },
    /// `None` when the book list selection is cleared
    SelectBook(Option<String>),
    /// Contents of the text filter entry; blank clears the filter
    SubmitTextQuery(String),
    ClearTextQuery,
    Revert,
    /// Raw clippings text to parse and replace the collection with
    ReloadSource(String),
    LoadPath(PathBuf),
    /// Cursor moved in the clippings list (index into the visible rows)
    SelectRow(Option<usize>),
    ShowAbout,
    Quit,
}

/// What the view has to do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Repaint(Listing),
    /// Source was rejected and replaced by an empty collection
    FormatError { reason: String, listing: Listing },
    /// Text for the details pane
    Detail(String),
    About(AboutInfo),
    Quit,
}

pub struct ClipSession {
    config: SessionConfig,
    parser: Box<dyn ClippingsParser>,
    collection: ClipCollection,
    filters: FilterState,
}

impl ClipSession {
    /// New session with an empty collection and the configured initial toggles
    pub fn new(config: SessionConfig, parser: Box<dyn ClippingsParser>) -> Self {
        let filters = FilterState::new(&config.initial_filters);
        Self {
            config,
            parser,
            collection: ClipCollection::empty(),
            filters,
        }
    }

    pub fn collection(&self) -> &ClipCollection {
        &self.collection
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parse `raw_text` and replace the collection.
    ///
    /// `InvalidStructure` is recovered with an empty collection. Other parser
    /// failures are returned and leave the current collection in place.
    pub fn load_text(&mut self, raw_text: &str) -> KindleClipResult<LoadOutcome> {
        match ClipCollection::from_source(self.parser.as_ref(), raw_text) {
            Ok(collection) => {
                let outcome = LoadOutcome::Loaded {
                    entries: collection.len(),
                    books: collection.books().len(),
                };
                info!(entries = collection.len(), books = collection.books().len(), "loaded clippings");
                self.collection = collection;
                Ok(outcome)
            }
            Err(ParseFailure::InvalidStructure(reason)) => {
                warn!(%reason, "clippings source rejected, continuing with empty collection");
                self.collection = ClipCollection::empty();
                Ok(LoadOutcome::Recovered { reason })
            }
            Err(ParseFailure::Other(e)) => Err(KindleClipError::Parser(e)),
        }
    }

    pub fn load_path(&mut self, path: &std::path::Path) -> KindleClipResult<LoadOutcome> {
        let raw_text = source::read_source(path)?;
        debug!(path = %path.display(), bytes = raw_text.len(), "read clippings source");
        self.load_text(&raw_text)
    }

    /// Recompute the full listing for the current collection and filters
    pub fn listing(&self) -> Listing {
        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        let shown = filter::visible(&self.collection, &self.filters);
        let rows = shown.iter().map(|e| presentation::project(e)).collect();
        let status = presentation::summarize(&shown);

        #[cfg(feature = "perf-log")]
        debug!(elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0, "listing timing");

        debug!(entries = self.collection.len(), visible = shown.len(), "refreshed listing");
        Listing {
            books: self.collection.books().to_vec(),
            rows,
            status,
        }
    }

    /// Details pane text for a visible row; empty when nothing is selected
    pub fn detail(&self, row: Option<usize>) -> String {
        row.and_then(|i| filter::visible(&self.collection, &self.filters).get(i).copied())
            .map(|entry| presentation::detail_text(&presentation::project(entry)))
            .unwrap_or_default()
    }

    /// Dispatch one UI event
    pub fn handle(&mut self, event: UiEvent) -> KindleClipResult<Reaction> {
        debug!(?event, "ui event");
        match event {
            UiEvent::SetKindShown { kind, shown } => {
                self.filters.set_kind_shown(kind, shown);
                Ok(self.repaint())
            }
            UiEvent::SelectBook(book) => {
                self.filters.select_book(book);
                Ok(self.repaint())
            }
            UiEvent::SubmitTextQuery(query) => {
                self.filters.set_text_query(Some(&query));
                Ok(self.repaint())
            }
            UiEvent::ClearTextQuery => {
                self.filters.set_text_query(None);
                Ok(self.repaint())
            }
            UiEvent::Revert => {
                self.filters.revert();
                Ok(self.repaint())
            }
            UiEvent::ReloadSource(raw_text) => {
                let outcome = self.load_text(&raw_text)?;
                Ok(self.after_load(outcome))
            }
            UiEvent::LoadPath(path) => {
                let outcome = self.load_path(&path)?;
                Ok(self.after_load(outcome))
            }
            UiEvent::SelectRow(row) => Ok(Reaction::Detail(self.detail(row))),
            UiEvent::ShowAbout => Ok(Reaction::About(self.config.about())),
            UiEvent::Quit => Ok(Reaction::Quit),
        }
    }

    fn repaint(&self) -> Reaction {
        Reaction::Repaint(self.listing())
    }

    fn after_load(&self, outcome: LoadOutcome) -> Reaction {
        match outcome {
            LoadOutcome::Loaded { .. } => self.repaint(),
            LoadOutcome::Recovered { reason } => Reaction::FormatError {
                reason,
                listing: self.listing(),
            },
        }
    }
}
