//! KindleClip Core - filtering and presentation of e-reader clippings
//!
//! Holds the clippings parsed from an e-reader export, derives the set of
//! books, narrows the visible set by book, kind and text, and projects each
//! visible clipping into a display row.
//!
//! # Architecture
//! - `interface`: Shared types (ClipEntry, DisplayRow, errors)
//! - `models`: ClipCollection with its sorted book index
//! - `filter`: FilterState and the filter engine
//! - `presentation`: Display rows, previews and the status line
//! - `source`: Parser port and the JSON interchange parser
//! - `session`: Event dispatch for a view layer

pub mod config;
pub mod filter;
pub mod interface;
pub mod models;
pub mod presentation;
pub mod session;
pub mod source;

pub use config::{FilterDefaults, SessionConfig};
pub use filter::{visible, FilterState};
pub use interface::*;
pub use models::ClipCollection;
pub use presentation::{project, summarize};
pub use session::{ClipSession, Reaction, UiEvent};
pub use source::{ClippingsParser, JsonClippingsParser};
