//! Clippings source parsing port
//!
//! The core never reads the e-reader export grammar itself. A
//! `ClippingsParser` turns a raw text blob into entries; `JsonClippingsParser`
//! accepts clippings that were already extracted into a JSON array.

use crate::interface::{ClipEntry, ClipKind, KindleClipResult, ParseFailure};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Parsing collaborator. Kinds come from here; the core never invents them.
pub trait ClippingsParser {
    fn parse(&self, raw_text: &str) -> Result<Vec<ClipEntry>, ParseFailure>;
}

/// Read a clippings source as one text blob
pub fn read_source(path: &Path) -> KindleClipResult<String> {
    Ok(std::fs::read_to_string(path)?)
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON INTERCHANGE
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a timestamp, with or without seconds
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
struct JsonClipping {
    kind: ClipKind,
    book: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    timestamp: NaiveDateTime,
    #[serde(default)]
    text: String,
}

impl From<JsonClipping> for ClipEntry {
    fn from(c: JsonClipping) -> Self {
        ClipEntry::new(c.kind, c.book, c.timestamp, c.text)
    }
}

/// Reads `[{"kind": "Highlight", "book": "...", "timestamp": "2011-05-03 10:21", "text": "..."}, ...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonClippingsParser;

impl ClippingsParser for JsonClippingsParser {
    fn parse(&self, raw_text: &str) -> Result<Vec<ClipEntry>, ParseFailure> {
        if raw_text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let clippings: Vec<JsonClipping> = serde_json::from_str(raw_text)
            .map_err(|e| ParseFailure::InvalidStructure(e.to_string()))?;
        Ok(clippings.into_iter().map(ClipEntry::from).collect())
    }
}
