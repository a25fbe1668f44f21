//! Session configuration
//!
//! Passed explicitly to `ClipSession::new`; nothing is read from process-wide
//! state. Can be loaded from a JSON file where every field is optional.

use crate::interface::{AboutInfo, KindleClipResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind toggles at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub show_notes: bool,
    pub show_highlights: bool,
    pub show_bookmarks: bool,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            show_notes: true,
            show_highlights: true,
            show_bookmarks: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub app_name: String,
    pub version: String,
    pub initial_filters: FilterDefaults,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            app_name: "KindleClip".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            initial_filters: FilterDefaults::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> KindleClipResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> KindleClipResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn about(&self) -> AboutInfo {
        AboutInfo {
            app_name: self.app_name.clone(),
            version: self.version.clone(),
        }
    }
}
