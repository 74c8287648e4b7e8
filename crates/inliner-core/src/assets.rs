//! The ordered asset table written into the generated module.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{InlineError, Result};

/// Key of the fixed entry every table starts with.
pub const PLACEHOLDER_KEY: &str = "1px";

/// A 1×1 transparent PNG. Identical on every run.
pub const PLACEHOLDER_DATA_URL: &str = concat!(
    "data:image/png;base64,",
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAA",
    "AAYAAjCB0C8AAAAASUVORK5CYII=",
);

/// Asset key to data URL, in insertion order.
///
/// The placeholder entry is always first and cannot be replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetTable {
    entries: IndexMap<String, String>,
}

impl AssetTable {
    /// Create a table holding only the placeholder entry.
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(PLACEHOLDER_KEY.to_string(), PLACEHOLDER_DATA_URL.to_string());
        Self { entries }
    }

    /// Insert or replace an entry.
    ///
    /// A key that is already present keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, data_url: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key == PLACEHOLDER_KEY {
            return Err(InlineError::ReservedKey(key));
        }
        self.entries.insert(key, data_url.into());
        Ok(())
    }

    /// Look up a data URL by key (e.g. "1px", "tex/daisy.webp").
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the placeholder is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::new()
    }
}
