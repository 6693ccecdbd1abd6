//! Search index wire types
//!
//! `search_index.json` is a flat array of entries generated ahead of time;
//! its shape is a published contract with the viewer, so the field names
//! here follow the file, not Rust convention.

use std::path::Path;

use hagwon_core::{HagwonError, Result, SectionKind};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

/// One searchable unit from the pre-generated index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    /// Section this entry came from
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Primary searchable text (the Korean side, or a title)
    pub content: String,

    /// Secondary text shown under a hit (translation, explanation, script)
    pub preview: String,

    /// Source book id
    pub book_id: u32,

    /// Source lesson id
    pub lesson_id: u32,

    /// Display title of the source book, e.g. `初级1`
    pub book_title: String,

    /// Display title of the source lesson, e.g. `第3课`
    pub lesson_title: String,
}

/// The loaded search index: entries in generation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    /// Index entries, flat
    pub entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Wrap already-built entries
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the index from its JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            HagwonError::index(format!("failed to read {}: {e}", path.display()))
        })?;
        let index: SearchIndex = serde_json::from_str(&raw)?;

        info!("Loaded search index: {} entries", index.len());
        Ok(index)
    }

    /// Write the index as pretty JSON, creating parent directories
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, raw).await?;

        info!("Wrote search index: {} entries to {}", self.len(), path.display());
        Ok(())
    }
}
