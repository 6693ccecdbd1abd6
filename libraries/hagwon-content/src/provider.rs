//! Lesson content loading
//!
//! Every section of a lesson loads independently from its own JSON file. A
//! section that is absent, unreadable, or malformed yields its empty default
//! and a warning; the rest of the lesson still loads, and the viewer renders
//! whatever is present.

use std::path::{Path, PathBuf};

use hagwon_core::{LessonContent, LessonResources, SectionKind};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, warn};

/// Loads lesson section files from a static content root
#[derive(Debug, Clone)]
pub struct ContentProvider {
    root: PathBuf,
}

impl ContentProvider {
    /// Create a provider over a content root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root this provider reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a resource locator against the content root
    ///
    /// Catalog locators are site-absolute paths; a leading slash is
    /// tolerated and stripped.
    pub fn resolve(&self, locator: &str) -> PathBuf {
        self.root.join(locator.trim_start_matches('/'))
    }

    /// Load every section a lesson declares
    pub async fn load_lesson(&self, resources: &LessonResources) -> LessonContent {
        let dialogue = resources.dialogue.as_ref().map(|d| d.dialogue.as_str());

        LessonContent {
            dialogue: self.load_section(SectionKind::Dialogue, dialogue).await,
            grammar: self
                .load_section(SectionKind::Grammar, resources.grammar.as_deref())
                .await,
            vocabulary: self
                .load_section(SectionKind::Vocabulary, resources.vocabulary.as_deref())
                .await,
            listening: self
                .load_section(SectionKind::Listening, resources.listening.as_deref())
                .await,
            reading: self
                .load_section(SectionKind::Reading, resources.reading.as_deref())
                .await,
        }
    }

    /// Load one section, falling back to its empty default on any failure
    async fn load_section<T>(&self, kind: SectionKind, locator: Option<&str>) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(locator) = locator.filter(|l| !l.is_empty()) else {
            debug!("Lesson declares no {kind} section");
            return T::default();
        };

        let path = self.resolve(locator);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read {} section {}: {e}", kind, path.display());
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(section) => section,
            Err(e) => {
                warn!("Failed to parse {} section {}: {e}", kind, path.display());
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_tolerates_leading_slash() {
        let provider = ContentProvider::new("/content");

        assert_eq!(
            provider.resolve("resources/data/book1/lesson1/dialogue.json"),
            provider.resolve("/resources/data/book1/lesson1/dialogue.json"),
        );
        assert!(provider
            .resolve("/resources/data/books.json")
            .starts_with("/content"));
    }
}
