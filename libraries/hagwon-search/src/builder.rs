//! Search index generation
//!
//! Walks a lessons tree (`book<N>/lesson<M>/<section>.json`, numerically
//! ordered) and produces the flat index the viewer consumes. Section files
//! that are missing are simply absent; files that cannot be read or parsed
//! are skipped with a warning.

use std::path::{Path, PathBuf};

use hagwon_core::{
    Book, DialogueSection, GrammarSection, ListeningSection, ReadingSection, Result, SectionKind,
    VocabularySection,
};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::entry::{SearchEntry, SearchIndex};

/// Build the search index from a lessons tree
///
/// `books` supplies display titles; a book directory with no catalog entry
/// still indexes, under a `Book<N>` fallback title.
pub async fn build_index(lessons_root: impl AsRef<Path>, books: &[Book]) -> Result<SearchIndex> {
    let lessons_root = lessons_root.as_ref();
    let mut entries = Vec::new();

    for (book_id, book_path) in numbered_dirs(lessons_root, "book").await? {
        let book_title = match books.iter().find(|b| b.id == book_id) {
            Some(book) => book.volume_title(),
            None => format!("Book{book_id}"),
        };

        for (lesson_id, lesson_path) in numbered_dirs(&book_path, "lesson").await? {
            let lesson_title = format!("第{lesson_id}课");
            let source = EntrySource {
                book_id,
                lesson_id,
                book_title: &book_title,
                lesson_title: &lesson_title,
            };
            collect_lesson(&lesson_path, &source, &mut entries).await;
        }
    }

    info!("Built search index: {} entries", entries.len());
    Ok(SearchIndex::new(entries))
}

/// Identity of the lesson an entry points back to
struct EntrySource<'a> {
    book_id: u32,
    lesson_id: u32,
    book_title: &'a str,
    lesson_title: &'a str,
}

impl EntrySource<'_> {
    fn entry(&self, kind: SectionKind, content: &str, preview: &str) -> SearchEntry {
        SearchEntry {
            kind,
            content: content.to_string(),
            preview: preview.to_string(),
            book_id: self.book_id,
            lesson_id: self.lesson_id,
            book_title: self.book_title.to_string(),
            lesson_title: self.lesson_title.to_string(),
        }
    }
}

/// Numbered child directories (`book1`, `lesson12`, ...) sorted by number
async fn numbered_dirs(root: &Path, prefix: &str) -> Result<Vec<(u32, PathBuf)>> {
    let mut found = Vec::new();

    let mut dir = fs::read_dir(root).await?;
    while let Some(child) = dir.next_entry().await? {
        if !child.file_type().await?.is_dir() {
            continue;
        }
        let name = child.file_name();
        let name = name.to_string_lossy();
        let Some(rest) = name.strip_prefix(prefix) else {
            continue;
        };
        let Ok(number) = rest.parse::<u32>() else {
            debug!("Skipping unnumbered directory {}", child.path().display());
            continue;
        };
        found.push((number, child.path()));
    }

    found.sort_by_key(|(number, _)| *number);
    Ok(found)
}

/// Index every section file present in one lesson directory
async fn collect_lesson(lesson_path: &Path, source: &EntrySource<'_>, entries: &mut Vec<SearchEntry>) {
    if let Some(dialogue) = read_section::<DialogueSection>(lesson_path, SectionKind::Dialogue).await
    {
        entries.extend(
            dialogue
                .sentences
                .iter()
                .map(|s| source.entry(SectionKind::Dialogue, &s.korean, &s.chinese)),
        );
    }

    if let Some(grammar) = read_section::<GrammarSection>(lesson_path, SectionKind::Grammar).await {
        entries.extend(
            grammar
                .points
                .iter()
                .map(|p| source.entry(SectionKind::Grammar, &p.title, &p.explanation)),
        );
    }

    if let Some(words) = read_section::<VocabularySection>(lesson_path, SectionKind::Vocabulary).await
    {
        entries.extend(
            words
                .words
                .iter()
                .map(|w| source.entry(SectionKind::Vocabulary, &w.korean, &w.chinese)),
        );
    }

    if let Some(listening) =
        read_section::<ListeningSection>(lesson_path, SectionKind::Listening).await
    {
        entries.extend(
            listening
                .exercises
                .iter()
                .map(|e| source.entry(SectionKind::Listening, &e.title, &e.script)),
        );
    }

    if let Some(reading) = read_section::<ReadingSection>(lesson_path, SectionKind::Reading).await {
        entries.extend(
            reading
                .passages
                .iter()
                .map(|p| source.entry(SectionKind::Reading, &p.title, &p.content)),
        );
    }
}

/// Read one section file; `None` when absent, unreadable, or malformed
async fn read_section<T: DeserializeOwned>(lesson_path: &Path, kind: SectionKind) -> Option<T> {
    let path = lesson_path.join(kind.file_name());

    let raw = match fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Skipping {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(section) => Some(section),
        Err(e) => {
            warn!("Skipping malformed {}: {e}", path.display());
            None
        }
    }
}
