//! Book catalog loading
//!
//! The catalog is the static `books.json` array under the content root. An
//! optional `lessons.json` overlay refines book and lesson display titles;
//! a missing or malformed overlay never fails the load.

use std::collections::HashMap;
use std::path::Path;

use hagwon_core::{Book, HagwonError, Lesson, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, info, warn};

/// Catalog file name under the content root
pub const BOOKS_FILE: &str = "books.json";

/// Title overlay file name under the content root
pub const LESSONS_OVERLAY_FILE: &str = "lessons.json";

/// The loaded book catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from already-loaded books
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Load the catalog from a content root directory
    ///
    /// Reads `books.json` and, when present, applies the `lessons.json`
    /// title overlay on top of it.
    pub async fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        let books_path = root.join(BOOKS_FILE);
        let raw = fs::read_to_string(&books_path).await.map_err(|e| {
            HagwonError::content(format!("failed to read {}: {e}", books_path.display()))
        })?;
        let mut books: Vec<Book> = serde_json::from_str(&raw)?;

        if let Some(overlay) = load_overlay(&root.join(LESSONS_OVERLAY_FILE)).await {
            apply_overlay(&mut books, &overlay);
        }

        info!("Loaded {} books from {}", books.len(), books_path.display());
        Ok(Self { books })
    }

    /// All books, in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True if the catalog has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by id
    pub fn book(&self, id: u32) -> Result<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or(HagwonError::BookNotFound(id))
    }

    /// Look up a lesson within a book
    pub fn lesson(&self, book_id: u32, lesson_id: u32) -> Result<&Lesson> {
        self.book(book_id)?
            .lesson(lesson_id)
            .ok_or(HagwonError::LessonNotFound {
                book: book_id,
                lesson: lesson_id,
            })
    }
}

/// Shape of `lessons.json`: book entries keyed by stringified book id
#[derive(Debug, Deserialize)]
struct TitleOverlay {
    #[serde(default)]
    books: HashMap<String, BookOverlay>,
}

#[derive(Debug, Deserialize)]
struct BookOverlay {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    lessons: Vec<LessonOverlay>,
}

#[derive(Debug, Deserialize)]
struct LessonOverlay {
    id: u32,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
}

/// Read the overlay file if it exists and parses
async fn load_overlay(path: &Path) -> Option<TitleOverlay> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No title overlay at {}", path.display());
            return None;
        }
        Err(e) => {
            warn!("Failed to read title overlay {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(overlay) => Some(overlay),
        Err(e) => {
            warn!("Ignoring malformed title overlay {}: {e}", path.display());
            None
        }
    }
}

/// Apply title/subtitle overrides onto the loaded books
fn apply_overlay(books: &mut [Book], overlay: &TitleOverlay) {
    for book in books.iter_mut() {
        let Some(entry) = overlay.books.get(&book.id.to_string()) else {
            continue;
        };

        if let Some(title) = &entry.title {
            book.title = title.clone();
        }
        if let Some(subtitle) = &entry.subtitle {
            book.subtitle = subtitle.clone();
        }

        for lesson_entry in &entry.lessons {
            let Some(lesson) = book.lessons.iter_mut().find(|l| l.id == lesson_entry.id) else {
                debug!(
                    "Overlay names lesson {} missing from book {}",
                    lesson_entry.id, book.id
                );
                continue;
            };
            if let Some(title) = &lesson_entry.title {
                lesson.title = title.clone();
            }
            if let Some(subtitle) = &lesson_entry.subtitle {
                lesson.subtitle = subtitle.clone();
            }
        }
    }
}
