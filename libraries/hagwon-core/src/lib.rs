//! Hagwon Core
//!
//! Shared domain types and error handling for the Hagwon e-textbook viewer.
//!
//! This crate provides the foundational building blocks used by the other
//! workspace libraries (playback, content loading, search, settings).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Catalog Types**: `Book`, `Lesson`, `LessonResources`
//! - **Content Types**: `LessonContent` and its five sections, `SectionKind`
//! - **Error Handling**: Unified `HagwonError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use hagwon_core::types::{BookLevel, SectionKind};
//!
//! // Book 3 is the first intermediate volume
//! assert_eq!(BookLevel::for_book_id(3), Some(BookLevel::Intermediate));
//!
//! // Section kinds carry their Chinese wire names
//! assert_eq!(SectionKind::Vocabulary.as_str(), "单词");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{HagwonError, Result};
pub use types::{
    // Catalog
    Book, BookLevel, DialogueResource, Lesson, LessonResources,
    // Lesson content
    DialogueSection, GrammarExample, GrammarPoint, GrammarSection, LessonContent,
    ListeningExercise, ListeningSection, Passage, ReadingSection, SectionKind, Sentence,
    VocabularySection, Word,
};
