//! Hagwon Content
//!
//! Catalog and lesson content loading for the Hagwon e-textbook viewer.
//!
//! The content root is a directory of static JSON written at authoring time:
//! `books.json` (the catalog), an optional `lessons.json` title overlay, and
//! one file per lesson section. This crate loads that tree tolerantly and
//! turns loaded lessons into playable item sequences for the controller.
//!
//! # Architecture
//!
//! - **Catalog**: `books.json` plus the optional title overlay, with book
//!   and lesson lookups.
//! - **ContentProvider**: per-section lesson loading; a broken section file
//!   degrades to that section being empty, never to a failed lesson.
//! - **playable_items**: extracts the ordered audio sequence of a lesson tab
//!   for the playback controller.
//!
//! # Example
//!
//! ```rust
//! use hagwon_content::playable_items;
//! use hagwon_core::{LessonContent, SectionKind, Sentence};
//!
//! let mut content = LessonContent::default();
//! content.dialogue.sentences.push(Sentence {
//!     speaker: "수지".to_string(),
//!     korean: "안녕하세요?".to_string(),
//!     chinese: "你好？".to_string(),
//!     audio: "resources/audio/book1/lesson1/s1.mp3".to_string(),
//! });
//!
//! let items = playable_items(&content, SectionKind::Dialogue);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].index, 0);
//!
//! // Text-only tabs have nothing to play
//! assert!(playable_items(&content, SectionKind::Grammar).is_empty());
//! ```

mod catalog;
mod playlist;
mod provider;

pub use catalog::{Catalog, BOOKS_FILE, LESSONS_OVERLAY_FILE};
pub use playlist::playable_items;
pub use provider::ContentProvider;
