//! Hagwon Search
//!
//! Search index building and querying for the Hagwon e-textbook viewer.
//!
//! The index is a flat JSON array generated from the lessons tree ahead of
//! time (`search_index.json`); at runtime the engine answers substring
//! queries over it with a small per-query cache. There is no tokenization
//! or ranking; hits are returned in index order, which follows book and
//! lesson order.
//!
//! # Example
//!
//! ```rust
//! use hagwon_core::SectionKind;
//! use hagwon_search::{SearchEngine, SearchEntry, SearchIndex};
//!
//! let index = SearchIndex::new(vec![SearchEntry {
//!     kind: SectionKind::Vocabulary,
//!     content: "학교".to_string(),
//!     preview: "学校".to_string(),
//!     book_id: 1,
//!     lesson_id: 1,
//!     book_title: "初级1".to_string(),
//!     lesson_title: "第1课".to_string(),
//! }]);
//!
//! let engine = SearchEngine::new(index);
//! assert_eq!(engine.search("학교").len(), 1);
//! assert!(engine.search("").is_empty());
//! ```

mod builder;
mod engine;
mod entry;

pub use builder::build_index;
pub use engine::{SearchEngine, DEFAULT_CACHE_SIZE};
pub use entry::{SearchEntry, SearchIndex};
