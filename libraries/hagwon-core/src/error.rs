/// Core error types for Hagwon
use thiserror::Error;

/// Result type alias using `HagwonError`
pub type Result<T> = std::result::Result<T, HagwonError>;

/// Core error type for Hagwon
#[derive(Error, Debug)]
pub enum HagwonError {
    /// Lesson content errors (malformed section files, bad shapes)
    #[error("Content error: {0}")]
    Content(String),

    /// Search index errors
    #[error("Index error: {0}")]
    Index(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Book not found in the catalog
    #[error("Book not found: {0}")]
    BookNotFound(u32),

    /// Lesson not found within a book
    #[error("Lesson {lesson} not found in book {book}")]
    LessonNotFound { book: u32, lesson: u32 },

    /// Invalid file path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl HagwonError {
    /// Create a content error
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Create an index error
    pub fn index(msg: impl Into<String>) -> Self {
        Self::Index(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
