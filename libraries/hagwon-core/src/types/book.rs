/// Book catalog domain types
use serde::{Deserialize, Serialize};

/// Difficulty level of a textbook volume
///
/// Serialized as the Chinese level names used throughout the content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookLevel {
    /// 初级 (volumes 1-2)
    #[serde(rename = "初级")]
    Beginner,

    /// 中级 (volumes 3-4)
    #[serde(rename = "中级")]
    Intermediate,

    /// 高级 (volumes 5-6)
    #[serde(rename = "高级")]
    Advanced,
}

impl BookLevel {
    /// Level for a book id, following the series layout (two volumes per level)
    pub fn for_book_id(id: u32) -> Option<Self> {
        match id {
            1 | 2 => Some(Self::Beginner),
            3 | 4 => Some(Self::Intermediate),
            5 | 6 => Some(Self::Advanced),
            _ => None,
        }
    }

    /// The Chinese level name as it appears in the content files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "初级",
            Self::Intermediate => "中级",
            Self::Advanced => "高级",
        }
    }
}

impl std::fmt::Display for BookLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One textbook volume in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Volume number (1-6)
    pub id: u32,

    /// Book title
    pub title: String,

    /// Book subtitle
    #[serde(default)]
    pub subtitle: String,

    /// Difficulty level
    pub level: BookLevel,

    /// Cover image locator (may be empty)
    #[serde(default)]
    pub cover: String,

    /// Accent color for the book card (may be empty)
    #[serde(default)]
    pub color: String,

    /// Lessons in this volume, in course order
    pub lessons: Vec<Lesson>,
}

impl Book {
    /// Canonical display title of the volume, e.g. `初级1` or `中级2`
    ///
    /// Each level spans two volumes; odd book ids are the first volume of
    /// their level, even ids the second.
    pub fn volume_title(&self) -> String {
        let n = if self.id % 2 == 1 { 1 } else { 2 };
        format!("{}{}", self.level, n)
    }

    /// Look up a lesson by id
    pub fn lesson(&self, lesson_id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }
}

/// One lesson within a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson number within its book
    pub id: u32,

    /// Lesson title
    pub title: String,

    /// Lesson subtitle
    #[serde(default)]
    pub subtitle: String,

    /// Section resource locators for this lesson
    #[serde(default)]
    pub resources: LessonResources,
}

impl Lesson {
    /// Canonical display title, e.g. `第3课`
    pub fn display_title(&self) -> String {
        format!("第{}课", self.id)
    }
}

/// Per-section resource locators of a lesson
///
/// The JSON keys are the Chinese section names used by the content files.
/// Every field is optional; an absent section simply has no content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonResources {
    /// 课文: dialogue resource (with optional translation/audio companions)
    #[serde(rename = "课文", default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<DialogueResource>,

    /// 语法: grammar section file
    #[serde(rename = "语法", default, skip_serializing_if = "Option::is_none")]
    pub grammar: Option<String>,

    /// 单词: vocabulary section file
    #[serde(rename = "单词", default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<String>,

    /// 听力: listening section file
    #[serde(rename = "听力", default, skip_serializing_if = "Option::is_none")]
    pub listening: Option<String>,

    /// 阅读: reading section file
    #[serde(rename = "阅读", default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

/// Locators for the dialogue section of a lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueResource {
    /// Dialogue content file
    pub dialogue: String,

    /// Optional standalone translation file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    /// Optional whole-dialogue audio file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}
