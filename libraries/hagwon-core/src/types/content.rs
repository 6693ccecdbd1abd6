/// Lesson section content types
///
/// These mirror the static JSON files under the content root
/// (`dialogue.json`, `grammar.json`, `words.json`, `listening.json`,
/// `reading.json`). Every section defaults to empty so a lesson with a
/// missing or unreadable section file still has a usable shape.
use serde::{Deserialize, Serialize};

/// The five lesson section kinds
///
/// Serialized as the Chinese section names; these appear verbatim in the
/// search index (`type` field) and as lesson resource keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// 课文: dialogue sentences
    #[serde(rename = "课文")]
    Dialogue,

    /// 语法: grammar points
    #[serde(rename = "语法")]
    Grammar,

    /// 单词: vocabulary words
    #[serde(rename = "单词")]
    Vocabulary,

    /// 听力: listening exercises
    #[serde(rename = "听力")]
    Listening,

    /// 阅读: reading passages
    #[serde(rename = "阅读")]
    Reading,
}

impl SectionKind {
    /// All section kinds, in tab order
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Dialogue,
        SectionKind::Grammar,
        SectionKind::Vocabulary,
        SectionKind::Listening,
        SectionKind::Reading,
    ];

    /// The Chinese section name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dialogue => "课文",
            Self::Grammar => "语法",
            Self::Vocabulary => "单词",
            Self::Listening => "听力",
            Self::Reading => "阅读",
        }
    }

    /// Conventional file name of this section inside a lesson directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Dialogue => "dialogue.json",
            Self::Grammar => "grammar.json",
            Self::Vocabulary => "words.json",
            Self::Listening => "listening.json",
            Self::Reading => "reading.json",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dialogue sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Speaker name
    #[serde(default)]
    pub speaker: String,

    /// Korean text
    pub korean: String,

    /// Chinese translation
    #[serde(default)]
    pub chinese: String,

    /// Per-sentence audio locator (may be empty)
    #[serde(default)]
    pub audio: String,
}

/// 课文 section content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueSection {
    /// Sentences in dialogue order
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

/// A Korean/Chinese example pair under a grammar point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarExample {
    /// Korean example
    pub korean: String,

    /// Chinese translation
    #[serde(default)]
    pub chinese: String,
}

/// One grammar point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarPoint {
    /// Point title (the pattern being taught)
    pub title: String,

    /// Explanation text
    #[serde(default)]
    pub explanation: String,

    /// Optional conjugation/usage table (pre-rendered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Usage examples
    #[serde(default)]
    pub examples: Vec<GrammarExample>,
}

/// 语法 section content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarSection {
    /// Grammar points in lesson order
    #[serde(default)]
    pub points: Vec<GrammarPoint>,
}

/// One vocabulary word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Korean word
    pub korean: String,

    /// Chinese translation
    #[serde(default)]
    pub chinese: String,

    /// Etymology / hanja origin (may be empty)
    #[serde(default)]
    pub etymology: String,

    /// Per-word audio locator (may be empty)
    #[serde(default)]
    pub audio: String,
}

/// 单词 section content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularySection {
    /// Words in lesson order
    #[serde(default)]
    pub words: Vec<Word>,
}

/// One listening exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListeningExercise {
    /// Exercise title
    pub title: String,

    /// Exercise transcript
    #[serde(default)]
    pub script: String,
}

/// 听力 section content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListeningSection {
    /// Exercises in lesson order
    #[serde(default)]
    pub exercises: Vec<ListeningExercise>,
}

/// One reading passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// Passage title (Korean)
    pub title: String,

    /// Translated passage title
    #[serde(default)]
    pub translated_title: String,

    /// Passage body (Korean)
    #[serde(default)]
    pub content: String,

    /// Passage translation
    #[serde(default)]
    pub translation: String,
}

/// 阅读 section content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingSection {
    /// Passages in lesson order
    #[serde(default)]
    pub passages: Vec<Passage>,
}

/// All loaded content of one lesson
///
/// Sections that failed to load (or do not exist for the lesson) are left at
/// their empty defaults; the viewer renders whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonContent {
    /// 课文
    #[serde(default)]
    pub dialogue: DialogueSection,

    /// 语法
    #[serde(default)]
    pub grammar: GrammarSection,

    /// 单词
    #[serde(default)]
    pub vocabulary: VocabularySection,

    /// 听力
    #[serde(default)]
    pub listening: ListeningSection,

    /// 阅读
    #[serde(default)]
    pub reading: ReadingSection,
}

impl LessonContent {
    /// True if no section has any content
    pub fn is_empty(&self) -> bool {
        SectionKind::ALL.iter().all(|kind| self.section_len(*kind) == 0)
    }

    /// Number of content units in one section
    pub fn section_len(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Dialogue => self.dialogue.sentences.len(),
            SectionKind::Grammar => self.grammar.points.len(),
            SectionKind::Vocabulary => self.vocabulary.words.len(),
            SectionKind::Listening => self.listening.exercises.len(),
            SectionKind::Reading => self.reading.passages.len(),
        }
    }
}
