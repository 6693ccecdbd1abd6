mod book;
mod content;

pub use book::{Book, BookLevel, DialogueResource, Lesson, LessonResources};
pub use content::{
    DialogueSection, GrammarExample, GrammarPoint, GrammarSection, LessonContent,
    ListeningExercise, ListeningSection, Passage, ReadingSection, SectionKind, Sentence,
    VocabularySection, Word,
};
