use async_trait::async_trait;

use crate::application::ContentRepository;
use crate::domain::{
    Achievement, ContentItem, ContentKind, DomainError, GrammarTopic, LeaderboardEntry, Lesson,
    Level, QuizQuestion, ReadingPassage, VocabularyEntry, QUIZ_WHIZ_ID,
};

/// The built-in demo content. Everything lives in memory and is rebuilt on
/// every start.
pub struct StaticContentRepository {
    vocabulary: Vec<VocabularyEntry>,
    lessons: Vec<Lesson>,
    grammar: Vec<GrammarTopic>,
    passages: Vec<ReadingPassage>,
    quiz: Vec<QuizQuestion>,
    leaderboard: Vec<LeaderboardEntry>,
    achievements: Vec<Achievement>,
}

impl StaticContentRepository {
    pub fn new() -> Self {
        Self {
            vocabulary: vec![
                VocabularyEntry::new(
                    "V1",
                    "Ambitious",
                    "Having a strong desire and determination to succeed.",
                    "She is ambitious about her career goals.",
                    "Adjective",
                ),
                VocabularyEntry::new(
                    "V2",
                    "Benevolent",
                    "Well-meaning and kindly.",
                    "His benevolent actions helped many people in need.",
                    "Adjective",
                ),
                VocabularyEntry::new(
                    "V3",
                    "Diligent",
                    "Having or showing care and conscientiousness in work.",
                    "The diligent student always completed assignments early.",
                    "Adjective",
                ),
            ],
            lessons: vec![
                Lesson::new(
                    "L1",
                    "Greetings & Intro",
                    Level::Beginner,
                    "10 min",
                    "Learn 'Hello', 'Goodbye', 'My name is...', 'How are you?'.",
                    "Basic greetings and self-introductions.",
                ),
                Lesson::new(
                    "L2",
                    "Simple Chat",
                    Level::Beginner,
                    "15 min",
                    "Ask/give personal info, talk likes/dislikes, order food.",
                    "Engaging in simple everyday conversations.",
                ),
                Lesson::new(
                    "L3",
                    "Present Simple",
                    Level::Beginner,
                    "15 min",
                    "For habits, routines, facts. E.g., 'I eat breakfast at 8 AM.'",
                    "Using the Present Simple tense.",
                ),
                Lesson::new(
                    "L4",
                    "Asking Questions",
                    Level::Intermediate,
                    "20 min",
                    "Form yes/no & wh-questions. Use 'do', 'is', 'are'.",
                    "Forming various types of questions.",
                ),
                Lesson::new(
                    "L5",
                    "Story Time (Past)",
                    Level::Intermediate,
                    "20 min",
                    "Use past simple for stories. Regular/irregular verbs.",
                    "Using the Past Simple tense for narration.",
                ),
            ],
            grammar: vec![
                GrammarTopic::new(
                    "G1",
                    "Nouns",
                    "Person, place, thing, idea.",
                    "E.g., cat, city. Types: common, proper.",
                ),
                GrammarTopic::new(
                    "G2",
                    "Verbs",
                    "Action or state.",
                    "E.g., run, is. Tenses: past, present, future.",
                ),
                GrammarTopic::new(
                    "G3",
                    "Adjectives",
                    "Describe nouns.",
                    "E.g., beautiful, tall. Comparative forms.",
                ),
            ],
            passages: vec![
                ReadingPassage::new(
                    "R1",
                    "My Day",
                    Level::Beginner,
                    "Alex wakes at 7 AM, has breakfast, then school. Loves learning!",
                ),
                ReadingPassage::new(
                    "R2",
                    "Zoo Trip",
                    Level::Intermediate,
                    "Sarah visited the zoo, saw lions, elephants, playful monkeys. Great day!",
                ),
            ],
            quiz: vec![
                QuizQuestion::new(
                    "Q1",
                    "Word for understanding written text?",
                    &["Write", "Speak", "Read", "Listen"],
                    "Read",
                ),
                QuizQuestion::new(
                    "Q2",
                    "Not a part of speech?",
                    &["Noun", "Adjective", "Conversation", "Verb"],
                    "Conversation",
                ),
                QuizQuestion::new(
                    "Q3",
                    "Past tense of \"go\"?",
                    &["Goed", "Gone", "Went", "Going"],
                    "Went",
                ),
            ],
            leaderboard: vec![
                LeaderboardEntry::new("U1", "LinguaLeo", 2580, "Leo"),
                LeaderboardEntry::new("U2", "PolyglotPriya", 2450, "Priya"),
                LeaderboardEntry::new("U3", "WordWizard 높은 뜻", 2300, "Wizard"),
                LeaderboardEntry::new("U4", "You", 1850, "You").current_user(),
                LeaderboardEntry::new("U5", "GrammarGus", 1700, "Gus"),
                LeaderboardEntry::new("U6", "FluentFiona", 1550, "Fiona"),
            ],
            achievements: vec![
                Achievement::new("A1", "First Steps", "Completed 1st lesson!").unlocked(),
                Achievement::new("A2", "Vocab Starter", "Learned 10 words.").unlocked(),
                Achievement::new(QUIZ_WHIZ_ID, "Quiz Whiz", "Aced a quiz!"),
                Achievement::new("A4", "Streak Keeper", "3-Day Streak!").unlocked(),
            ],
        }
    }

    fn items(&self, kind: ContentKind) -> Vec<ContentItem> {
        match kind {
            ContentKind::Vocabulary => self.vocabulary.iter().cloned().map(Into::into).collect(),
            ContentKind::Passage => self.passages.iter().cloned().map(Into::into).collect(),
            ContentKind::Grammar => self.grammar.iter().cloned().map(Into::into).collect(),
            ContentKind::Lesson => self.lessons.iter().cloned().map(Into::into).collect(),
        }
    }
}

impl Default for StaticContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for StaticContentRepository {
    async fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, DomainError> {
        Ok(self.items(kind))
    }

    async fn find(&self, kind: ContentKind, id: &str) -> Result<Option<ContentItem>, DomainError> {
        // Ids are matched case-insensitively so `v1` finds `V1`.
        Ok(self
            .items(kind)
            .into_iter()
            .find(|item| item.id().eq_ignore_ascii_case(id)))
    }

    async fn quiz_questions(&self) -> Result<Vec<QuizQuestion>, DomainError> {
        Ok(self.quiz.clone())
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DomainError> {
        Ok(self.leaderboard.clone())
    }

    async fn achievements(&self) -> Result<Vec<Achievement>, DomainError> {
        Ok(self.achievements.clone())
    }
}
