pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AssistRegistry, BrowseContentUseCase, ContentRepository, FailedAssist, GenerativeClient,
    LessonProgressUseCase, ListAchievementsUseCase, QuizOutcome, RankLeaderboardUseCase,
    RequestAssistUseCase, RunSessionUseCase, ScoreQuizUseCase, SessionReport,
};

pub use cli::{Commands, OutputFormat};

pub use connector::{GeminiClient, MockGenerativeClient, StaticContentRepository};

pub use domain::{
    Achievement, AssistError, AssistEvent, AssistOutput, AssistState, AssistTrigger, ContentItem, ContentKind,
    DomainError, Feature, GrammarTopic, InFlightMarker, LeaderboardEntry, Lesson, LessonProgress,
    Level, QuizQuestion, QuizScore, RankedEntry, ReadingPassage, VocabularyEntry,
};
