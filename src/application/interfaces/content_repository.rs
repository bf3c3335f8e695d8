use async_trait::async_trait;

use crate::domain::{
    Achievement, ContentItem, ContentKind, DomainError, LeaderboardEntry, QuizQuestion,
};

/// Read access to the study content of a session.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, DomainError>;

    async fn find(&self, kind: ContentKind, id: &str) -> Result<Option<ContentItem>, DomainError>;

    async fn quiz_questions(&self) -> Result<Vec<QuizQuestion>, DomainError>;

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DomainError>;

    /// The achievement catalog with each entry's starting unlock state.
    async fn achievements(&self) -> Result<Vec<Achievement>, DomainError>;
}
