use std::sync::Arc;

use crate::application::ContentRepository;
use crate::domain::{rank_entries, DomainError, RankedEntry};

pub struct RankLeaderboardUseCase {
    content_repo: Arc<dyn ContentRepository>,
}

impl RankLeaderboardUseCase {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    pub async fn execute(&self) -> Result<Vec<RankedEntry>, DomainError> {
        let entries = self.content_repo.leaderboard().await?;
        Ok(rank_entries(entries))
    }
}
