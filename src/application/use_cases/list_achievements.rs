use std::sync::Arc;

use crate::application::ContentRepository;
use crate::domain::{Achievement, DomainError};

pub struct ListAchievementsUseCase {
    content_repo: Arc<dyn ContentRepository>,
}

impl ListAchievementsUseCase {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Achievement>, DomainError> {
        self.content_repo.achievements().await
    }
}
