use std::sync::Arc;

use crate::application::ContentRepository;
use crate::domain::{ContentItem, ContentKind, DomainError};

pub struct BrowseContentUseCase {
    content_repo: Arc<dyn ContentRepository>,
}

impl BrowseContentUseCase {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    pub async fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, DomainError> {
        self.content_repo.list(kind).await
    }

    pub async fn list_all(&self) -> Result<Vec<ContentItem>, DomainError> {
        let mut items = Vec::new();
        for kind in ContentKind::ALL {
            items.extend(self.content_repo.list(kind).await?);
        }
        Ok(items)
    }

    pub async fn get(&self, kind: ContentKind, id: &str) -> Result<ContentItem, DomainError> {
        self.content_repo
            .find(kind, id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("{kind} '{id}'")))
    }
}
