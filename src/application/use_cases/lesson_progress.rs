use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::application::ContentRepository;
use crate::domain::{ContentKind, DomainError, LessonProgress};

pub struct LessonProgressUseCase {
    content_repo: Arc<dyn ContentRepository>,
}

impl LessonProgressUseCase {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    /// Seed progress for every lesson, then complete one part of each lesson
    /// in `completed_parts`, in order. A fixed `seed` reproduces the same
    /// numbers; `None` draws from entropy like a fresh session would.
    pub async fn execute(
        &self,
        seed: Option<u64>,
        completed_parts: &[String],
    ) -> Result<LessonProgress, DomainError> {
        let lessons = self.content_repo.list(ContentKind::Lesson).await?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut progress = LessonProgress::seed(lessons.iter().map(|l| l.id()), &mut rng);

        for id in completed_parts {
            let lesson = self
                .content_repo
                .find(ContentKind::Lesson, id)
                .await?
                .ok_or_else(|| DomainError::not_found(format!("lesson '{id}'")))?;
            let percent = progress.advance(lesson.id());
            debug!("Lesson {} advanced to {percent}%", lesson.id());
        }

        Ok(progress)
    }
}
