use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::application::ContentRepository;
use crate::domain::{award_for_quiz, Achievement, DomainError, QuizQuestion, QuizScore};

/// A graded quiz and whatever it unlocked.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub questions: Vec<QuizQuestion>,
    pub score: QuizScore,
    pub unlocked: Vec<Achievement>,
}

pub struct ScoreQuizUseCase {
    content_repo: Arc<dyn ContentRepository>,
}

impl ScoreQuizUseCase {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }

    pub async fn questions(&self) -> Result<Vec<QuizQuestion>, DomainError> {
        self.content_repo.quiz_questions().await
    }

    /// Grade `answers` (question id -> chosen option). Answers for question
    /// ids that do not exist are rejected. A perfect score unlocks Quiz Whiz.
    pub async fn execute(
        &self,
        answers: &HashMap<String, String>,
    ) -> Result<QuizOutcome, DomainError> {
        let questions = self.content_repo.quiz_questions().await?;

        if let Some(unknown) = answers
            .keys()
            .find(|id| !questions.iter().any(|q| q.id() == id.as_str()))
        {
            return Err(DomainError::invalid_input(format!(
                "unknown quiz question '{unknown}'"
            )));
        }

        let score = QuizScore::grade(&questions, answers);
        debug!("Quiz graded: {score}");

        let mut achievements = self.content_repo.achievements().await?;
        let unlocked = award_for_quiz(&mut achievements, score);
        for a in &unlocked {
            info!("Achievement unlocked: {} ({})", a.name(), a.id());
        }

        Ok(QuizOutcome {
            questions,
            score,
            unlocked,
        })
    }
}
