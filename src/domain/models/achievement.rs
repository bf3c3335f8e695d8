use serde::{Deserialize, Serialize};

use super::QuizScore;

/// Id of the achievement awarded for a perfect quiz.
pub const QUIZ_WHIZ_ID: &str = "A3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    id: String,
    name: String,
    description: String,
    unlocked: bool,
}

impl Achievement {
    /// A locked achievement.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            unlocked: false,
        }
    }

    pub fn unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Unlock in place. Returns `true` only when this call changed it.
    pub fn unlock(&mut self) -> bool {
        !std::mem::replace(&mut self.unlocked, true)
    }
}

/// Apply the quiz-related awards for `score`. Returns the achievements that
/// were newly unlocked.
pub fn award_for_quiz(achievements: &mut [Achievement], score: QuizScore) -> Vec<Achievement> {
    if !score.is_perfect() {
        return Vec::new();
    }
    achievements
        .iter_mut()
        .filter(|a| a.id() == QUIZ_WHIZ_ID)
        .filter_map(|a| a.unlock().then(|| a.clone()))
        .collect()
}
