use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    id: String,
    question: String,
    options: Vec<String>,
    answer: String,
}

impl QuizQuestion {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        options: &[&str],
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    correct: usize,
    total: usize,
}

impl QuizScore {
    /// Count answers matching the expected option exactly. Unanswered
    /// questions count as wrong.
    pub fn grade(questions: &[QuizQuestion], answers: &HashMap<String, String>) -> Self {
        let correct = questions
            .iter()
            .filter(|q| answers.get(q.id()).is_some_and(|a| q.is_correct(a)))
            .count();
        Self {
            correct,
            total: questions.len(),
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl std::fmt::Display for QuizScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
