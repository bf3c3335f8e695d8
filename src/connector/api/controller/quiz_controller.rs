use std::collections::HashMap;

use anyhow::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::{QuizOutcome, QuizQuestion};

use super::super::Container;

pub struct QuizController<'a> {
    container: &'a Container,
}

impl<'a> QuizController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn quiz(&self, answers: Vec<(String, String)>) -> Result<String> {
        let use_case = self.container.quiz_use_case();

        if answers.is_empty() {
            let questions = use_case.questions().await?;
            return match self.container.format() {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&questions)?),
                OutputFormat::Text => Ok(self.format_questions(&questions)),
            };
        }

        // Question ids are matched exactly as given; a later answer for the
        // same question replaces an earlier one.
        let answers: HashMap<String, String> = answers.into_iter().collect();
        let outcome = use_case.execute(&answers).await?;

        match self.container.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "answers": answers,
                "score": outcome.score,
                "unlocked": outcome.unlocked,
            }))?),
            OutputFormat::Text => Ok(self.format_outcome(&outcome, &answers)),
        }
    }

    fn format_questions(&self, questions: &[QuizQuestion]) -> String {
        let mut output = String::new();
        for q in questions {
            output.push_str(&format!("{}. {}\n", q.id(), q.question()));
            output.push_str(&format!("    {}\n", q.options().join(" | ")));
        }
        output.push_str("\nAnswer with: wordwise quiz --answer Q1=<option> ...");
        output
    }

    fn format_outcome(&self, outcome: &QuizOutcome, answers: &HashMap<String, String>) -> String {
        let mut output = String::new();
        for q in &outcome.questions {
            let mark = match answers.get(q.id()) {
                Some(a) if q.is_correct(a) => format!("{a} (correct)"),
                Some(a) => format!("{a} (answer: {})", q.answer()),
                None => "(unanswered)".to_string(),
            };
            output.push_str(&format!("{}. {}  {}\n", q.id(), q.question(), mark));
        }
        output.push_str(&format!("\nScore: {}", outcome.score));
        for a in &outcome.unlocked {
            output.push_str(&format!(
                "\nAchievement unlocked: {} ({})",
                a.name(),
                a.description()
            ));
        }
        output
    }
}
