use std::time::Duration;

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::{AssistOutput, AssistTrigger, ContentItem, ContentKind, Feature};

use super::super::Container;

pub struct AssistController<'a> {
    container: &'a Container,
}

impl<'a> AssistController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn vocabulary_example(&self, id: String) -> Result<String> {
        self.run_for_item(ContentKind::Vocabulary, &id).await
    }

    pub async fn summarize(&self, id: String) -> Result<String> {
        self.run_for_item(ContentKind::Passage, &id).await
    }

    pub async fn grammar_examples(&self, id: String) -> Result<String> {
        self.run_for_item(ContentKind::Grammar, &id).await
    }

    pub async fn explain(&self, id: String) -> Result<String> {
        self.run_for_item(ContentKind::Lesson, &id).await
    }

    pub async fn conversation_starter(&self) -> Result<String> {
        self.run(AssistTrigger::ConversationStarter).await
    }

    async fn run_for_item(&self, kind: ContentKind, id: &str) -> Result<String> {
        let item = self.container.browse_use_case().get(kind, id).await?;
        self.run(AssistTrigger::Item(item)).await
    }

    async fn run(&self, trigger: AssistTrigger) -> Result<String> {
        let feature = trigger.feature();
        let spinner = pending_spinner(feature);

        let outcome = self
            .container
            .assist_use_case()
            .execute(trigger.clone())
            .await;
        spinner.finish_and_clear();

        let output = outcome.map_err(|e| anyhow!(e.banner()))?;

        match self.container.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "feature": feature,
                "key": trigger.key(),
                "output": output,
            }))?),
            OutputFormat::Text => Ok(self.format_output(&trigger, &output)),
        }
    }

    fn format_output(&self, trigger: &AssistTrigger, output: &AssistOutput) -> String {
        match trigger {
            AssistTrigger::Item(ContentItem::Vocabulary(v)) => {
                format!("{}\nE.g.: \"{}\"", v.word(), output)
            }
            AssistTrigger::Item(ContentItem::Passage(p)) => {
                format!("{}\nSummary:\n{}", p.title(), output)
            }
            AssistTrigger::Item(ContentItem::Grammar(g)) => {
                let lines = output
                    .as_lines()
                    .map(|lines| {
                        lines
                            .iter()
                            .map(|l| format!("  {l}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    })
                    .unwrap_or_else(|| output.to_string());
                format!("{}\nMore examples:\n{}", g.title(), lines)
            }
            AssistTrigger::Item(ContentItem::Lesson(l)) => {
                format!("{}\nAlternative Explanation:\n{}", l.title(), output)
            }
            AssistTrigger::ConversationStarter => output.to_string(),
        }
    }
}

fn pending_spinner(feature: Feature) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(feature.pending_label());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
