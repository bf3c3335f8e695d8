use anyhow::Result;

use crate::cli::OutputFormat;
use crate::ContentKind;

use super::super::Container;

pub struct ProgressController<'a> {
    container: &'a Container,
}

impl<'a> ProgressController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn progress(&self, seed: Option<u64>, completed: Vec<String>) -> Result<String> {
        let progress = self
            .container
            .progress_use_case()
            .execute(seed, &completed)
            .await?;

        if self.container.format() == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&progress)?);
        }

        let lessons = self
            .container
            .browse_use_case()
            .list(ContentKind::Lesson)
            .await?;

        let mut output = format!(
            "Lesson progress ({} of {} completed)\n\n",
            progress.completed(),
            progress.len()
        );
        for lesson in &lessons {
            let percent = progress.get(lesson.id()).unwrap_or(0);
            let filled = usize::from(percent) / 10;
            output.push_str(&format!(
                "  {:<4}{:<20}[{}{}] {:>3}%\n",
                lesson.id(),
                lesson.title(),
                "#".repeat(filled),
                "-".repeat(10 - filled),
                percent
            ));
        }
        Ok(output)
    }
}
