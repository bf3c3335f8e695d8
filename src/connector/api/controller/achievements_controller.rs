use anyhow::Result;

use crate::cli::OutputFormat;
use crate::Achievement;

use super::super::Container;

pub struct AchievementsController<'a> {
    container: &'a Container,
}

impl<'a> AchievementsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn achievements(&self) -> Result<String> {
        let achievements = self.container.achievements_use_case().execute().await?;

        match self.container.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&achievements)?),
            OutputFormat::Text => Ok(self.format_achievements(&achievements)),
        }
    }

    fn format_achievements(&self, achievements: &[Achievement]) -> String {
        let unlocked = achievements.iter().filter(|a| a.is_unlocked()).count();
        let mut output = format!(
            "Your Achievements ({unlocked}/{} unlocked)\n\n",
            achievements.len()
        );
        for a in achievements {
            let mark = if a.is_unlocked() { "[x]" } else { "[ ]" };
            output.push_str(&format!(
                "  {mark} {:<16}{}\n",
                a.name(),
                a.description()
            ));
        }
        output
    }
}
