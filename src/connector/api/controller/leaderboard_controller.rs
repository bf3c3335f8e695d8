use anyhow::Result;

use crate::cli::OutputFormat;
use crate::RankedEntry;

use super::super::Container;

pub struct LeaderboardController<'a> {
    container: &'a Container,
}

impl<'a> LeaderboardController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn leaderboard(&self) -> Result<String> {
        let ranked = self.container.leaderboard_use_case().execute().await?;

        match self.container.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ranked)?),
            OutputFormat::Text => Ok(self.format_leaderboard(&ranked)),
        }
    }

    fn format_leaderboard(&self, ranked: &[RankedEntry]) -> String {
        if ranked.is_empty() {
            return "Leaderboard is empty.".to_string();
        }

        let mut output = "League Leaderboard\n\n".to_string();
        for r in ranked {
            let you = if r.entry().is_current_user() { "  <- you" } else { "" };
            output.push_str(&format!(
                "{:>3}. {:<22}{:>6}{}\n",
                r.rank(),
                r.entry().name(),
                r.entry().score(),
                you
            ));
        }
        output
    }
}
