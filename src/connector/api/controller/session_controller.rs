use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;
use crate::{AssistEvent, Feature, SessionReport};

use super::super::Container;

pub struct SessionController<'a> {
    container: &'a Container,
}

impl<'a> SessionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run(&self) -> Result<String> {
        let mut events = self.container.registry().subscribe();
        let use_case = self.container.session_use_case();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));

        let run = use_case.execute();
        tokio::pin!(run);

        let mut pending = 0usize;
        let mut settled = 0usize;
        let report = loop {
            tokio::select! {
                report = &mut run => break report?,
                Ok(event) = events.recv() => {
                    match event {
                        AssistEvent::Started { .. } => pending += 1,
                        _ => settled += 1,
                    }
                    spinner.set_message(format!("{settled}/{pending} assists settled"));
                }
            }
        };
        spinner.finish_and_clear();

        match self.container.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => Ok(self.format_report(&report)),
        }
    }

    fn format_report(&self, report: &SessionReport) -> String {
        let mut output = format!(
            "Requested {} assists: {} fulfilled, {} failed\n",
            report.requested,
            report.fulfilled,
            report.failed.len()
        );

        for feature in Feature::ALL {
            if feature.is_keyless() {
                if let Some(starter) = report.state.conversation_starter() {
                    output.push_str(&format!("\n{feature}:\n  {starter}\n"));
                }
                continue;
            }

            let mut results = report.state.results(feature).peekable();
            if results.peek().is_none() {
                continue;
            }
            output.push_str(&format!("\n{feature}:\n"));
            for (key, result) in results {
                let text = result.to_string().replace('\n', "\n        ");
                output.push_str(&format!("  {key:<4}  {text}\n"));
            }
        }

        if !report.failed.is_empty() {
            output.push_str("\nFailed:\n");
            for failure in &report.failed {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    failure.feature,
                    failure.key.as_deref().unwrap_or("-"),
                    failure.message
                ));
            }
        }

        if let Some(banner) = report.state.last_error() {
            output.push_str(&format!("\n{banner}\n"));
        }

        output
    }
}
