use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use serde::Serialize;
use tracing::info;

use crate::application::use_cases::RequestAssistUseCase;
use crate::application::ContentRepository;
use crate::domain::{AssistState, AssistTrigger, ContentKind, DomainError, Feature};

#[derive(Debug, Clone, Serialize)]
pub struct FailedAssist {
    pub feature: Feature,
    pub key: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub requested: usize,
    pub fulfilled: usize,
    pub failed: Vec<FailedAssist>,
    pub state: AssistState,
}

/// Trigger every assist for every catalog item at once, plus one
/// conversation starter, and wait for all of them to settle.
pub struct RunSessionUseCase {
    content_repo: Arc<dyn ContentRepository>,
    assist: RequestAssistUseCase,
}

impl RunSessionUseCase {
    pub fn new(content_repo: Arc<dyn ContentRepository>, assist: RequestAssistUseCase) -> Self {
        Self {
            content_repo,
            assist,
        }
    }

    pub async fn execute(&self) -> Result<SessionReport, DomainError> {
        let mut triggers = Vec::new();
        for kind in ContentKind::ALL {
            triggers.extend(
                self.content_repo
                    .list(kind)
                    .await?
                    .into_iter()
                    .map(AssistTrigger::Item),
            );
        }
        triggers.push(AssistTrigger::ConversationStarter);

        info!("Session: triggering {} assists", triggers.len());
        let start_time = Instant::now();

        let outcomes = join_all(
            triggers
                .iter()
                .map(|trigger| self.assist.execute(trigger.clone())),
        )
        .await;

        let mut fulfilled = 0;
        let mut failed = Vec::new();
        for (trigger, outcome) in triggers.iter().zip(outcomes) {
            match outcome {
                Ok(_) => fulfilled += 1,
                Err(e) => failed.push(FailedAssist {
                    feature: trigger.feature(),
                    key: trigger.key().map(str::to_string),
                    message: e.banner(),
                }),
            }
        }

        info!(
            "Session: {} fulfilled, {} failed in {:?}",
            fulfilled,
            failed.len(),
            start_time.elapsed()
        );

        Ok(SessionReport {
            requested: triggers.len(),
            fulfilled,
            failed,
            state: self.assist.registry().snapshot().await,
        })
    }
}
