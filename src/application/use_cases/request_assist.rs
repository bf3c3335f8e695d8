use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::GenerativeClient;
use crate::application::use_cases::AssistRegistry;
use crate::domain::{
    build_prompt, AssistError, AssistEvent, AssistOutput, AssistTrigger, GrammarTopic, Lesson,
    ReadingPassage, VocabularyEntry,
};

/// Runs one assist invocation: `Idle -> Pending -> Fulfilled | Failed`.
///
/// The feature's marker is set before the client is called and cleared exactly
/// once when the call settles. Concurrent invocations are neither serialized
/// nor deduplicated; each one writes its own result when it settles.
#[derive(Clone)]
pub struct RequestAssistUseCase {
    client: Arc<dyn GenerativeClient>,
    registry: Arc<AssistRegistry>,
}

impl RequestAssistUseCase {
    pub fn new(client: Arc<dyn GenerativeClient>, registry: Arc<AssistRegistry>) -> Self {
        Self { client, registry }
    }

    pub fn registry(&self) -> &Arc<AssistRegistry> {
        &self.registry
    }

    /// Run one invocation to completion.
    ///
    /// Nothing happens until the returned future is first polled: the marker
    /// is set on that first poll, before the client is called. Callers that
    /// need the marker visible right away should spawn or await the future
    /// before reading a snapshot.
    pub async fn execute(&self, trigger: AssistTrigger) -> Result<AssistOutput, AssistError> {
        let request_id = Uuid::new_v4();
        let feature = trigger.feature();
        let marker = trigger.marker();
        let prompt = build_prompt(&trigger);

        self.registry
            .dispatch(AssistEvent::Started {
                request_id,
                feature,
                marker: marker.clone(),
            })
            .await;

        debug!("RequestAssist[{request_id}]: {feature} prompt: {prompt}");
        let start_time = Instant::now();

        match self.client.generate(&prompt).await {
            Ok(text) => {
                let output = AssistOutput::from_raw(feature, &text);
                info!(
                    "RequestAssist[{request_id}]: {feature} {:?} fulfilled in {:?}",
                    marker.key().unwrap_or("-"),
                    start_time.elapsed()
                );
                self.registry
                    .dispatch(AssistEvent::Fulfilled {
                        request_id,
                        feature,
                        marker,
                        output: output.clone(),
                    })
                    .await;
                Ok(output)
            }
            Err(e) => {
                warn!(
                    "RequestAssist[{request_id}]: {feature} {:?} failed after {:?}: {e}",
                    marker.key().unwrap_or("-"),
                    start_time.elapsed()
                );
                self.registry
                    .dispatch(AssistEvent::Failed {
                        request_id,
                        feature,
                        marker,
                        message: e.banner(),
                    })
                    .await;
                Err(e)
            }
        }
    }

    pub async fn vocabulary_example(
        &self,
        entry: &VocabularyEntry,
    ) -> Result<AssistOutput, AssistError> {
        self.execute(AssistTrigger::Item(entry.clone().into())).await
    }

    pub async fn summarize_passage(
        &self,
        passage: &ReadingPassage,
    ) -> Result<AssistOutput, AssistError> {
        self.execute(AssistTrigger::Item(passage.clone().into())).await
    }

    pub async fn grammar_examples(
        &self,
        topic: &GrammarTopic,
    ) -> Result<AssistOutput, AssistError> {
        self.execute(AssistTrigger::Item(topic.clone().into())).await
    }

    pub async fn explain_lesson(&self, lesson: &Lesson) -> Result<AssistOutput, AssistError> {
        self.execute(AssistTrigger::Item(lesson.clone().into())).await
    }

    pub async fn conversation_starter(&self) -> Result<AssistOutput, AssistError> {
        self.execute(AssistTrigger::ConversationStarter).await
    }
}
