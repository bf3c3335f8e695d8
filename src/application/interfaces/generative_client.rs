use async_trait::async_trait;

use crate::domain::AssistError;

/// Sends a single-turn prompt to a text-generation service and returns the
/// generated text.
///
/// Implementors own transport, serialization and vendor response shapes. A call
/// is never retried, timed out or cancelled by the caller.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}
