use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use tracing::debug;

use crate::application::GenerativeClient;
use crate::domain::AssistError;

const CANNED_SENTENCES: [&str; 4] = [
    "She practiced every evening until the words felt natural.",
    "Reading a little each day builds strong habits.",
    "He asked a question and listened carefully to the answer.",
    "They kept a notebook of new words from every lesson.",
];

const CANNED_STARTERS: [&str; 3] = [
    "What is something you learned this week that surprised you?",
    "If you could visit any city tomorrow, where would you go and why?",
    "What does a perfect weekend look like for you?",
];

/// Offline [`GenerativeClient`] returning canned text.
///
/// The same prompt always yields the same reply. Grammar-example prompts get a
/// short bulleted list so the line-splitting path is exercised.
pub struct MockGenerativeClient;

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self
    }

    fn pick<'a>(prompt: &str, choices: &[&'a str]) -> &'a str {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        choices[(hasher.finish() % choices.len() as u64) as usize]
    }

    fn reply(prompt: &str) -> String {
        if prompt.starts_with("2-3 simple examples") {
            "- The cat sleeps on the sofa.\n\n- My brother plays football.\n- This is a beautiful city.\n"
                .to_string()
        } else if prompt.starts_with("Simple, engaging conversation starter") {
            Self::pick(prompt, &CANNED_STARTERS).to_string()
        } else {
            Self::pick(prompt, &CANNED_SENTENCES).to_string()
        }
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let reply = Self::reply(prompt);
        debug!("MockGenerativeClient: {} chars for prompt {:?}", reply.len(), prompt);
        Ok(reply)
    }
}
