use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::GenerativeClient;
use crate::domain::AssistError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const MODELS_PATH: &str = "/v1beta/models";
const GENERATE_METHOD: &str = "generateContent";

const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";
const ERROR_MESSAGE_POINTER: &str = "/error/message";

/// `generateContent` request payload: one user turn with one text part.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<ApiContent<'a>>,
}

#[derive(serde::Serialize)]
struct ApiContent<'a> {
    role: &'a str,
    parts: Vec<ApiPart<'a>>,
}

#[derive(serde::Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

impl<'a> ApiRequest<'a> {
    fn user_turn(prompt: &'a str) -> Self {
        Self {
            contents: vec![ApiContent {
                role: "user",
                parts: vec![ApiPart { text: prompt }],
            }],
        }
    }
}

/// HTTP client for the Gemini `generateContent` endpoint (and compatible
/// servers).
///
/// Implements [`GenerativeClient`]. One POST per call: no retry, no timeout, no
/// rate limiting. Configure through the environment:
///
/// ```text
/// GEMINI_BASE_URL=https://generativelanguage.googleapis.com
/// GEMINI_MODEL=gemini-2.0-flash
/// GEMINI_API_KEY=...
/// ```
///
/// Success bodies are probed with JSON pointers. A 2xx body without a
/// non-empty first candidate text is [`AssistError::MalformedResponse`].
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL, without the key query parameter.
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!(
            "{}{MODELS_PATH}/{model}:{GENERATE_METHOD}",
            base.trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable          | Default                                     |
    /// |-------------------|---------------------------------------------|
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_MODEL`    | `gemini-2.0-flash`                          |
    /// | `GEMINI_API_KEY`  | `""` (empty)                                |
    pub fn from_env() -> Self {
        let base = Self::configured_base_url();
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        Self::new(key, model, base)
    }

    /// Return the configured base URL (for logging purposes).
    pub fn configured_base_url() -> String {
        std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Pull the generated text out of a success body.
    fn extract_text(body: &Value) -> Result<String, AssistError> {
        body.pointer(TEXT_POINTER)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(AssistError::MalformedResponse)
    }

    /// Message for a non-success status: the body's `error.message` when it
    /// has one, otherwise the status reason phrase.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer(ERROR_MESSAGE_POINTER)
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string()
            })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let mut request = self.client.post(&self.url).json(&ApiRequest::user_turn(prompt));
        if self.has_api_key() {
            request = request.query(&[("key", self.api_key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AssistError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistError::transport(e.to_string()))?;

        if !status.is_success() {
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(AssistError::service(
                status.as_u16(),
                Self::error_message(status, &body),
            ));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("GeminiClient: failed to parse response: {e}");
            AssistError::transport(e.to_string())
        })?;

        let text = Self::extract_text(&value).inspect_err(|_| {
            warn!("GeminiClient: unexpected response structure: {body}");
        })?;
        debug!("GeminiClient raw response: {text}");
        Ok(text)
    }
}
