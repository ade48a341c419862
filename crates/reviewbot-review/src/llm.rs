use std::time::Duration;

use async_trait::async_trait;
use reviewbot_core::{BotError, LlmSettings};
use serde::Serialize;
use tracing::debug;

/// A message in a chat conversation with the LLM.
///
/// # Examples
///
/// ```
/// use reviewbot_review::llm::{ChatMessage, Role};
///
/// let msg = ChatMessage {
///     role: Role::User,
///     content: "Review this code".into(),
/// };
/// assert!(matches!(msg.role, Role::User));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: Role,
    /// Text content of the message.
    pub content: String,
}

/// Role in the chat conversation.
///
/// # Examples
///
/// ```
/// use reviewbot_review::llm::Role;
///
/// let role = Role::System;
/// assert_eq!(serde_json::to_string(&role).unwrap(), "\"system\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-level instructions.
    System,
    /// User input.
    User,
}

/// Anything that can turn a conversation into generated text.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send `messages` and return the first choice's content.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BotError>;
}

/// OpenAI-compatible chat completions client.
///
/// Works with any provider that exposes `{base_url}/chat/completions`:
/// OpenRouter, OpenAI, Ollama, vLLM, LiteLLM, etc.
///
/// # Examples
///
/// ```
/// use reviewbot_core::LlmSettings;
/// use reviewbot_review::llm::LlmClient;
///
/// let client = LlmClient::new(&LlmSettings::default(), "test-key").unwrap();
/// assert_eq!(client.model(), "gpt-4.1");
/// ```
pub struct LlmClient {
    client: reqwest::Client,
    settings: LlmSettings,
    api_key: String,
}

impl LlmClient {
    /// Create a new LLM client from settings and an API key.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Llm`] if the HTTP client cannot be built.
    pub fn new(settings: &LlmSettings, api_key: &str) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| BotError::Llm(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            settings: settings.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// Return the model name from the settings.
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Return the response-length cap sent with each request.
    pub fn max_tokens(&self) -> u32 {
        self.settings.max_tokens
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    /// Send a chat completion request and return the text response.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Llm`] on HTTP errors or response parsing failures.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, BotError> {
        let url = self.endpoint();
        let body = request_body(&self.settings, &messages);

        debug!(%url, model = %self.settings.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Llm(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(BotError::Llm(format!(
                "LLM API error {status}: {body_text}"
            )));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BotError::Llm(format!("failed to parse response: {e}")))?;

        first_choice_content(&response_body)
    }
}

#[async_trait]
impl ChatBackend for LlmClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BotError> {
        self.chat(messages).await
    }
}

fn request_body(settings: &LlmSettings, messages: &[ChatMessage]) -> serde_json::Value {
    serde_json::json!({
        "model": settings.model,
        "messages": messages,
        "max_tokens": settings.max_tokens,
    })
}

fn first_choice_content(response_body: &serde_json::Value) -> Result<String, BotError> {
    response_body
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| BotError::Llm(format!("unexpected response structure: {response_body}")))
}
