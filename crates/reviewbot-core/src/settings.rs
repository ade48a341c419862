use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BotError;

/// Optional tunables loaded from `.reviewbot.toml`.
///
/// Everything here has a default, so a run without a settings file behaves
/// exactly like one with an empty file.
///
/// # Examples
///
/// ```
/// use reviewbot_core::{CodeGate, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(settings.llm.model, "gpt-4.1");
/// assert_eq!(settings.llm.max_tokens, 2000);
/// assert_eq!(settings.review.code_gate, CodeGate::Literal);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Chat-completion provider settings.
    #[serde(default)]
    pub llm: LlmSettings,
    /// Review gating settings.
    #[serde(default)]
    pub review: ReviewSettings,
}

impl Settings {
    /// Load settings from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Io`] if the file cannot be read, or
    /// [`BotError::Toml`] if the content is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, BotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use reviewbot_core::Settings;
    ///
    /// let settings = Settings::from_toml("[llm]\nmax_tokens = 500\n").unwrap();
    /// assert_eq!(settings.llm.max_tokens, 500);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, BotError> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }
}

/// Chat-completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of an OpenAI-compatible API; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Cap on generated tokens per review.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gpt-4.1".into()
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How the minimum-length gate judges extracted code.
///
/// # Examples
///
/// ```
/// use reviewbot_core::{CodeGate, Settings};
///
/// let settings = Settings::from_toml("[review]\ncode_gate = \"length\"\n").unwrap();
/// assert_eq!(settings.review.code_gate, CodeGate::Length);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeGate {
    /// Coerce the code text to a number and skip when it is at most the
    /// threshold. Non-numeric code always passes. This is how the gate has
    /// historically behaved.
    #[default]
    Literal,
    /// Skip when the code has at most `min_code_length` characters.
    Length,
}

/// Review gating configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSettings {
    /// Which comparison the short-code gate applies.
    #[serde(default)]
    pub code_gate: CodeGate,
    /// Threshold used by the gate (default: 100).
    #[serde(default = "default_min_code_length")]
    pub min_code_length: usize,
}

fn default_min_code_length() -> usize {
    100
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            code_gate: CodeGate::default(),
            min_code_length: default_min_code_length(),
        }
    }
}
