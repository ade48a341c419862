//! Core configuration and error handling for reviewbot.
//!
//! This crate provides the shared foundation used by the review crate and
//! the binary:
//! - [`BotError`]: unified error type using `thiserror` and `miette`
//! - [`BotConfig`]: the required run inputs read from the environment
//! - [`Settings`]: optional tunables loaded from `.reviewbot.toml`
//! - [`trim_text`] and [`coerce_to_number`]: comment-text normalization

mod config;
mod error;
mod settings;
mod text;

pub use config::{
    BotConfig, IssueTarget, ENV_COMMENT_BODY, ENV_GITHUB_TOKEN, ENV_ISSUE_NUMBER,
    ENV_OPENAI_API_KEY, ENV_REPO, REQUIRED_ENV,
};
pub use error::BotError;
pub use settings::{CodeGate, LlmSettings, ReviewSettings, Settings};
pub use text::{coerce_to_number, trim_text};

/// A convenience `Result` type for reviewbot operations.
pub type Result<T> = std::result::Result<T, BotError>;
