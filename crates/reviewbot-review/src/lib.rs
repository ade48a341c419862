//! Code extraction, LLM review and GitHub publishing for reviewbot.
//!
//! Provides the review pipeline: fenced-block extraction, the short-code
//! gate, prompt construction, the chat-completion client, and the GitHub
//! issue-comment client.

pub mod extract;
pub mod gate;
pub mod github;
pub mod llm;
pub mod pipeline;
pub mod prompt;
