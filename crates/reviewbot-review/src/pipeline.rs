use reviewbot_core::{BotConfig, BotError, ReviewSettings};
use tracing::{debug, info};

use crate::extract::extract_code_block;
use crate::gate::is_too_short;
use crate::github::{IssueComment, IssueCommenter};
use crate::llm::ChatBackend;
use crate::prompt;

const PREVIEW_CHARS: usize = 100;

/// How a review run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The comment had no fenced code block.
    NoCode,
    /// The short-code gate rejected the extracted code.
    TooShort {
        /// The code that was rejected.
        code: String,
    },
    /// A review was generated and posted.
    Published {
        /// URL of the created comment.
        comment_url: String,
        /// Review text as returned by the model.
        review: String,
    },
}

/// Review orchestrator: extract, gate, review, publish.
///
/// Each step runs to completion before the next starts; the comment is never
/// posted unless the chat call has returned a review.
pub struct ReviewPipeline<C, G> {
    chat: C,
    github: G,
    settings: ReviewSettings,
}

impl<C: ChatBackend, G: IssueCommenter> ReviewPipeline<C, G> {
    /// Create a new pipeline from its two outbound clients and gate settings.
    pub fn new(chat: C, github: G, settings: ReviewSettings) -> Self {
        Self {
            chat,
            github,
            settings,
        }
    }

    /// Run a review for the comment described by `config`.
    ///
    /// Returns [`ReviewOutcome::NoCode`] or [`ReviewOutcome::TooShort`]
    /// without touching the network when there is nothing to review.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Config`] if `REPO` or `ISSUE_NUMBER` is malformed,
    /// checked only once there is code to review and before the chat call.
    /// Returns [`BotError::Llm`] if the chat call fails, or
    /// [`BotError::GitHub`] if the comment cannot be created. A review that
    /// was generated but not posted is discarded.
    pub async fn run(&self, config: &BotConfig) -> Result<ReviewOutcome, BotError> {
        let Some(code) = extract_code_block(&config.comment_body) else {
            info!("no code block found in comment, skipping review");
            return Ok(ReviewOutcome::NoCode);
        };

        if is_too_short(&code, &self.settings) {
            info!(
                gate = ?self.settings.code_gate,
                threshold = self.settings.min_code_length,
                "code block too short, skipping review"
            );
            return Ok(ReviewOutcome::TooShort { code });
        }

        info!(code = %preview(&code), "extracted code");

        let target = config.target()?;
        let review = self.chat.complete(prompt::build_messages(&code)).await?;
        debug!(%review, "review generated");

        let comment = IssueComment::review(&target, &review);
        let comment_url = self.github.create_comment(&comment).await?;
        info!(url = %comment_url, "review comment published");

        Ok(ReviewOutcome::Published {
            comment_url,
            review,
        })
    }
}

fn preview(code: &str) -> String {
    let head: String = code.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
