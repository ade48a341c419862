use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use reviewbot_core::{BotError, IssueTarget};
use tracing::debug;

/// Heading placed above every posted review.
pub const COMMENT_HEADING: &str = "🤖 Automated Code Review Result";

/// A new comment on a GitHub issue.
///
/// # Examples
///
/// ```
/// use reviewbot_review::github::IssueComment;
///
/// let comment = IssueComment {
///     owner: "acme".into(),
///     repo: "widgets".into(),
///     issue_number: 42,
///     body: "hello".into(),
/// };
/// assert_eq!(comment.issue_number, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Issue that receives the comment.
    pub issue_number: u64,
    /// Markdown body.
    pub body: String,
}

impl IssueComment {
    /// Wrap `review` in the review template, addressed to `target`.
    pub fn review(target: &IssueTarget, review: &str) -> Self {
        Self {
            owner: target.owner.clone(),
            repo: target.repo.clone(),
            issue_number: target.issue_number,
            body: format_review_body(review),
        }
    }
}

/// Format the body of a review comment.
///
/// # Examples
///
/// ```
/// use reviewbot_review::github::format_review_body;
///
/// let body = format_review_body("Nice work.");
/// assert_eq!(body, "### 🤖 Automated Code Review Result\n\nNice work.");
/// ```
pub fn format_review_body(review: &str) -> String {
    format!("### {COMMENT_HEADING}\n\n{review}")
}

/// Anything that can post a comment on an issue.
#[async_trait]
pub trait IssueCommenter: Send + Sync {
    /// Create `comment` and return its URL.
    async fn create_comment(&self, comment: &IssueComment) -> Result<String, BotError>;
}

/// GitHub client for posting issue comments.
///
/// The underlying octocrab client is built when a comment is posted, so runs
/// that skip the review never touch TLS or the network.
pub struct GitHubClient {
    token: String,
}

impl GitHubClient {
    /// Create a client authenticated with a personal or workflow token.
    ///
    /// # Examples
    ///
    /// ```
    /// use reviewbot_review::github::GitHubClient;
    ///
    /// let client = GitHubClient::new("ghp_xxxx");
    /// ```
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    // Octocrab's retry middleware is switched off; a failed post fails the run.
    fn octocrab(&self) -> Result<octocrab::Octocrab, BotError> {
        octocrab::Octocrab::builder()
            .personal_token(self.token.clone())
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| BotError::GitHub(format!("failed to create GitHub client: {e}")))
    }
}

#[async_trait]
impl IssueCommenter for GitHubClient {
    async fn create_comment(&self, comment: &IssueComment) -> Result<String, BotError> {
        debug!(
            owner = %comment.owner,
            repo = %comment.repo,
            issue = comment.issue_number,
            "posting issue comment"
        );

        let created = self
            .octocrab()?
            .issues(&comment.owner, &comment.repo)
            .create_comment(comment.issue_number, &comment.body)
            .await
            .map_err(|e| {
                BotError::GitHub(format!(
                    "failed to comment on {}/{}#{}: {e}",
                    comment.owner, comment.repo, comment.issue_number
                ))
            })?;

        Ok(created.html_url.to_string())
    }
}
