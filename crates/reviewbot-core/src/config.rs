use std::fmt;

use crate::error::BotError;
use crate::text::coerce_to_number;

/// GitHub API token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
/// Chat-completion API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Number of the issue the comment was left on.
pub const ENV_ISSUE_NUMBER: &str = "ISSUE_NUMBER";
/// Raw text of the triggering comment.
pub const ENV_COMMENT_BODY: &str = "COMMENT_BODY";
/// Repository in `owner/repo` form.
pub const ENV_REPO: &str = "REPO";

/// Every variable a run needs, in the order they are reported when missing.
pub const REQUIRED_ENV: [&str; 5] = [
    ENV_GITHUB_TOKEN,
    ENV_OPENAI_API_KEY,
    ENV_ISSUE_NUMBER,
    ENV_COMMENT_BODY,
    ENV_REPO,
];

/// Run inputs read once from the process environment.
///
/// All five values are required and non-empty. `ISSUE_NUMBER` and `REPO` are
/// kept as given; [`BotConfig::target`] parses them once a review is about to
/// be requested, so a comment without reviewable code never fails on them.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reviewbot_core::BotConfig;
///
/// let env = HashMap::from([
///     ("GITHUB_TOKEN", "ghp_x"),
///     ("OPENAI_API_KEY", "sk-x"),
///     ("ISSUE_NUMBER", "42"),
///     ("COMMENT_BODY", "```rs\nfn main() {}\n```"),
///     ("REPO", "acme/widgets"),
/// ]);
/// let config = BotConfig::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
/// assert_eq!(config.repo, "acme/widgets");
///
/// let target = config.target().unwrap();
/// assert_eq!(target.owner, "acme");
/// assert_eq!(target.repo, "widgets");
/// assert_eq!(target.issue_number, 42);
/// ```
#[derive(Clone)]
pub struct BotConfig {
    /// Token used to authenticate against the GitHub API.
    pub github_token: String,
    /// Key used to authenticate against the chat-completion API.
    pub llm_api_key: String,
    /// Issue that receives the review comment, as given.
    pub issue_number: String,
    /// Raw comment text to scan for a code block.
    pub comment_body: String,
    /// Repository identifier in `owner/repo` form, as given.
    pub repo: String,
}

/// The issue a review comment is posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTarget {
    /// Repository owner (first segment of `REPO`).
    pub owner: String,
    /// Repository name (second segment of `REPO`).
    pub repo: String,
    /// Issue number.
    pub issue_number: u64,
}

impl BotConfig {
    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::MissingEnv`] naming every absent or empty
    /// variable.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`BotConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| match lookup(name) {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(name);
                String::new()
            }
        };
        let github_token = require(ENV_GITHUB_TOKEN);
        let llm_api_key = require(ENV_OPENAI_API_KEY);
        let issue_number = require(ENV_ISSUE_NUMBER);
        let comment_body = require(ENV_COMMENT_BODY);
        let repo = require(ENV_REPO);
        if !missing.is_empty() {
            return Err(BotError::MissingEnv(missing));
        }

        Ok(Self {
            github_token,
            llm_api_key,
            issue_number,
            comment_body,
            repo,
        })
    }

    /// Parse `REPO` and `ISSUE_NUMBER` into the issue to comment on.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Config`] if `REPO` has no `owner/repo` shape or
    /// `ISSUE_NUMBER` is not a positive whole number.
    pub fn target(&self) -> Result<IssueTarget, BotError> {
        let (owner, repo) = parse_repo_identifier(&self.repo)?;
        let issue_number = parse_issue_number(&self.issue_number)?;
        Ok(IssueTarget {
            owner,
            repo,
            issue_number,
        })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("github_token", &"<redacted>")
            .field("llm_api_key", &"<redacted>")
            .field("issue_number", &self.issue_number)
            .field("comment_body", &self.comment_body)
            .field("repo", &self.repo)
            .finish()
    }
}

// Largest integer a double holds exactly.
const MAX_ISSUE_NUMBER: f64 = 9_007_199_254_740_991.0;

/// Accepts any numeric spelling of a positive whole number (`42`, `4.2e1`, `0x2a`).
fn parse_issue_number(raw: &str) -> Result<u64, BotError> {
    match coerce_to_number(raw) {
        Some(n) if (1.0..=MAX_ISSUE_NUMBER).contains(&n) && n.fract() == 0.0 => Ok(n as u64),
        _ => Err(BotError::Config(format!(
            "invalid {ENV_ISSUE_NUMBER} '{raw}', expected a positive integer"
        ))),
    }
}

/// Split an `owner/repo` identifier into its two parts.
///
/// Segments after the second `/` are ignored.
fn parse_repo_identifier(raw: &str) -> Result<(String, String), BotError> {
    let mut parts = raw.split('/');
    match (parts.next(), parts.next()) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(BotError::Config(format!(
            "invalid {ENV_REPO} '{raw}', expected owner/repo"
        ))),
    }
}
