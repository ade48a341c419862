/// Errors that can occur during a review run.
///
/// Each variant names the stage that failed. Library crates return this type
/// directly; the binary hands it to `miette` for rendering at the boundary.
///
/// # Examples
///
/// ```
/// use reviewbot_core::BotError;
///
/// let err = BotError::Config("missing REPO".into());
/// assert!(err.to_string().contains("missing REPO"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BotError {
    /// One or more required environment variables are absent or empty.
    #[error("missing required environment variables: {}", .0.join(", "))]
    #[diagnostic(
        code(reviewbot::missing_env),
        help("set GITHUB_TOKEN, OPENAI_API_KEY, ISSUE_NUMBER, COMMENT_BODY and REPO")
    )]
    MissingEnv(Vec<&'static str>),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    #[diagnostic(code(reviewbot::config))]
    Config(String),

    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    #[diagnostic(code(reviewbot::io))]
    Io(#[from] std::io::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(reviewbot::toml))]
    Toml(#[from] toml::de::Error),

    /// Chat-completion API or response error.
    #[error("LLM error: {0}")]
    #[diagnostic(code(reviewbot::llm))]
    Llm(String),

    /// GitHub API error.
    #[error("GitHub error: {0}")]
    #[diagnostic(code(reviewbot::github))]
    GitHub(String),
}
