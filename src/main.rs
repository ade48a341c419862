use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use miette::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use reviewbot_core::{BotConfig, Settings};
use reviewbot_review::github::GitHubClient;
use reviewbot_review::llm::LlmClient;
use reviewbot_review::pipeline::ReviewPipeline;

const DEFAULT_SETTINGS_FILE: &str = ".reviewbot.toml";

#[derive(Parser)]
#[command(
    name = "reviewbot",
    version,
    about = "Review the code block in a GitHub issue comment with an LLM",
    long_about = "Review the code block in a GitHub issue comment with an LLM.\n\n\
                   Reads the triggering comment from the environment, extracts the first\n\
                   fenced code block, asks an OpenAI-compatible chat endpoint for a review,\n\
                   and posts the result as a new comment on the issue.\n\n\
                   Required environment:\n  \
                     GITHUB_TOKEN     token used to post the comment\n  \
                     OPENAI_API_KEY   key for the chat-completion endpoint\n  \
                     ISSUE_NUMBER     issue to comment on\n  \
                     COMMENT_BODY     text of the triggering comment\n  \
                     REPO             owner/repo"
)]
struct Cli {
    /// Path to settings file (default: .reviewbot.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,reviewbot=debug,reviewbot_core=debug,reviewbot_review=debug"
    } else {
        "warn,reviewbot=info,reviewbot_core=info,reviewbot_review=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_file(path).wrap_err(format!("reading {}", path.display())),
        None => {
            let default_path = Path::new(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                Settings::from_file(default_path)
                    .wrap_err(format!("reading {DEFAULT_SETTINGS_FILE}"))
            } else {
                Ok(Settings::default())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BotConfig::from_env()?;
    info!(repo = %config.repo, issue = %config.issue_number, "configuration loaded");

    let settings = load_settings(cli.config.as_deref())?;

    let llm = LlmClient::new(&settings.llm, &config.llm_api_key)?;
    info!(model = llm.model(), max_tokens = llm.max_tokens(), "using chat model");
    let github = GitHubClient::new(&config.github_token);

    let pipeline = ReviewPipeline::new(llm, github, settings.review);
    let outcome = pipeline.run(&config).await?;
    debug!(?outcome, "run finished");

    Ok(())
}
