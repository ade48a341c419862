use std::path::Path;
use std::process::{Command, Output};

fn run_bot(dir: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reviewbot"))
        .args(args)
        .env_clear()
        .envs(env.iter().copied())
        .current_dir(dir)
        .output()
        .unwrap()
}

fn full_env(comment: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("GITHUB_TOKEN", "ghp_test"),
        ("OPENAI_API_KEY", "sk-test"),
        ("ISSUE_NUMBER", "42"),
        ("COMMENT_BODY", comment),
        ("REPO", "acme/widgets"),
    ]
}

fn with_var(
    env: Vec<(&'static str, &'static str)>,
    name: &str,
    value: &'static str,
) -> Vec<(&'static str, &'static str)> {
    env.into_iter()
        .map(|(n, v)| if n == name { (n, value) } else { (n, v) })
        .collect()
}

#[test]
fn missing_environment_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(dir.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GITHUB_TOKEN"), "stderr: {stderr}");
    assert!(stderr.contains("REPO"), "stderr: {stderr}");
}

#[test]
fn one_missing_variable_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let env: Vec<_> = full_env("```js\nconst x = 1;\n```")
        .into_iter()
        .filter(|(name, _)| *name != "OPENAI_API_KEY")
        .collect();

    let output = run_bot(dir.path(), &env, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"), "stderr: {stderr}");
}

#[test]
fn comment_without_code_exits_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(dir.path(), &full_env("no code here"), &[]);

    assert!(
        output.status.success(),
        "reviewbot failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no code block found"), "stderr: {stderr}");
}

#[test]
fn length_gate_from_settings_skips_short_code() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".reviewbot.toml"),
        "[review]\ncode_gate = \"length\"\n",
    )
    .unwrap();

    let output = run_bot(
        dir.path(),
        &full_env("Please check:\n```js\nconst x = 1;\n```"),
        &[],
    );

    assert!(
        output.status.success(),
        "reviewbot failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too short"), "stderr: {stderr}");
}

#[test]
fn explicit_settings_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("bot.toml");
    std::fs::write(&settings, "[review]\ncode_gate = \"length\"\nmin_code_length = 500\n").unwrap();

    let output = run_bot(
        dir.path(),
        &full_env("```py\nprint('hello')\n```"),
        &["--config", settings.to_str().unwrap()],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too short"), "stderr: {stderr}");
}

#[test]
fn malformed_settings_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".reviewbot.toml"), "{{invalid}}").unwrap();

    let output = run_bot(dir.path(), &full_env("no code here"), &[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn malformed_repo_without_code_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let env = with_var(full_env("no code here"), "REPO", "widgets");

    let output = run_bot(dir.path(), &env, &[]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn malformed_repo_with_code_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let env = with_var(
        full_env("Please check:\n```js\nconst x = 1;\n```"),
        "REPO",
        "widgets",
    );

    let output = run_bot(dir.path(), &env, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("widgets"), "stderr: {stderr}");
}

#[test]
fn settings_template_parses() {
    let content = std::fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join(".reviewbot.example.toml"),
    )
    .unwrap();
    let settings: reviewbot_core::Settings = toml::from_str(&content).unwrap();
    assert_eq!(settings.llm.max_tokens, 2000);
    assert_eq!(settings.review.min_code_length, 100);
}
