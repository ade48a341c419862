use httpmock::prelude::*;
use reviewbot_core::{BotError, LlmSettings};
use reviewbot_review::llm::{ChatBackend, LlmClient};
use reviewbot_review::prompt;
use serde_json::json;

fn client_for(server: &MockServer, max_tokens: u32) -> LlmClient {
    let settings = LlmSettings {
        base_url: format!("{}/v1", server.base_url()),
        model: "openai/gpt-4o-mini".to_string(),
        max_tokens,
        timeout_secs: 5,
    };
    LlmClient::new(&settings, "test-openai-key").expect("llm client should be created")
}

#[tokio::test]
async fn chat_sends_bearer_model_and_token_cap() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-openai-key")
            .json_body_includes(
                json!({
                    "model": "openai/gpt-4o-mini",
                    "max_tokens": 512,
                    "messages": [{"role": "system"}, {"role": "user"}]
                })
                .to_string(),
            );

        then.status(200).json_body(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Looks good."}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }));
    });

    let client = client_for(&server, 512);
    let review = client
        .chat(prompt::build_messages("const x = 1;"))
        .await
        .expect("chat completion should succeed");

    mock.assert();
    assert_eq!(review, "Looks good.");
}

#[tokio::test]
async fn chat_backend_sends_default_token_cap() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-openai-key")
            .json_body_includes(json!({"max_tokens": 2000}).to_string());
        then.status(200)
            .json_body(json!({"choices": [{"message": {"content": "ok"}}]}));
    });

    let client = client_for(&server, LlmSettings::default().max_tokens);
    let review = client
        .complete(prompt::build_messages("fn main() {}"))
        .await
        .expect("chat completion should succeed");

    mock.assert();
    assert_eq!(review, "ok");
}

#[tokio::test]
async fn non_success_status_is_an_llm_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(401).body("unauthorized");
    });

    let client = client_for(&server, 2000);
    let err = client
        .chat(prompt::build_messages("const x = 1;"))
        .await
        .expect_err("401 should fail");

    mock.assert();
    assert!(matches!(err, BotError::Llm(_)));
    let message = err.to_string();
    assert!(message.contains("401"), "{message}");
    assert!(message.contains("unauthorized"), "{message}");
}

#[tokio::test]
async fn response_without_choices_is_an_llm_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({"choices": []}));
    });

    let client = client_for(&server, 2000);
    let err = client
        .chat(prompt::build_messages("const x = 1;"))
        .await
        .expect_err("empty choices should fail");

    assert!(matches!(err, BotError::Llm(_)));
}
