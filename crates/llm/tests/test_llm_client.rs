use llm::{CompletionRequest, LlmClient, LlmError, LlmProvider};
use mockito::{Matcher, Server};

fn client_for(server: &Server) -> LlmClient {
    LlmClient::new(
        LlmProvider::Local {
            url: server.url(),
            model: "test-model".to_string(),
        },
        128,
        0.2,
    )
}

fn chat_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_complete_returns_first_choice() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "test-model",
            "max_tokens": 64
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body("Namaste"))
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .complete(CompletionRequest::new("hello").max_tokens(64).system_prompt("be brief"))
        .await
        .unwrap();

    assert_eq!(response, "Namaste");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_keeps_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("rate limited")
        .create_async()
        .await;

    let client = client_for(&server);
    match client.chat_simple("hello").await {
        Err(LlmError::Http { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.chat_simple("hello").await,
        Err(LlmError::EmptyResponse)
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let client = LlmClient::new(
        LlmProvider::Local {
            url: "http://127.0.0.1:9".to_string(),
            model: "test-model".to_string(),
        },
        16,
        0.0,
    );
    assert!(matches!(
        client.chat_simple("hello").await,
        Err(LlmError::Transport(_))
    ));
}
