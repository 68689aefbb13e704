//! Integration tests for `ChatClient` using wiremock HTTP mocks.

use roofleads_llm::{ChatClient, LlmError, EXTRACT_LOCATION_INSTRUCTION};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ChatClient {
    ChatClient::with_base_url("sk-test", "gpt-3.5-turbo", 5, "roofleads-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn completion(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

#[tokio::test]
async fn extract_location_sends_instruction_and_trims_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                { "role": "system", "content": EXTRACT_LOCATION_INSTRUCTION },
                { "role": "user", "content": "Show me homes near Richmond Hill for leads" }
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&completion(json!("  Richmond Hill\n"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let location = client
        .extract_location("Show me homes near Richmond Hill for leads")
        .await
        .expect("extraction should succeed");

    assert_eq!(location, "Richmond Hill");
}

#[tokio::test]
async fn blank_reply_is_empty_reply_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion(json!("   "))))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.extract_location("anything").await;
    assert!(
        matches!(result, Err(LlmError::EmptyReply)),
        "expected EmptyReply, got: {result:?}"
    );
}

#[tokio::test]
async fn null_content_is_empty_reply_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion(json!(null))))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.extract_location("anything").await;
    assert!(matches!(result, Err(LlmError::EmptyReply)));
}

#[tokio::test]
async fn no_choices_is_empty_reply_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.extract_location("anything").await;
    assert!(matches!(result, Err(LlmError::EmptyReply)));
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.extract_location("anything").await;
    assert!(
        matches!(result, Err(LlmError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn unauthorized_is_unexpected_status_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .extract_location("anything")
        .await
        .expect_err("401 must fail");

    match &err {
        LlmError::UnexpectedStatus { status, body } => {
            assert_eq!(*status, 401);
            assert!(body.contains("Incorrect API key"), "body was: {body}");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn unreachable_endpoint_is_http_error() {
    let client = test_client("http://127.0.0.1:1");
    let result = client.extract_location("anything").await;
    assert!(
        matches!(result, Err(LlmError::Http(_))),
        "expected Http, got: {result:?}"
    );
}
