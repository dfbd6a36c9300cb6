use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholia_rest::{Anonymous, RestConfig, RestTransport, StaticToken};
use scholia_session::{Transport, TransportError};

fn conversation_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "GPA questions",
        "is_active": true,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:05:00Z",
        "messages": [
            {"id": "m1", "role": "user", "content": "hi",
             "tokens_used": null, "timestamp": "2024-05-01T10:00:01Z"}
        ]
    })
}

#[tokio::test]
async fn active_conversation_decodes_and_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chatbot/conversations/active/"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_json("c1")))
        .mount(&server)
        .await;

    let transport = RestTransport::new(
        RestConfig::new(server.uri()),
        StaticToken("sekrit".to_string()),
    );

    let conv = transport.active_conversation().await.unwrap();
    assert_eq!(conv.id, "c1");
    assert_eq!(conv.messages.len(), 1);
    assert!(!conv.messages[0].is_local());
}

#[tokio::test]
async fn unauthorized_maps_to_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chatbot/conversations/active/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let err = transport.active_conversation().await.unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn error_envelope_supplies_the_display_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/conversations/c1/send_message/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let err = transport.send_message("c1", "hi").await.unwrap_err();
    match err {
        TransportError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chatbot/conversations/c1/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let err = transport.conversation("c1").await.unwrap_err();
    match err {
        TransportError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn send_message_posts_the_expected_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/conversations/c1/send_message/"))
        .and(body_json(json!({"message": "hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_json("c1")))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let conv = transport.send_message("c1", "hi").await.unwrap();
    assert_eq!(conv.id, "c1");
}

#[tokio::test]
async fn create_conversation_posts_an_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/conversations/"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_json("c9")))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let conv = transport.create_conversation().await.unwrap();
    assert_eq!(conv.id, "c9");
}

#[tokio::test]
async fn list_conversations_decodes_the_pagination_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chatbot/conversations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [conversation_json("c1")]
        })))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let page = transport.list_conversations().await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, "c1");
}

#[tokio::test]
async fn decode_failure_is_distinct_from_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chatbot/conversations/active/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let transport = RestTransport::new(RestConfig::new(server.uri()), Anonymous);

    let err = transport.active_conversation().await.unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}
