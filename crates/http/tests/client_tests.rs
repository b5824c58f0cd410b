//! Integration tests for the Photovault HTTP client

#![cfg(feature = "client")]

use photovault_http::client::{error::ClientError, VaultClient};
use photovault_http::types::{LoginRequest, RegisterRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = VaultClient::builder()
        .base_url("http://localhost:8080")
        .session_token("test-token")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = VaultClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_trims_trailing_slash() {
    let client = VaultClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_login_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(json!({
            "username": "alice",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc123"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let response = client
        .login(LoginRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "abc123");
}

#[tokio::test]
async fn test_login_rejected_surfaces_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid username or password"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let result = client
        .login(LoginRequest {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    match result {
        Err(ClientError::AuthenticationFailed(message)) => {
            assert_eq!(message, "Invalid username or password");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_validate_token_sends_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/validate"))
        .and(header("authorization", "Bearer session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": "Token is valid"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let valid = client.validate_token("session-abc").await.unwrap();
    assert!(valid);
}

#[tokio::test]
async fn test_validate_token_rejected_resolves_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Token is invalid"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let valid = client.validate_token("stale-token").await.unwrap();
    assert!(!valid);
}

#[tokio::test]
async fn test_validate_token_server_error_resolves_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/validate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let valid = client.validate_token("any-token").await.unwrap();
    assert!(!valid);
}

#[tokio::test]
async fn test_validate_token_unreachable_server_errors() {
    // Reserve an address with a throwaway listener, then free it so
    // nothing is accepting connections there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = VaultClient::new(format!("http://{addr}")).unwrap();

    let result = client.validate_token("any-token").await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}

#[tokio::test]
async fn test_validate_token_repeat_calls_agree() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": "Token is valid"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let first = client.validate_token("session-abc").await.unwrap();
    let second = client.validate_token("session-abc").await.unwrap();
    assert_eq!(first, second);
    assert!(first);
}

#[tokio::test]
async fn test_validate_session_sends_token_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/validate"))
        .and(body_json(json!({ "token": "session-abc" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": "Token is valid"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let valid = client.validate_session("session-abc").await.unwrap();
    assert!(valid);
}

#[tokio::test]
async fn test_validate_session_rejected_resolves_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Token is invalid"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let valid = client.validate_session("stale-token").await.unwrap();
    assert!(!valid);
}

#[tokio::test]
async fn test_register_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/new"))
        .and(body_json(json!({
            "username": "bob",
            "password": "correct horse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": "User created"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let result = client
        .register_user(RegisterRequest {
            username: "bob".to_string(),
            password: "correct horse".to_string(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_register_user_conflict_surfaces_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/new"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Username already taken"
        })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::new(mock_server.uri()).unwrap();

    let result = client
        .register_user(RegisterRequest {
            username: "bob".to_string(),
            password: "correct horse".to_string(),
        })
        .await;

    match result {
        Err(ClientError::BadRequest(message)) => {
            assert_eq!(message, "Username already taken");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticated_request_carries_session_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/photos"))
        .and(header("authorization", "Bearer session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "photos": [] })))
        .mount(&mock_server)
        .await;

    let client = VaultClient::builder()
        .base_url(mock_server.uri())
        .session_token("session-abc")
        .build()
        .unwrap();

    let request = client.request(reqwest::Method::GET, "/api/photos");
    let response: serde_json::Value = client.execute(request).await.unwrap();
    assert_eq!(response["photos"], json!([]));
}
