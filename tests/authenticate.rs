//! Wire-contract tests against a mock token endpoint.

use httpmock::prelude::*;
use serde_json::json;
use tracing_test::traced_test;

use tokengate::{AuthError, Authenticator, Config, Credentials, Session, SessionProperties};

fn config(server: &MockServer) -> Config {
    Config {
        server_token_endpoint: server.url("/users/sign_in"),
        ..Config::default()
    }
}

#[tokio::test]
async fn posts_credentials_under_default_resource_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/sign_in")
                .header("accept", "application/json")
                .header("content-type", "application/json")
                .json_body(json!({"user": {"email": "a@b.com", "password": "pw"}}));
            then.status(200)
                .json_body(json!({"user_token": "T", "user_email": "a@b.com"}));
        })
        .await;

    let authenticator = Authenticator::new(config(&server)).unwrap();
    let properties = authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .expect("Authentication should succeed");

    // Exactly one POST, with the exact body and headers above.
    mock.assert_async().await;
    assert_eq!(properties, SessionProperties::new("T", "a@b.com"));
}

#[tokio::test]
async fn resource_name_changes_body_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/sign_in")
                .json_body(json!({"account": {"email": "a@b.com", "password": "pw"}}));
            then.status(200)
                .json_body(json!({"user_token": "T", "user_email": "a@b.com"}));
        })
        .await;

    let config = Config {
        server_token_endpoint: server.url("/users/sign_in"),
        resource_name: "account".to_string(),
    };
    let authenticator = Authenticator::new(config).unwrap();
    authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .expect("Authentication should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn success_body_is_passed_through() {
    // Extra fields survive, and token presence is not validated on the
    // success path - only restore checks that.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/sign_in");
            then.status(200)
                .json_body(json!({"user_email": "a@b.com", "expires_in": 3600}));
        })
        .await;

    let authenticator = Authenticator::new(config(&server)).unwrap();
    let properties = authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .expect("Authentication should succeed");

    assert!(properties.token.is_empty());
    assert_eq!(properties.email, "a@b.com");
    assert_eq!(properties.extra["expires_in"], 3600);
}

#[tokio::test]
async fn rejected_credentials_carry_server_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/sign_in");
            then.status(401).json_body(json!({"error": "invalid"}));
        })
        .await;

    let authenticator = Authenticator::new(config(&server)).unwrap();
    let err = authenticator
        .authenticate(&Credentials::new("a@b.com", "wrong"))
        .await
        .unwrap_err();

    match err {
        AuthError::AuthenticationFailed { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, json!({"error": "invalid"}));
        }
        other => panic!("Expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_failure_body_surfaces_as_raw_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/sign_in");
            then.status(502).body("bad gateway");
        })
        .await;

    let authenticator = Authenticator::new(config(&server)).unwrap();
    let err = authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .unwrap_err();

    match err {
        AuthError::AuthenticationFailed { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, json!("bad gateway"));
        }
        other => panic!("Expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn success_with_non_json_body_is_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/sign_in");
            then.status(200).body("<html>welcome</html>");
        })
        .await;

    let authenticator = Authenticator::new(config(&server)).unwrap();
    let err = authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let config = Config {
        server_token_endpoint: "http://127.0.0.1:1/users/sign_in".to_string(),
        ..Config::default()
    };
    let authenticator = Authenticator::new(config).unwrap();
    let err = authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::NetworkError(_)));
}

#[traced_test]
#[tokio::test]
async fn warns_when_endpoint_is_not_https() {
    // The mock server only speaks plain HTTP, so the advisory fires.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/sign_in");
            then.status(200)
                .json_body(json!({"user_token": "T", "user_email": "a@b.com"}));
        })
        .await;

    let authenticator = Authenticator::new(config(&server)).unwrap();
    authenticator
        .authenticate(&Credentials::new("a@b.com", "pw"))
        .await
        .expect("Authentication should succeed");

    assert!(logs_contain("insecure connection"));
}

#[tokio::test]
async fn authorized_request_carries_token_header() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/sign_in");
            then.status(200)
                .json_body(json!({"user_token": "T", "user_email": "e@x.com"}));
        })
        .await;
    let data = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/profile")
                .header("authorization", "Token token=\"T\", user_email=\"e@x.com\"");
            then.status(200).json_body(json!({"ok": true}));
        })
        .await;

    let mut session = Session::new(config(&server)).unwrap();
    session
        .authenticate(&Credentials::new("e@x.com", "pw"))
        .await
        .expect("Authentication should succeed");
    assert!(session.is_authenticated());

    let client = reqwest::Client::new();
    let mut request = reqwest::Request::new(
        reqwest::Method::GET,
        server.url("/profile").parse().expect("Failed to parse URL"),
    );
    session.authorize(&mut request);

    let response = client.execute(request).await.expect("Request should send");
    assert!(response.status().is_success());
    data.assert_async().await;
}
