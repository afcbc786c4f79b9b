#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_urls(server.url("/api"), server.url("/auth"))
}

#[tokio::test]
async fn get_me_unwraps_user_envelope() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/auth/me").header_exists("x-request-id");
        then.status(200)
            .json_body(json!({ "user": { "_id": "u1", "name": "Ada", "email": "ada@graphx.io" } }));
    });

    let user = client_for(&server).get_me().await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.display_name(), "Ada");
}

#[tokio::test]
async fn get_me_maps_unauthorized_to_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/auth/me");
        then.status(401).json_body(json!({ "message": "Not authenticated" }));
    });

    let err = client_for(&server).get_me().await.unwrap_err();
    assert_eq!(err.error, "Not authenticated");
}

#[tokio::test]
async fn login_posts_credentials() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({ "email": "ada@graphx.io", "password": "secret" }));
        then.status(200).json_body(json!({ "id": "u1", "email": "ada@graphx.io" }));
    });

    let user = client_for(&server)
        .login(&LoginRequest {
            email: "ada@graphx.io".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(user.email, "ada@graphx.io");
    mock.assert();
}

#[tokio::test]
async fn register_and_logout_accept_empty_bodies() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/register");
        then.status(201);
    });
    server.mock(|when, then| {
        when.method(POST).path("/auth/logout");
        then.status(204);
    });

    let client = client_for(&server);
    client
        .register(&RegisterRequest {
            name: "Ada".into(),
            email: "ada@graphx.io".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    client.logout().await.unwrap();
}

#[tokio::test]
async fn error_without_json_body_falls_back_to_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/subscription");
        then.status(502).body("Bad Gateway");
    });

    let err = client_for(&server).get_subscription().await.unwrap_err();
    assert_eq!(err.code, "HTTP_502");
}

#[tokio::test]
async fn get_subscription_reads_plan() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/subscription");
        then.status(200)
            .json_body(json!({ "subscription": { "plan": "pro", "status": "active" } }));
    });

    let response = client_for(&server).get_subscription().await.unwrap();
    assert!(response.has_active_plan());
    assert_eq!(
        response.subscription.and_then(|s| s.status).as_deref(),
        Some("active")
    );
}

#[tokio::test]
async fn transport_failure_is_request_failed() {
    let client = ApiClient::new_with_base_urls("http://127.0.0.1:9/api", "http://127.0.0.1:9/auth");
    let err = client.get_subscription().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
