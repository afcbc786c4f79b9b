use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use httpmock::prelude::*;

mod support;

#[tokio::test]
async fn api_prefix_is_stripped_before_forwarding() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/subscription").query_param("expand", "plan");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "subscription": { "plan": "pro" } }));
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(&upstream.base_url(), dist.path()));
    let response = support::send(
        app,
        Request::builder()
            .uri("/api/subscription?expand=plan")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_string(response).await;
    assert!(body.contains("\"pro\""));
    mock.assert_async().await;
}

#[tokio::test]
async fn auth_prefix_is_forwarded_unchanged_with_body() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "email": "a@b.c", "password": "pw" }));
            then.status(200)
                .header("set-cookie", "session=abc; Path=/; HttpOnly")
                .json_body(serde_json::json!({ "user": { "id": "u1" } }));
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(&upstream.base_url(), dist.path()));
    let response = support::send(
        app,
        Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"email":"a@b.c","password":"pw"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("set-cookie").unwrap(),
        "session=abc; Path=/; HttpOnly"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn host_header_is_rewritten_to_target() {
    let upstream = MockServer::start_async().await;
    let expected_host = format!("127.0.0.1:{}", upstream.port());
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/auth/me").header("host", expected_host.as_str());
            then.status(200).json_body(serde_json::json!({ "id": "u1" }));
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(&upstream.base_url(), dist.path()));
    let response = support::send(
        app,
        Request::builder()
            .uri("/auth/me")
            .header("host", "localhost:5173")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_status_is_passed_through() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/subscription");
            then.status(401).json_body(serde_json::json!({ "error": "not logged in" }));
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(&upstream.base_url(), dist.path()));
    let response = support::send(
        app,
        Request::builder()
            .uri("/api/subscription")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = support::body_string(response).await;
    assert!(body.contains("not logged in"));
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(
        &format!("http://127.0.0.1:{}", port),
        dist.path(),
    ));
    let response = support::send(
        app,
        Request::builder()
            .uri("/api/subscription")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = support::body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], "BAD_GATEWAY");
}

#[tokio::test]
async fn large_upstream_error_body_is_forwarded_intact() {
    let upstream = MockServer::start_async().await;
    let big = "e".repeat(100 * 1024);
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/charts");
            then.status(500).body(big.as_str());
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(&upstream.base_url(), dist.path()));
    let response = support::send(
        app,
        Request::builder().uri("/api/charts").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = support::body_string(response).await;
    assert_eq!(body.len(), 100 * 1024);
}

#[tokio::test]
async fn preflight_reaches_upstream_untouched() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(OPTIONS)
                .path("/auth/login")
                .header("access-control-request-method", "POST");
            then.status(204)
                .header("access-control-allow-origin", "http://localhost:5173")
                .header("access-control-allow-credentials", "true");
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let app = support::test_app(support::test_config(&upstream.base_url(), dist.path()));
    let response = support::send(
        app,
        Request::builder()
            .method("OPTIONS")
            .uri("/auth/login")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn oversized_request_body_is_rejected_with_413() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200);
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let mut config = support::test_config(&upstream.base_url(), dist.path());
    config.max_body_bytes = 16;
    let app = support::test_app(config);
    let response = support::send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .body(Body::from(vec![b'x'; 64]))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json: serde_json::Value =
        serde_json::from_str(&support::body_string(response).await).unwrap();
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn silent_upstream_times_out_with_504() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(std::time::Duration::from_secs(3));
        })
        .await;

    let dist = tempfile::tempdir().unwrap();
    let mut config = support::test_config(&upstream.base_url(), dist.path());
    config.upstream_timeout = std::time::Duration::from_millis(300);
    let app = support::test_app(config);
    let response = support::send(
        app,
        Request::builder().uri("/api/slow").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}
