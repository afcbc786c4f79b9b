#![allow(dead_code)]
use axum::{body::Body, http::Request, response::Response, Router};
use graphx_proxy::{app::build_router, config::Config, state::AppState};
use std::{collections::HashMap, fs, path::Path};
use tower::ServiceExt;

pub fn test_config(target: &str, static_dir: &Path) -> Config {
    let mut env = HashMap::new();
    env.insert("PROXY_TARGET", target.to_string());
    env.insert("PROXY_STATIC_DIR", static_dir.display().to_string());
    env.insert("PROXY_TIMEOUT_SECS", "5".to_string());
    Config::from_lookup(|key| env.get(key).cloned()).expect("test config")
}

pub fn test_app(config: Config) -> Router {
    build_router(AppState::new(config).expect("app state"))
}

pub fn write_dist(dir: &Path) {
    fs::write(dir.join("index.html"), "<html><body>graphx-shell</body></html>").unwrap();
    fs::write(dir.join("app.js"), "console.log('graphx');").unwrap();
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
