use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Identifier for one proxied exchange, used in log lines.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Client-supplied `x-request-id`, then `x-correlation-id`, else a fresh UUID.
fn incoming_id(headers: &HeaderMap) -> Option<HeaderValue> {
    [REQUEST_ID_HEADER, CORRELATION_ID_HEADER]
        .into_iter()
        .filter_map(|name| headers.get(name))
        .find(|value| value.to_str().map(|v| !v.is_empty()).unwrap_or(false))
        .cloned()
}

/// Stamps the id onto the request itself, so the upstream sees the same
/// `x-request-id` that is echoed back to the browser.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let value = incoming_id(req.headers()).unwrap_or_else(|| {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
    });
    let id = value.to_str().unwrap_or_default().to_string();

    req.headers_mut().insert(header.clone(), value.clone());
    req.extensions_mut().insert(RequestId(id));

    let mut response = next.run(req).await;
    response.headers_mut().insert(header, value);
    response
}
