use axum::{
    body::{to_bytes, Body, Bytes, HttpBody},
    http::{header::CONTENT_LENGTH, HeaderMap, Request},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

/// Logs every 4xx/5xx response, whether produced by the upstream or by the
/// proxy itself. Only bodies of known size up to `MAX_BUFFERED_BODY_BYTES`
/// are buffered for the log line; anything else streams through untouched.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let event = ErrorEvent {
        status: status.as_u16(),
        method: &method,
        uri: &uri,
        request_id: &request_id,
        latency_ms: start.elapsed().as_millis() as u64,
    };
    let (mut parts, body) = response.into_parts();
    if !fits_buffer(&parts.headers, &body) {
        event.log("<not buffered>", None);
        return Response::from_parts(parts, body);
    }
    match buffer_body(body).await {
        Ok((bytes, preview)) => {
            event.log(&preview, None);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            event.log("", Some(err));
            Response::from_parts(parts, Body::empty())
        }
    }
}

/// Size comes from `content-length` (proxied responses) or the body's exact size hint.
fn fits_buffer(headers: &HeaderMap, body: &Body) -> bool {
    let declared = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    match declared.or_else(|| body.size_hint().exact()) {
        Some(len) => len <= MAX_BUFFERED_BODY_BYTES as u64,
        None => false,
    }
}

async fn buffer_body(body: Body) -> Result<(Bytes, String), AxumError> {
    let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES).await?;
    Ok((bytes.clone(), preview(&bytes)))
}

fn preview(bytes: &Bytes) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        let slice = bytes.slice(0..MAX_LOGGED_BODY_BYTES);
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&slice),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

struct ErrorEvent<'a> {
    status: u16,
    method: &'a str,
    uri: &'a str,
    request_id: &'a str,
    latency_ms: u64,
}

impl ErrorEvent<'_> {
    fn log(&self, body_preview: &str, body_error: Option<AxumError>) {
        let ErrorEvent {
            status,
            method,
            uri,
            request_id,
            latency_ms,
        } = *self;

        if let Some(err) = body_error {
            tracing::warn!(
                status,
                method,
                uri,
                request_id,
                latency_ms,
                error = ?err,
                "Failed to read error response body"
            );
            return;
        }

        if status >= 500 {
            tracing::error!(
                status,
                method,
                uri,
                request_id,
                latency_ms,
                body = body_preview,
                "Request completed with error status"
            );
        } else {
            tracing::warn!(
                status,
                method,
                uri,
                request_id,
                latency_ms,
                body = body_preview,
                "Request completed with error status"
            );
        }
    }
}
