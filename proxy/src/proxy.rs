use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{
        header::{self, HeaderMap, HeaderName},
        uri::PathAndQuery,
    },
    response::Response,
};
use http_body_util::LengthLimitError;
use url::Url;

use crate::{error::AppError, state::AppState};

/// A path prefix that is forwarded to the upstream origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    pub prefix: String,
    /// Remove `prefix` from the path before forwarding.
    pub strip_prefix: bool,
}

impl ProxyRule {
    pub fn new(prefix: impl Into<String>, strip_prefix: bool) -> Self {
        Self {
            prefix: prefix.into(),
            strip_prefix,
        }
    }

    /// Prefix match on a segment boundary: `/api` and `/api/x` match, `/apix` does not.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Maps an incoming path-and-query onto the upstream path-and-query.
    pub fn rewrite(&self, path_and_query: &str) -> String {
        if !self.strip_prefix {
            return path_and_query.to_string();
        }
        let rest = path_and_query
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(path_and_query);
        if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{}", rest)
        }
    }
}

pub fn default_rules() -> Vec<ProxyRule> {
    vec![ProxyRule::new("/api", true), ProxyRule::new("/auth", false)]
}

pub fn find_rule<'a>(rules: &'a [ProxyRule], path: &str) -> Option<&'a ProxyRule> {
    rules.iter().find(|rule| rule.matches(path))
}

pub fn upstream_url(target: &Url, path_and_query: &str) -> Result<Url, AppError> {
    let base = target.as_str().trim_end_matches('/');
    Url::parse(&format!("{}{}", base, path_and_query))
        .map_err(|err| AppError::BadRequest(format!("Invalid upstream path: {}", err)))
}

const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copies end-to-end headers, dropping hop-by-hop ones and any listed in `Connection`.
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let connection_listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || connection_listed.iter().any(|c| c == name.as_str()) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn upstream_request_headers(incoming: &HeaderMap, change_origin: bool) -> HeaderMap {
    let mut headers = end_to_end_headers(incoming);
    headers.remove(header::CONTENT_LENGTH);
    if change_origin {
        // reqwest fills Host from the upstream URL.
        headers.remove(header::HOST);
    }
    headers
}

fn request_body_error(err: axum::Error, limit: usize) -> AppError {
    let inner = err.into_inner();
    if inner.downcast_ref::<LengthLimitError>().is_some() {
        AppError::PayloadTooLarge(format!("Request body exceeds {} bytes", limit))
    } else {
        AppError::BadRequest(format!("Failed to read request body: {}", inner))
    }
}

pub async fn forward(state: &AppState, rule: &ProxyRule, req: Request) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or("/");
    let upstream_path = rule.rewrite(path_and_query);
    let url = upstream_url(&state.config.target, &upstream_path)?;

    let body = to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|err| request_body_error(err, state.config.max_body_bytes))?;
    let headers = upstream_request_headers(&parts.headers, state.config.change_origin);

    tracing::debug!(
        method = %parts.method,
        from = path_and_query,
        to = %url,
        "Forwarding request upstream"
    );

    let upstream = state
        .client
        .request(parts.method, url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
