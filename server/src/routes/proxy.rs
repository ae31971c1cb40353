//! Same-origin reverse proxy for the remote employee API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client sends credentialed requests with a session cookie.
//! Forwarding `/api/*` through this host keeps those requests same-origin,
//! so cookies set by the upstream (`set-cookie`) are stored for this host.
//! Method, query, body and end-to-end headers pass through unchanged.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use serde::Serialize;

/// Largest request body forwarded (bulk imports carry spreadsheets).
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub const UPSTREAM_UNAVAILABLE: &str = "Upstream API unavailable";

/// Mount point of the proxy on this host; stripped before forwarding.
pub const API_PREFIX: &str = "/api";

/// Headers scoped to a single connection; never forwarded in either
/// direction. `host` and `content-length` are recomputed by the client.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to build upstream client: {0}")]
    ClientBuild(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        let body = ErrorBody { success: false, message: UPSTREAM_UNAVAILABLE };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

#[derive(Clone)]
struct ProxyState {
    http: reqwest::Client,
    upstream: Arc<str>,
}

/// Routes `ANY /api/{*path}` to `upstream`.
///
/// # Errors
///
/// Returns [`ProxyError::ClientBuild`] if the HTTP client cannot be built.
pub fn router(upstream: &str, timeout: Duration) -> Result<Router, ProxyError> {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
    let state = ProxyState { http, upstream: Arc::from(upstream.trim_end_matches('/')) };

    Ok(Router::new()
        .route(&format!("{API_PREFIX}/{{*path}}"), any(forward))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state))
}

/// Path below [`API_PREFIX`], still percent-encoded as received.
pub fn forwarded_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix(API_PREFIX).unwrap_or(path)
}

/// Target URL for a proxied request.
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    let base = upstream.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy `headers` minus hop-by-hop entries, keeping repeated values.
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, forwarded_path(&uri), uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(method, &url)
        .headers(end_to_end_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let body = upstream.bytes().await?;
    tracing::debug!(%status, %url, bytes = body.len(), "api response relayed");

    Ok((status, headers, body).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
