//! Thin HTTP wrapper around `gloo-net`.
//!
//! Every request goes to the fixed API base address and carries browser
//! credentials (cookies), so the server-side session follows the user.
//!
//! Client-side (hydrate): real `fetch` calls.
//! Server-side (SSR) and native tests: requests return
//! [`ApiError::Unavailable`] without touching the network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;

use super::error::ApiError;
use super::types::Envelope;

/// Base address used when `HRDESK_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// The API base address baked in at build time.
pub fn api_base_url() -> &'static str {
    match option_env!("HRDESK_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Join `base` and `path` with exactly one slash between them.
///
/// A trailing slash on `path` is kept (`/employee/` is a distinct route).
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for an API path.
#[must_use]
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

/// Decode a successful response body. Empty bodies decode as an empty envelope.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not a JSON envelope.
pub fn parse_envelope(body: &str) -> Result<Envelope, ApiError> {
    if body.trim().is_empty() {
        return Ok(Envelope::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a credentialed request with an optional JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server rejects it, or
/// the reply is not a JSON envelope.
pub async fn send_json<B: Serialize>(method: Method, path: &str, body: Option<&B>) -> Result<Envelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        log::debug!("{} {url}", method.as_str());
        let builder = request_builder(method, &url);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Send a credentialed request without a body.
///
/// # Errors
///
/// See [`send_json`].
pub async fn send(method: Method, path: &str) -> Result<Envelope, ApiError> {
    send_json::<()>(method, path, None).await
}

/// Upload one file as a `multipart/form-data` POST under form field `field`.
///
/// # Errors
///
/// See [`send_json`].
#[cfg(feature = "hydrate")]
pub async fn send_file(path: &str, field: &str, file: &web_sys::File) -> Result<Envelope, ApiError> {
    let url = endpoint(path);
    log::debug!("POST {url} (multipart, {})", file.name());
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(field, file, &file.name())
        .map_err(js_error)?;
    // The browser sets the multipart boundary header itself.
    let request = request_builder(Method::Post, &url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(resp).await
}

#[cfg(feature = "hydrate")]
fn request_builder(method: Method, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    };
    builder.credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
async fn read_envelope(resp: gloo_net::http::Response) -> Result<Envelope, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        log::warn!("request rejected with status {status}");
        return Err(ApiError::rejected(status, &body));
    }
    parse_envelope(&body)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}
