use super::*;
use axum::http::HeaderValue;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}")
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let cookie = headers.get("cookie").and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
    let payload = json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "cookie": cookie,
        "body": String::from_utf8_lossy(&body),
    });
    let mut out = HeaderMap::new();
    out.append("set-cookie", HeaderValue::from_static("token=abc; Path=/"));
    out.append("set-cookie", HeaderValue::from_static("theme=dark; Path=/"));
    (StatusCode::CREATED, out, Json(payload)).into_response()
}

fn upstream_app() -> Router {
    Router::new()
        .route("/api/{*rest}", any(echo))
        .route("/health", get(|| async { "up" }))
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn url_joins_base_and_path() {
    assert_eq!(upstream_url("http://h/api", "employee/all", None), "http://h/api/employee/all");
    assert_eq!(upstream_url("http://h/api/", "/user/me", None), "http://h/api/user/me");
}

#[test]
fn url_keeps_query_and_drops_empty_one() {
    assert_eq!(upstream_url("http://h/api", "employee/all", Some("page=2")), "http://h/api/employee/all?page=2");
    assert_eq!(upstream_url("http://h/api", "employee/all", Some("")), "http://h/api/employee/all");
}

#[test]
fn forwarded_path_strips_prefix_and_keeps_encoding() {
    let uri: Uri = "/api/employee/a%3Fb%2Fc?x=1".parse().expect("uri");
    assert_eq!(forwarded_path(&uri), "/employee/a%3Fb%2Fc");
}

#[test]
fn hop_by_hop_headers_are_stripped() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("host", HeaderValue::from_static("example.com"));
    headers.insert("cookie", HeaderValue::from_static("token=abc"));
    headers.append("accept", HeaderValue::from_static("text/html"));
    headers.append("accept", HeaderValue::from_static("application/json"));

    let out = end_to_end_headers(&headers);
    assert!(out.get("connection").is_none());
    assert!(out.get("host").is_none());
    assert_eq!(out.get("cookie").map(HeaderValue::as_bytes), Some(&b"token=abc"[..]));
    assert_eq!(out.get_all("accept").iter().count(), 2);
}

// =============================================================================
// forwarding
// =============================================================================

#[tokio::test]
async fn forwards_request_and_relays_response() {
    let upstream = spawn(upstream_app()).await;
    let proxy = router(&format!("{upstream}/api"), Duration::from_secs(5)).expect("proxy router");
    let host = spawn(proxy).await;

    let resp = reqwest::Client::new()
        .patch(format!("{host}/api/employee/e1?notify=true"))
        .header("cookie", "token=abc")
        .body(r#"{"fullName":"Ada"}"#)
        .send()
        .await
        .expect("proxied request");

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get_all("set-cookie").iter().count(), 2);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["method"], "PATCH");
    assert_eq!(body["uri"], "/api/employee/e1?notify=true");
    assert_eq!(body["cookie"], "token=abc");
    assert_eq!(body["body"], r#"{"fullName":"Ada"}"#);
}

#[tokio::test]
async fn encoded_path_segments_reach_upstream_unchanged() {
    let upstream = spawn(upstream_app()).await;
    let proxy = router(&format!("{upstream}/api"), Duration::from_secs(5)).expect("proxy router");
    let host = spawn(proxy).await;

    let resp = reqwest::get(format!("{host}/api/employee/a%3Fb%2Fc")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["uri"], "/api/employee/a%3Fb%2Fc");
}

#[tokio::test]
async fn only_api_paths_are_proxied() {
    let upstream = spawn(upstream_app()).await;
    let proxy = router(&format!("{upstream}/api"), Duration::from_secs(5)).expect("proxy router");
    let host = spawn(proxy).await;

    let resp = reqwest::get(format!("{host}/health")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let dead = listener.local_addr().expect("addr");
    drop(listener);

    let proxy = router(&format!("http://{dead}/api"), Duration::from_secs(2)).expect("proxy router");
    let host = spawn(proxy).await;

    let resp = reqwest::get(format!("{host}/api/user/me")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body, json!({ "success": false, "message": UPSTREAM_UNAVAILABLE }));
}
