//! `/api/*` forwarder to the backend service.
//!
//! DESIGN
//! ======
//! The browser talks to the same origin that served the page; this handler
//! relays each call to `BACKEND_URL` unchanged apart from a header allowlist.
//! Backend statuses (including 4xx/5xx) pass through as-is. Only a transport
//! failure is answered locally, with a 502 envelope.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers relayed to the backend.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Backend URL for an incoming `/api/...` request.
///
/// Path and query are taken from the raw request URI so percent-encoded
/// segments (`%2F`, `%3F`) reach the backend exactly as the browser sent them.
pub fn upstream_url(backend: &str, uri: &Uri) -> String {
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path()).trim_start_matches('/');
    let mut url = format!("{backend}/api/{path}");
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Copy the allowlisted headers out of an incoming request.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = incoming.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.backend_url, &uri);
    match relay(&state, method.clone(), &url, forwarded_headers(&headers), body).await {
        Ok(response) => {
            tracing::debug!(%method, %url, status = response.status().as_u16(), "forwarded");
            response
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend unavailable");
            e.into_response()
        }
    }
}

async fn relay(
    state: &AppState,
    method: Method,
    url: &str,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let upstream = state
        .http
        .request(method, url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::Transport(e.to_string()))?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
