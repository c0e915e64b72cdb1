//! HTTP plumbing for the external JobTrack REST API.
//!
//! DESIGN
//! ======
//! One configured base URL; every outgoing request carries
//! `Authorization: Bearer <access>` exactly when an access token is present in
//! durable storage and the path is not on the unauthenticated allow-list.
//! Failures are mapped to [`ApiError`] with a human-readable message pulled
//! from the JSON error body when one is present; callers own the user-facing
//! messaging.
//!
//! Real requests go through `gloo-net` and only exist on the wasm target; the
//! native fallbacks return [`ApiError::Unsupported`] so the crate (and its
//! tests) build on the host.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Endpoints that must never carry an `Authorization` header, matched by
/// substring against the request path.
const AUTH_ENDPOINTS: [&str; 4] = [
    "/users/register/",
    "/auth/login/",
    "/auth/token/",
    "/users/verify-email/",
];

/// Base URL of the remote API, overridable at build time.
pub fn base_url() -> &'static str {
    option_env!("JOBTRACK_API_URL").unwrap_or("/api")
}

/// Error taxonomy for API calls. Every variant is locally recoverable; the
/// caller surfaces the message and leaves its view state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Designated hook for reacting globally to `401 Unauthorized` responses.
///
/// Deliberately a no-op: the upstream contract leaves token refresh
/// unresolved, so expired credentials surface to callers as ordinary
/// [`ApiError::Http`] failures.
fn on_unauthorized() {}

pub(crate) fn is_auth_endpoint(path: &str) -> bool {
    AUTH_ENDPOINTS.iter().any(|endpoint| path.contains(endpoint))
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract a human-readable message from a JSON error body: `detail`, then
/// `message`, then the first entry of any field-error array, then a generic
/// fallback naming the status code.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(serde_json::Value::as_str) {
            return detail.to_owned();
        }
        if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
            return message.to_owned();
        }
        if let Some(map) = value.as_object() {
            for field in map.values() {
                let first = field
                    .as_array()
                    .and_then(|entries| entries.first())
                    .and_then(serde_json::Value::as_str);
                if let Some(first) = first {
                    return first.to_owned();
                }
            }
        }
    }
    format!("Request failed (HTTP {status})")
}

/// Percent-encode a single query-string component.
pub(crate) fn encode_component(raw: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};

    use super::{ApiError, base_url, bearer, error_message, is_auth_endpoint, on_unauthorized};
    use crate::state::session::ACCESS_KEY;
    use crate::util::storage;

    fn url(path: &str) -> String {
        format!("{}{}", base_url(), path)
    }

    fn with_auth(builder: RequestBuilder, path: &str) -> RequestBuilder {
        if is_auth_endpoint(path) {
            return builder;
        }
        match storage::get_item(ACCESS_KEY) {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        if status == 401 {
            on_unauthorized();
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: error_message(status, &body),
        })
    }

    pub async fn get(path: &str) -> Result<Response, ApiError> {
        let resp = with_auth(Request::get(&url(path)), path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    pub async fn send_json<B: serde::Serialize>(
        put: bool,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let builder = if put {
            Request::put(&url(path))
        } else {
            Request::post(&url(path))
        };
        let resp = with_auth(builder, path)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    pub async fn post_empty(path: &str) -> Result<Response, ApiError> {
        let resp = with_auth(Request::post(&url(path)), path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    pub async fn delete(path: &str) -> Result<Response, ApiError> {
        let resp = with_auth(Request::delete(&url(path)), path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    pub async fn json_of<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::json_of(browser::get(path).await?).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

/// POST a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::json_of(browser::send_json(false, path, body).await?).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, body);
        Err(ApiError::Unsupported)
    }
}

/// POST a JSON body, discarding the response body.
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::send_json(false, path, body).await.map(|_| ())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, body);
        Err(ApiError::Unsupported)
    }
}

/// POST with no body, discarding the response body.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::post_empty(path).await.map(|_| ())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

/// PUT a JSON body and decode the JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::json_of(browser::send_json(true, path, body).await?).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, body);
        Err(ApiError::Unsupported)
    }
}

/// DELETE a resource, discarding the response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::delete(path).await.map(|_| ())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}
