//! HTTP helpers for the backend JSON API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup; authenticated variants attach the session token and anti-forgery
//! header, and every request includes cookies.
//!
//! A 401 on any authenticated request is the only way token staleness is ever
//! discovered: the stored session is cleared and the browser is sent to the
//! login screen.

use super::{config::AppConfig, errors::AppError};
use crate::features::auth::{csrf, storage};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;
/// Where expired sessions are sent.
const LOGIN_PATH: &str = "/login";

/// Fetches JSON from an authenticated endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let headers = session_headers();
    let response = send_with_timeout(move |signal| {
        let builder = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        apply_headers(builder, &headers)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let response = guard_unauthorized(response)?;
    handle_json_response(response).await
}

/// Posts JSON to an authenticated endpoint and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_authenticated_with_body(path, body, Request::post).await?;
    handle_json_response(response).await
}

/// Puts JSON to an authenticated endpoint and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_authenticated_with_body(path, body, Request::put).await?;
    handle_json_response(response).await
}

/// Deletes an authenticated resource; the response body is ignored.
pub async fn delete_resource(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let mut headers = session_headers();
    if let Some(token) = csrf::ensure_csrf_token().await {
        headers.push((csrf::CSRF_HEADER.to_string(), token));
    }
    let response = send_with_timeout(move |signal| {
        let builder = Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        apply_headers(builder, &headers)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let response = guard_unauthorized(response)?;
    handle_empty_response(response).await
}

/// Posts an empty body to an authenticated endpoint, used to end a session.
pub async fn post_empty(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let mut headers = session_headers();
    if let Some(token) = csrf::ensure_csrf_token().await {
        headers.push((csrf::CSRF_HEADER.to_string(), token));
    }
    let response = send_with_timeout(move |signal| {
        let builder = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        apply_headers(builder, &headers)
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let response = guard_unauthorized(response)?;
    handle_empty_response(response).await
}

/// Fires a credentialed GET purely for its cookie side effect (the backend
/// sets the anti-forgery cookie on this call).
pub async fn get_for_cookie(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts JSON on an anonymous flow and returns the raw status and body so the
/// caller can classify the outcome itself. Extra headers carry the
/// anti-forgery token.
pub async fn post_json_for_status<B: Serialize>(
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(u16, String), AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let headers = headers.to_vec();
    let response = send_with_timeout(move |signal| {
        let builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        apply_headers(builder, &headers)
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok((status, body))
}

/// Extracts a display message from a backend error body, falling back when
/// the body is not the expected `{"error": ...}` / `{"detail": ...}` shape.
pub fn failure_message(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize, Default)]
    struct ErrorBody {
        error: Option<String>,
        detail: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .or(parsed.detail)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

async fn send_authenticated_with_body<B: Serialize>(
    path: &str,
    body: &B,
    method: fn(&str) -> RequestBuilder,
) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let mut headers = session_headers();
    headers.push(("Content-Type".to_string(), "application/json".to_string()));
    // The anti-forgery cookie fetch must settle before the dependent request
    // is sent; Django rejects unsafe methods without the header.
    if let Some(token) = csrf::ensure_csrf_token().await {
        headers.push((csrf::CSRF_HEADER.to_string(), token));
    }

    let response = send_with_timeout(move |signal| {
        let builder = method(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        apply_headers(builder, &headers)
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    guard_unauthorized(response)
}

/// Session token header for authenticated requests. The backend uses the
/// `Token` scheme, not `Bearer`.
fn session_headers() -> Vec<(String, String)> {
    let mut headers = Vec::new();
    if let Some(token) = storage::session_store().get().token {
        headers.push(("Authorization".to_string(), format!("Token {token}")));
    }
    headers
}

fn apply_headers(mut builder: RequestBuilder, headers: &[(String, String)]) -> RequestBuilder {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Clears the stored session and forces the login screen when an
/// authenticated request comes back 401.
fn guard_unauthorized(response: Response) -> Result<Response, AppError> {
    if response.status() != 401 {
        return Ok(response);
    }

    storage::session_store().clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
    Err(AppError::Http {
        status: 401,
        message: "Your session has expired. Please sign in again.".to_string(),
    })
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
