//! REST helpers for the content API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since content
//! is fetched after hydration, never during server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result` so callers can degrade to an inline message.
//! Error bodies are never parsed; a non-2xx status is reported as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactMessage, Post, Project};

/// Backend address used when `FOLIO_API_URL` is unset or malformed.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Failure modes of a content API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Normalize a configured API base address.
///
/// Trims whitespace and trailing slashes. Anything that is empty or not an
/// `http(s)://` URL falls back to [`DEFAULT_API_BASE`].
pub fn resolve_api_base(raw: Option<&str>) -> String {
    let Some(value) = raw.map(str::trim) else {
        return DEFAULT_API_BASE.to_owned();
    };
    let value = value.trim_end_matches('/');
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    let has_host = value.split_once("://").is_some_and(|(_, host)| !host.is_empty());
    if has_scheme && has_host {
        value.to_owned()
    } else {
        DEFAULT_API_BASE.to_owned()
    }
}

/// API base address baked in at build time from `FOLIO_API_URL`.
pub fn api_base() -> String {
    resolve_api_base(option_env!("FOLIO_API_URL"))
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}/api/{path}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn projects_endpoint(base: &str) -> String {
    endpoint(base, "projects")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn posts_endpoint(base: &str) -> String {
    endpoint(base, "posts")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn contact_endpoint(base: &str) -> String {
    endpoint(base, "contact")
}

/// Map an HTTP status to the uniform success/failure contract.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the project collection from `GET /api/projects`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not decode as a project list.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&projects_endpoint(&api_base())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the post collection from `GET /api/posts`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not decode as a post list.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&posts_endpoint(&api_base())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Send a contact message via `POST /api/contact`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request cannot be sent or the server
/// responds with a non-2xx status.
pub async fn submit_contact(message: ContactMessage) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&contact_endpoint(&api_base()))
            .json(&message)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ApiError::Unavailable)
    }
}
