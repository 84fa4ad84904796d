//! REST API helpers for the recommendation service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native test builds: every call fails with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Transport failures,
//! non-2xx statuses, and undecodable bodies are kept apart in [`ApiError`] so
//! logs say which one happened; the UI collapses them into one message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalyticsSnapshot, RawProduct};
#[cfg(feature = "hydrate")]
use super::types::RecommendResponse;
use crate::config;

/// Failure talking to the recommendation service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("http client not available outside the browser")]
    Unavailable,
}

/// Source of product recommendations.
pub trait RecommendationService {
    /// Fetch up to `top_k` products matching a free-text query.
    fn recommend(&self, query: &str, top_k: usize) -> impl Future<Output = Result<Vec<RawProduct>, ApiError>>;
}

/// [`RecommendationService`] backed by `GET /api/recommend`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpService {
    base: String,
}

impl HttpService {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for HttpService {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

impl RecommendationService for HttpService {
    async fn recommend(&self, query: &str, top_k: usize) -> Result<Vec<RawProduct>, ApiError> {
        let url = recommend_endpoint(&self.base, query, top_k);
        #[cfg(feature = "hydrate")]
        {
            let body: RecommendResponse = get_json(&url).await?;
            Ok(body.products)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}

/// Fetch the catalog summary from `GET /api/analytics`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a usable snapshot.
pub async fn fetch_analytics() -> Result<AnalyticsSnapshot, ApiError> {
    let url = analytics_endpoint(config::api_base());
    #[cfg(feature = "hydrate")]
    {
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

fn recommend_endpoint(base: &str, query: &str, top_k: usize) -> String {
    format!("{base}/api/recommend?query={}&top_k={top_k}", urlencoding::encode(query))
}

fn analytics_endpoint(base: &str) -> String {
    format!("{base}/api/analytics")
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
