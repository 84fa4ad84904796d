//! Client configuration constants.
//!
//! The API origin is fixed at build time. Leaving `FURNITURE_API_BASE` unset
//! targets the same origin that served the page (`/api/...`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Number of products requested per recommendation query.
pub const RECOMMEND_TOP_K: usize = 3;

/// Maximum number of brand cards shown on the analytics view.
pub const TOP_BRANDS_LIMIT: usize = 10;

/// Image shown when a product has no usable image reference.
pub const FALLBACK_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// API origin without a trailing slash, e.g. `http://localhost:8000`.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("FURNITURE_API_BASE").unwrap_or_default())
}

fn normalize_base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}
