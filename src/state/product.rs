//! Render-safe product records.
//!
//! `normalize` maps a [`RawProduct`] into a [`Product`] whose fields can be
//! shown as-is: the image always resolves to something loadable, sentinel
//! values are dropped, and display text is pre-truncated.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::collections::HashSet;

use crate::config::FALLBACK_IMAGE;
use crate::net::types::RawProduct;

/// Placeholder the catalog pipeline writes for unknown attributes.
pub const SENTINEL: &str = "N/A";

/// Marker appended to truncated display text.
pub const ELLIPSIS: &str = "...";

pub const TITLE_DISPLAY_CHARS: usize = 60;
pub const DESCRIPTION_DISPLAY_CHARS: usize = 100;

/// A normalized catalog item.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: Option<String>,
    pub title: String,
    /// First [`TITLE_DISPLAY_CHARS`] characters of `title` plus [`ELLIPSIS`].
    pub display_title: String,
    pub brand: String,
    /// Non-negative; `0.0` means the price is unknown.
    pub price: f64,
    /// Resolved image URL, or [`FALLBACK_IMAGE`].
    pub image: String,
    pub material: Option<String>,
    pub color: Option<String>,
    /// Truncated AI description, present only when the service supplied one.
    pub display_description: Option<String>,
    /// Clamped to `[0, 1]`.
    pub similarity_score: Option<f64>,
}

impl Product {
    /// `$X.XX` when the price is known.
    pub fn price_label(&self) -> Option<String> {
        (self.price > 0.0).then(|| format!("${:.2}", self.price))
    }

    /// Similarity as a whole-number percentage.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn match_percent(&self) -> Option<u32> {
        self.similarity_score.map(|score| (score * 100.0).round() as u32)
    }

    pub fn match_label(&self) -> Option<String> {
        self.match_percent().map(|pct| format!("{pct}% Match"))
    }
}

/// Stable keys for rendering a product list.
///
/// A product keys on its catalog `id`. Products without an id, or whose id
/// already appeared earlier in the list, key on their position (`#<index>`).
pub fn render_keys(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(products.len());
    products
        .iter()
        .enumerate()
        .map(|(index, product)| match product.id.as_deref() {
            Some(id) if seen.insert(id) => id.to_owned(),
            _ => format!("#{index}"),
        })
        .collect()
}

/// Map a raw catalog item into its render-safe form. Never fails.
pub fn normalize(raw: RawProduct) -> Product {
    let title = raw.title.unwrap_or_default();
    let display_title = truncate_with_ellipsis(&title, TITLE_DISPLAY_CHARS);
    let display_description = raw
        .ai_description
        .as_deref()
        .map(|text| truncate_with_ellipsis(text, DESCRIPTION_DISPLAY_CHARS));

    Product {
        id: raw.id,
        display_title,
        title,
        brand: raw.brand.unwrap_or_default(),
        price: raw.price.filter(|p| *p > 0.0).unwrap_or(0.0),
        image: resolve_image(raw.image.as_deref()),
        material: displayable_attribute(raw.material),
        color: displayable_attribute(raw.color),
        display_description,
        similarity_score: raw.similarity_score.map(|s| s.clamp(0.0, 1.0)),
    }
}

/// Resolve a raw image field to a usable URL.
///
/// The pipeline stores image lists as stringified Python lists, so bracket and
/// quote characters are stripped wherever they appear.
pub fn resolve_image(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return FALLBACK_IMAGE.to_owned();
    };
    if raw == SENTINEL {
        return FALLBACK_IMAGE.to_owned();
    }
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '[' | ']' | '\'' | '"')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == SENTINEL {
        return FALLBACK_IMAGE.to_owned();
    }
    cleaned.to_owned()
}

/// Keep the first `max_chars` characters and append [`ELLIPSIS`].
///
/// The marker is appended even when nothing was cut; card layouts and
/// fixtures rely on the exact text.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

fn displayable_attribute(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let trimmed = v.trim();
        !trimmed.is_empty() && trimmed != SENTINEL
    })
}
