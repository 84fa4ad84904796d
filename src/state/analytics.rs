//! Derived values for the analytics view.
//!
//! All functions are pure over an [`AnalyticsSnapshot`]. Brand order is the
//! order the service listed them in; nothing here re-sorts.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::config::TOP_BRANDS_LIMIT;
use crate::net::types::{AnalyticsSnapshot, BrandCount};

/// Shown in place of a number that the snapshot does not provide.
pub const MISSING_VALUE: &str = "N/A";

/// Number of distinct brands in the snapshot.
pub fn active_brand_count(snapshot: &AnalyticsSnapshot) -> usize {
    snapshot.top_brands.len()
}

/// The first `n` brands in service order.
pub fn top_brands_ranked(snapshot: &AnalyticsSnapshot, n: usize) -> &[BrandCount] {
    let end = n.min(snapshot.top_brands.len());
    &snapshot.top_brands[..end]
}

/// Largest count across every brand in the snapshot, displayed or not.
pub fn max_brand_count(snapshot: &AnalyticsSnapshot) -> u64 {
    snapshot.top_brands.iter().map(|b| b.count).max().unwrap_or(0)
}

/// `count(brand) / max(count)`, always within `[0, 1]`.
///
/// Unknown brands, an empty histogram, and an all-zero histogram yield `0.0`.
pub fn bar_fill_ratio(snapshot: &AnalyticsSnapshot, brand: &str) -> f64 {
    let count = snapshot
        .top_brands
        .iter()
        .find(|b| b.brand == brand)
        .map_or(0, |b| b.count);
    ratio(count, max_brand_count(snapshot))
}

/// Average price as `X.XX`, or [`MISSING_VALUE`].
pub fn formatted_avg_price(snapshot: &AnalyticsSnapshot) -> String {
    snapshot
        .avg_price
        .map_or_else(|| MISSING_VALUE.to_owned(), |price| format!("{price:.2}"))
}

#[allow(clippy::cast_precision_loss)]
fn ratio(count: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (count as f64 / max as f64).clamp(0.0, 1.0)
}

/// One brand card on the analytics view.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandBar {
    pub brand: String,
    pub count: u64,
    pub ratio: f64,
}

impl BrandBar {
    /// CSS width for the bar fill, e.g. `60.0%`.
    pub fn width(&self) -> String {
        format!("{:.1}%", self.ratio * 100.0)
    }
}

/// Everything the analytics view renders, computed once per snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsView {
    pub total_products: u64,
    /// `$X.XX`, or [`MISSING_VALUE`] without a currency sign.
    pub avg_price_label: String,
    pub active_brands: usize,
    pub brands: Vec<BrandBar>,
}

impl AnalyticsView {
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        let max = max_brand_count(snapshot);
        let brands = top_brands_ranked(snapshot, TOP_BRANDS_LIMIT)
            .iter()
            .map(|b| BrandBar { brand: b.brand.clone(), count: b.count, ratio: ratio(b.count, max) })
            .collect();
        let avg_price_label = match snapshot.avg_price {
            Some(_) => format!("${}", formatted_avg_price(snapshot)),
            None => MISSING_VALUE.to_owned(),
        };

        Self {
            total_products: snapshot.total_products,
            avg_price_label,
            active_brands: active_brand_count(snapshot),
            brands,
        }
    }
}
