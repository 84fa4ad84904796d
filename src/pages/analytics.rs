//! Catalog analytics page.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::brand_card::BrandCard;
use crate::net::api::{ApiError, fetch_analytics};
use crate::net::types::AnalyticsSnapshot;
use crate::state::analytics::AnalyticsView;

/// Analytics page. Fetches one snapshot per activation.
///
/// A failed fetch renders a terminal error with no retry; the aggregator only
/// runs on a decoded snapshot.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let analytics = LocalResource::new(|| async { dashboard_from_result(fetch_analytics().await) });

    view! {
        <div class="analytics-page">
            <Suspense fallback=move || {
                view! { <div class="analytics-page__loading">"Loading analytics..."</div> }
            }>
                {move || {
                    analytics
                        .get()
                        .map(|loaded| match loaded {
                            Some(dashboard) => view! { <AnalyticsDashboard dashboard=dashboard/> }.into_any(),
                            None => {
                                view! {
                                    <div class="analytics-page__error">
                                        "Error loading analytics. Please try again."
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Aggregate a fetched snapshot, or log the failure and yield `None` for the
/// terminal error state.
fn dashboard_from_result(result: Result<AnalyticsSnapshot, ApiError>) -> Option<AnalyticsView> {
    match result {
        Ok(snapshot) => Some(AnalyticsView::from_snapshot(&snapshot)),
        Err(e) => {
            warn!("analytics fetch failed: {e}");
            None
        }
    }
}

/// Metric cards and the top-brands grid for a loaded snapshot.
#[component]
fn AnalyticsDashboard(dashboard: AnalyticsView) -> impl IntoView {
    view! {
        <header class="analytics-page__header">
            <h1>"Furniture Analytics Dashboard"</h1>
            <p>"Insights into our furniture catalog"</p>
        </header>

        <section class="analytics-page__metrics">
            <div class="metric-card">
                <h3>{dashboard.total_products}</h3>
                <p>"Total Products"</p>
            </div>
            <div class="metric-card">
                <h3>{dashboard.avg_price_label}</h3>
                <p>"Average Price"</p>
            </div>
            <div class="metric-card">
                <h3>{dashboard.active_brands}</h3>
                <p>"Active Brands"</p>
            </div>
        </section>

        <section class="analytics-page__brands">
            <h2>"Top Brands"</h2>
            <div class="analytics-page__brand-grid">
                {dashboard
                    .brands
                    .into_iter()
                    .map(|bar| view! { <BrandCard bar=bar/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
