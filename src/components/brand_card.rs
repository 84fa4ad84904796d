//! Brand card with a proportional count bar.

use leptos::prelude::*;

use crate::state::analytics::BrandBar;

#[component]
pub fn BrandCard(bar: BrandBar) -> impl IntoView {
    let width = bar.width();
    view! {
        <div class="brand-card">
            <div class="brand-card__name">{bar.brand}</div>
            <div class="brand-card__count">{format!("{} products", bar.count)}</div>
            <div class="brand-card__bar">
                <div class="brand-card__fill" style:width=width></div>
            </div>
        </div>
    }
}
