//! Card rendering one recommended product.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::config::FALLBACK_IMAGE;
use crate::state::product::Product;

/// Product card with image, match badge, price, and attribute chips.
///
/// Optional lines (price, description, material, color, badge) are omitted
/// entirely when the normalized record has nothing to show.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image = RwSignal::new(product.image.clone());
    let on_image_error = move |_| {
        if let Some(next) = fallback_on_error(&image.get_untracked()) {
            image.set(next);
        }
    };

    let badge = product
        .match_label()
        .map(|label| view! { <div class="product-card__badge">{label}</div> });
    let price = product
        .price_label()
        .map(|label| view! { <p class="product-card__price">{label}</p> });
    let description = product
        .display_description
        .clone()
        .map(|text| view! { <p class="product-card__description">{text}</p> });
    let material = product
        .material
        .clone()
        .map(|m| view! { <span class="product-card__chip">{m}</span> });
    let color = product
        .color
        .clone()
        .map(|c| view! { <span class="product-card__chip">{c}</span> });

    view! {
        <div class="product-card">
            <div class="product-card__image">
                <img src=move || image.get() alt=product.title.clone() on:error=on_image_error/>
                {badge}
            </div>
            <div class="product-card__content">
                <h3 class="product-card__title">{product.display_title.clone()}</h3>
                <div class="product-card__brand">{product.brand.clone()}</div>
                {price}
                {description}
                <div class="product-card__details">{material} {color}</div>
                <button class="btn btn--primary product-card__action">"View Details"</button>
            </div>
        </div>
    }
}

/// Image to swap in after `current` failed to load.
///
/// `None` once the fallback itself is showing, so a broken placeholder does
/// not retrigger the handler forever.
fn fallback_on_error(current: &str) -> Option<String> {
    (current != FALLBACK_IMAGE).then(|| FALLBACK_IMAGE.to_owned())
}
