//! Site header with navigation between the search and analytics views.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <h1 class="site-header__logo">"Furniture Finder"</h1>
                <nav class="site-header__nav">
                    <A href="/search">"Search"</A>
                    <A href="/analytics">"Analytics"</A>
                </nav>
            </div>
        </header>
    }
}
