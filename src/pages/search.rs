//! Conversational search page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::state::conversation::ConversationState;

/// Search page. Owns the conversation for as long as it is mounted; leaving
/// the route discards the log.
#[component]
pub fn SearchPage() -> impl IntoView {
    let conversation = RwSignal::new(ConversationState::default());
    provide_context(conversation);

    view! {
        <div class="search-page">
            <ChatPanel/>
        </div>
    }
}
