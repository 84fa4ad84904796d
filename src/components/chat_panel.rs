//! Conversation panel: message log, product results, and the query input.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::conversation::{ConversationState, Message};
use crate::state::product::{Product, render_keys};

/// Chat panel showing the conversation and an input for new queries.
///
/// Submission goes through [`crate::net::recommend::submit_query`], which
/// owns the empty-query and in-flight checks. The disabled send button only
/// mirrors that guard.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = conversation.with(|c| c.messages().len());
        let _ = conversation.with(ConversationState::pending);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let service = crate::net::api::HttpService::default();
            crate::net::recommend::submit_query(&conversation, &service, &text, move || input.set(String::new()))
                .await;
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let pending = move || conversation.with(ConversationState::pending);

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = conversation.with(|c| c.messages().to_vec());
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                <h2>"Hi! How can I help you find furniture today?"</h2>
                                <p>"Try: \"modern sofa\", \"wooden dining table\", \"office chair\""</p>
                            </div>
                        }
                            .into_any();
                    }

                    messages.into_iter().map(render_message).collect::<Vec<_>>().into_any()
                }}
                {move || {
                    pending()
                        .then(|| view! { <div class="chat-panel__loading">"Searching for products..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Describe the furniture you're looking for..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=pending>
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_message(msg: Message) -> impl IntoView {
    let is_user = msg.is_user();
    let is_bot = !is_user;
    let products = msg.products.map(|list| {
        let keyed: Vec<(String, Product)> = render_keys(&list).into_iter().zip(list).collect();
        view! {
            <div class="chat-panel__products">
                <For
                    each=move || keyed.clone()
                    key=|(key, _)| key.clone()
                    children=|(_, product)| view! { <ProductCard product=product/> }
                />
            </div>
        }
    });

    view! {
        <div class="chat-panel__turn">
            <div
                class="chat-panel__message"
                class:chat-panel__message--user=is_user
                class:chat-panel__message--bot=is_bot
            >
                {msg.text}
            </div>
            {products}
        </div>
    }
}
