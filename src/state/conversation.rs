//! Conversation log and in-flight flag for the search view.
//!
//! DESIGN
//! ======
//! `ConversationState` is mutated only through `append` and `set_pending`.
//! The request lifecycle (`begin_request` / `complete_request`) is built on
//! those two transitions so the ordering rules live next to the data:
//! the user message is appended before the request goes out, and the bot
//! reply is appended before `pending` clears.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::cell::RefCell;

use crate::net::api::ApiError;
use crate::net::types::RawProduct;
use crate::state::product::{Product, normalize};

/// Bot reply used for every failed recommendation request.
pub const APOLOGY_TEXT: &str = "Sorry, there was an error. Please try again.";

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One turn in the conversation. Identity is its index in the log.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    /// Products attached to a bot reply. `None` for user turns and failures.
    pub products: Option<Vec<Product>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into(), products: None }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: Role::Bot, text: text.into(), products: None }
    }

    pub fn bot_with_products(text: impl Into<String>, products: Vec<Product>) -> Self {
        Self { role: Role::Bot, text: text.into(), products: Some(products) }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Why a submission was not dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The query was empty after trimming.
    EmptyQuery,
    /// Another request is still outstanding.
    RequestInFlight,
}

/// A query accepted by [`ConversationState::begin_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuery {
    /// The text exactly as the user typed it.
    pub query: String,
}

/// Message log plus the single in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    pending: bool,
}

impl ConversationState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Add a message to the end of the log.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Check a raw query against the dispatch preconditions without mutating.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] that would block dispatch.
    pub fn can_submit(&self, raw: &str) -> Result<(), Rejection> {
        if raw.trim().is_empty() {
            return Err(Rejection::EmptyQuery);
        }
        if self.pending {
            return Err(Rejection::RequestInFlight);
        }
        Ok(())
    }

    /// Accept a query: append the user turn and raise `pending`.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] and leaves the state untouched when the query is
    /// blank or a request is already outstanding.
    pub fn begin_request(&mut self, raw: &str) -> Result<PendingQuery, Rejection> {
        self.can_submit(raw)?;
        self.append(Message::user(raw));
        self.set_pending(true);
        Ok(PendingQuery { query: raw.to_owned() })
    }

    /// Record the outcome of an accepted query and clear `pending`.
    ///
    /// Returns the number of products attached to the reply (zero on failure).
    pub fn complete_request(&mut self, accepted: &PendingQuery, outcome: Result<Vec<RawProduct>, ApiError>) -> usize {
        let reply = match outcome {
            Ok(raw_products) => {
                let products: Vec<Product> = raw_products.into_iter().map(normalize).collect();
                Message::bot_with_products(found_text(products.len(), &accepted.query), products)
            }
            Err(_) => Message::bot(APOLOGY_TEXT),
        };
        let count = reply.products.as_ref().map_or(0, Vec::len);
        self.append(reply);
        self.set_pending(false);
        count
    }
}

/// Bot reply text for a successful query.
pub fn found_text(count: usize, query: &str) -> String {
    format!("Found {count} recommendations for \"{query}\"")
}

/// Write access to a [`ConversationState`] owned elsewhere.
///
/// The search view keeps its state in a reactive signal; tests keep it in a
/// `RefCell`. `mutate` returns `None` when the state no longer exists, e.g.
/// the view was torn down while a request was outstanding.
pub trait ConversationHandle {
    fn mutate<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R>;
}

impl ConversationHandle for RefCell<ConversationState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl ConversationHandle for leptos::prelude::RwSignal<ConversationState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        leptos::prelude::Update::try_update(self, f)
    }
}
