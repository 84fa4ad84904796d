//! Networking modules for the recommendation service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `recommend` drives one conversational request
//! through the conversation state, and `types` defines the wire schema.

pub mod api;
pub mod recommend;
pub mod types;
