//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search conversation and analytics cards while
//! reading shared state from Leptos context providers.

pub mod brand_card;
pub mod chat_panel;
pub mod header;
pub mod product_card;
