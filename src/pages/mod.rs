//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns the state for its activation and delegates rendering
//! details to `components`.

pub mod analytics;
pub mod search;
