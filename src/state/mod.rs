//! Client-side state and the pure logic derived from it.
//!
//! DESIGN
//! ======
//! State is split by view (`conversation` for search, `analytics` for the
//! dashboard) with `product` shared between them as the render-safe record.
//! Nothing here touches the DOM, so every module is testable natively.

pub mod analytics;
pub mod conversation;
pub mod product;
