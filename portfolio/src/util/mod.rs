//! Browser seams shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from component logic. Each one
//! compiles to a no-op without the `csr` feature so the crate tests
//! natively.

pub mod dom;
pub mod reveal;
pub mod theme_store;
pub mod timers;
