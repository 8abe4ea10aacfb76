//! # portfolio
//!
//! Leptos + WASM page for a personal art portfolio. Renders the page markup
//! and binds the browser to the `showcase` behavior core: populated profile
//! text, theme toggle, gallery slider, image popup, scroll reveal and
//! drifting petal decorations.
//!
//! Browser code sits behind the `csr` feature. Without it every DOM seam is
//! a no-op, which keeps the crate testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;
