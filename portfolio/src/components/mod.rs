//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one part of the page markup and owns the
//! `showcase` controller behind it. Results are published to the shared
//! `UiState` signal or applied directly to the DOM.

pub mod contact_form;
pub mod petals;
pub mod popup;
pub mod reveal;
pub mod slider;
pub mod theme_toggle;
