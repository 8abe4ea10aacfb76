//! Behavior core for the portfolio page.
//!
//! This crate owns every decision the page makes in response to input:
//! which panel the slider shows, which theme is active, whether the image
//! popup is open, when an element reveals and where decorations drift.
//! None of it touches the DOM. The `portfolio` crate wires browser events into
//! these controllers and applies what they return, which keeps all of the
//! logic testable natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`profile`] | Profile config store loaded from JSON |
//! | [`populate`] | Copies profile fields into optional page slots |
//! | [`store`] | Key-value persistence capability and in-memory store |
//! | [`theme`] | Light/dark mode controller |
//! | [`slider`] | Panel navigation, swipe gestures and centering |
//! | [`popup`] | Lightbox visibility state |
//! | [`reveal`] | One-way scroll reveal tracking |
//! | [`decor`] | Drifting particles and pointer parallax |
//! | [`contact`] | Contact form mailto composition |
//! | [`timer`] | Host timer capability and cancellable task handles |
//! | [`consts`] | Thresholds, breakpoints, ranges and keys |

pub mod consts;
pub mod contact;
pub mod decor;
pub mod populate;
pub mod popup;
pub mod profile;
pub mod reveal;
pub mod slider;
pub mod store;
pub mod theme;
pub mod timer;
