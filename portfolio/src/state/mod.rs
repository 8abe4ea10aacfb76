//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Reactive page state lives in one `RwSignal<UiState>` provided via
//! context. Controllers that own non-`Send` browser handles stay in the
//! component that created them and publish their results here.

pub mod ui;
