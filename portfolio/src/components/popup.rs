//! Full-size image overlay.
//!
//! Opened by clicking a slide image; closed by the backdrop, the close
//! button, or `Escape`. State lives in `UiState::popup`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ImagePopup() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move |_ev: leptos::ev::MouseEvent| close_popup(ui);

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                close_popup(ui);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            id="imgPopup"
            class=move || ui.get().popup_class()
            aria-hidden=move || ui.get().popup.aria_hidden()
            role="dialog"
        >
            <div id="popupBg" class="img-popup__bg" on:click=close></div>
            <img id="popupImg" class="img-popup__img" src=move || ui.get().popup.source().to_owned() alt="" />
            <button id="closePopup" class="img-popup__close" type="button" aria-label="Close" on:click=close>
                "✕"
            </button>
        </div>
    }
}

/// Open the overlay on `src`.
pub fn open_popup(ui: RwSignal<UiState>, src: &str) {
    ui.update(|u| u.popup.open(src));
}

pub fn close_popup(ui: RwSignal<UiState>) {
    if !ui.with_untracked(|u| u.popup.is_shown()) {
        return;
    }
    ui.update(|u| u.popup.close());
}
