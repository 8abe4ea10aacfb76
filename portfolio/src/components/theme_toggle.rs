//! Light/dark toggle button.
//!
//! The stored preference is read once in a post-mount effect, after the
//! page populator, and applied to `<html>` together with the glyph. Clicks
//! before that point are ignored.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use showcase::theme::ThemeController;

use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::util::theme_store::{self, ThemeStore};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = {
        #[cfg(feature = "csr")]
        {
            let controller = Rc::new(RefCell::new(None::<ThemeController<ThemeStore>>));
            {
                let controller = Rc::clone(&controller);
                Effect::new(move || {
                    if controller.borrow().is_some() {
                        return;
                    }
                    let theme = ThemeController::initialize(ThemeStore::open());
                    let initial = theme.mode();
                    theme_store::apply(initial);
                    ui.update(|u| u.theme = initial);
                    *controller.borrow_mut() = Some(theme);
                });
            }

            move |_ev: leptos::ev::MouseEvent| {
                let toggled = controller.borrow_mut().as_mut().map(ThemeController::toggle);
                let Some(next) = toggled else {
                    return;
                };
                theme_store::apply(next);
                ui.update(|u| u.theme = next);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=on_toggle
        >
            {move || ui.get().theme_glyph()}
        </button>
    }
}
