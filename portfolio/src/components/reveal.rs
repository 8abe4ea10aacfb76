//! Renderless component that arms scroll reveal once the page is mounted.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::reveal::RevealObserver;

/// Must be placed after every section it should animate.
#[component]
pub fn RevealOnScroll() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let observer = Rc::new(RefCell::new(None::<RevealObserver>));
        Effect::new(move || {
            if observer.borrow().is_some() {
                return;
            }
            *observer.borrow_mut() = RevealObserver::observe_page();
        });
    }
}
