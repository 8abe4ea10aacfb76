//! Scroll reveal wiring over `IntersectionObserver`.
//!
//! Every element matching the reveal selectors gets the pending class and an
//! id in a shared [`RevealTracker`]. The observer callback feeds samples to
//! the tracker and, on the one-way transition, adds the shown class and
//! stops observing that element.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use showcase::consts::{
    REVEAL_PENDING_CLASS, REVEAL_SELECTORS, REVEAL_SHOWN_CLASS, REVEAL_THRESHOLD,
};
#[cfg(feature = "csr")]
use showcase::reveal::{IntersectionSample, RevealTracker};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "csr")]
const REVEAL_ID_ATTR: &str = "data-reveal-id";

#[cfg(feature = "csr")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live observer. Dropping it disconnects every observation.
pub struct RevealObserver {
    #[cfg(feature = "csr")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "csr")]
    _callback: ObserverCallback,
}

impl RevealObserver {
    /// Observe every reveal target currently in the document.
    ///
    /// Returns `None` when the browser has no `IntersectionObserver`; the
    /// page then shows everything without animation.
    pub fn observe_page() -> Option<Self> {
        #[cfg(feature = "csr")]
        {
            let tracker = Rc::new(RefCell::new(RevealTracker::new()));
            let callback = reveal_callback(Rc::clone(&tracker));

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("reveal: IntersectionObserver unavailable: {e:?}");
                    return None;
                }
            };

            for el in super::dom::query_all(REVEAL_SELECTORS) {
                if let Err(e) = el.class_list().add_1(REVEAL_PENDING_CLASS) {
                    log::warn!("reveal: failed to mark element pending: {e:?}");
                    continue;
                }
                let id = tracker.borrow_mut().observe();
                if let Err(e) = el.set_attribute(REVEAL_ID_ATTR, &id.to_string()) {
                    log::warn!("reveal: failed to tag element {id}: {e:?}");
                    continue;
                }
                observer.observe(&el);
            }
            log::debug!("reveal: observing {} elements", tracker.borrow().len());

            Some(Self { observer, _callback: callback })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

#[cfg(feature = "csr")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "csr")]
fn reveal_callback(tracker: Rc<RefCell<RevealTracker>>) -> ObserverCallback {
    Closure::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let tagged = target.get_attribute(REVEAL_ID_ATTR);
            let Some(id) = tagged.and_then(|v| v.parse::<usize>().ok()) else {
                continue;
            };
            let sample = IntersectionSample {
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            };
            if !tracker.borrow_mut().on_intersection(id, sample) {
                continue;
            }
            if let Err(e) = target.class_list().add_1(REVEAL_SHOWN_CLASS) {
                log::warn!("reveal: failed to show element {id}: {e:?}");
            }
            observer.unobserve(&target);
        }
    })
}
