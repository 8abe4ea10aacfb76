//! DOM lookups for the page's structure contract.
//!
//! Every lookup returns an `Option`; callers branch on presence instead of
//! assuming the markup is complete. Outside the browser every lookup is
//! absent.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use showcase::populate::{PageSlots, Slot};

/// Element ids the behavior layer binds to.
pub mod ids {
    pub const BIO_TEXT: &str = "bioText";
    pub const RESUME_LINK: &str = "resumeLink";
    pub const YEAR: &str = "year";
    pub const CONTACT_EMAIL: &str = "contactEmail";
    pub const CONTACT_PHONE: &str = "contactPhone";
    pub const SOCIAL_LINK: &str = "socialLink";
}

/// A populatable location: the document title or an element.
pub enum DomSlot {
    #[cfg(feature = "csr")]
    Title(web_sys::Document),
    #[cfg(feature = "csr")]
    Element(web_sys::Element),
}

impl Slot for DomSlot {
    fn set_text(&self, text: &str) {
        #[cfg(feature = "csr")]
        match self {
            Self::Title(doc) => doc.set_title(text),
            Self::Element(el) => el.set_text_content(Some(text)),
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        #[cfg(feature = "csr")]
        if let Self::Element(el) = self {
            if let Err(e) = el.set_attribute(name, value) {
                log::warn!("dom: failed to set {name}: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, value);
        }
    }
}

/// Resolve every populator slot against the live document.
pub fn page_slots() -> PageSlots<DomSlot> {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = document() else {
            return PageSlots::default();
        };
        let by_id = |id: &str| doc.get_element_by_id(id).map(DomSlot::Element);
        PageSlots {
            title: Some(DomSlot::Title(doc.clone())),
            bio: by_id(ids::BIO_TEXT),
            resume_link: by_id(ids::RESUME_LINK),
            year: by_id(ids::YEAR),
            email: by_id(ids::CONTACT_EMAIL),
            phone: by_id(ids::CONTACT_PHONE),
            social: by_id(ids::SOCIAL_LINK),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        PageSlots::default()
    }
}

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels, `(0, 0)` when unknown.
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }
    #[cfg(not(feature = "csr"))]
    {
        (0.0, 0.0)
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        1970
    }
}

/// All elements matching `selector`, as `HtmlElement`s.
#[cfg(feature = "csr")]
pub fn query_all(selector: &str) -> Vec<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast as _;

    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}
