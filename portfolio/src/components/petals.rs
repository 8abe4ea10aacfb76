//! Floating petal decorations and pointer parallax.
//!
//! Particles are plain `<img>` elements appended to `.petals-holder` after
//! mount. Their motion comes from `showcase::decor::spawn_all`; this module
//! only writes the resulting styles. Parallax shifts every `.decor-bg`
//! element with the pointer.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use showcase::decor::{Decorations, Particle};

#[cfg(feature = "csr")]
use crate::util::timers::BrowserTimer;

#[component]
pub fn Petals() -> impl IntoView {
    let holder_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let decorations = Rc::new(RefCell::new(None::<Decorations<BrowserTimer>>));
        Effect::new(move || {
            let Some(holder) = holder_ref.get() else {
                return;
            };
            if decorations.borrow().is_some() {
                return;
            }
            *decorations.borrow_mut() = spawn_petals(&holder);
            track_parallax();
        });
    }

    view! { <div class="petals-holder" node_ref=holder_ref aria-hidden="true"></div> }
}

#[cfg(feature = "csr")]
fn spawn_petals(holder: &web_sys::HtmlElement) -> Option<Decorations<BrowserTimer>> {
    use rand::SeedableRng as _;
    use rand::rngs::SmallRng;
    use showcase::consts::PARTICLE_COUNT;
    use showcase::decor::{PETAL_SVG_DATA_URI, spawn_all};

    use crate::util::timers::BrowserTimers;

    let document = crate::util::dom::document()?;
    let mut petals = Vec::with_capacity(PARTICLE_COUNT);
    for _ in 0..PARTICLE_COUNT {
        let petal = match document.create_element("img") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("decor: failed to create petal: {e:?}");
                return None;
            }
        };
        petal.set_class_name("petal");
        set_attr(&petal, "src", PETAL_SVG_DATA_URI);
        set_attr(&petal, "alt", "");
        if let Err(e) = holder.append_child(&petal) {
            log::warn!("decor: failed to attach petal: {e:?}");
            return None;
        }
        petals.push(petal);
    }

    let petals = Rc::new(petals);
    let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(js_sys::Math::random().to_bits())));
    let on_move: Rc<dyn Fn(usize, &Particle)> = {
        let petals = Rc::clone(&petals);
        Rc::new(move |index: usize, particle: &Particle| {
            if let Some(petal) = petals.get(index) {
                set_attr(petal, "style", &particle.style());
            }
        })
    };

    let decorations = spawn_all(&BrowserTimers, rng, on_move);
    for (petal, particle) in petals.iter().zip(decorations.particles()) {
        set_attr(petal, "style", &particle.style());
    }
    log::info!("decor: {} petals drifting", decorations.len());
    Some(decorations)
}

#[cfg(feature = "csr")]
fn track_parallax() {
    use showcase::consts::PARALLAX_CLASS;
    use showcase::decor::{parallax_offset, parallax_transform};

    let selector = format!(".{PARALLAX_CLASS}");
    // The page lives as long as the window; the listener is never removed.
    let _handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        let (width, height) = crate::util::dom::viewport_size();
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let transform = parallax_transform(parallax_offset(x, y, width, height));
        for layer in crate::util::dom::query_all(&selector) {
            if let Err(e) = layer.style().set_property("transform", &transform) {
                log::warn!("decor: parallax write failed: {e:?}");
            }
        }
    });
}

#[cfg(feature = "csr")]
fn set_attr(el: &web_sys::Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("decor: failed to set {name}: {e:?}");
    }
}
