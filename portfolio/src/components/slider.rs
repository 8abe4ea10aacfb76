//! Gallery slider: a horizontally scrolling strip of artwork panels.
//!
//! Navigation goes through `showcase::slider::Slider`, which owns the index
//! and gesture state. This component applies each resolved index to the DOM
//! by smooth-scrolling the strip and publishing the index to `UiState` for
//! the indicator dots.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;
use showcase::profile::Artwork;
#[cfg(feature = "csr")]
use showcase::slider::Slider;

use super::popup::open_popup;
use crate::state::ui::UiState;

#[component]
pub fn GallerySlider(gallery: Vec<Artwork>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let slides_ref = NodeRef::<leptos::html::Div>::new();
    let count = gallery.len();

    #[cfg(feature = "csr")]
    let slider = Rc::new(RefCell::new(Slider::new(count)));

    #[cfg(feature = "csr")]
    let show: Rc<dyn Fn(usize)> = Rc::new(move |index: usize| {
        ui.update(|u| u.active_slide = index);
        if let Some(strip) = slides_ref.get_untracked() {
            center_panel(&strip, index);
        }
    });

    #[cfg(feature = "csr")]
    {
        let slider = Rc::clone(&slider);
        let show = Rc::clone(&show);
        let settle = Rc::new(RefCell::new(None::<gloo_timers::callback::Timeout>));
        Effect::new(move || {
            let mounted = slides_ref.get().is_some();
            if !mounted || settle.borrow().is_some() || slider.borrow().is_empty() {
                return;
            }
            show(slider.borrow().index());
            // Layout may still shift after mount; center once more.
            let slider = Rc::clone(&slider);
            let show = Rc::clone(&show);
            *settle.borrow_mut() = Some(gloo_timers::callback::Timeout::new(
                showcase::consts::SETTLE_DELAY_MS,
                move || {
                    let index = slider.borrow().index();
                    show(index);
                },
            ));
        });
    }

    let on_prev = {
        #[cfg(feature = "csr")]
        {
            let slider = Rc::clone(&slider);
            let show = Rc::clone(&show);
            move |_ev: leptos::ev::MouseEvent| {
                let target = slider.borrow_mut().previous();
                if let Some(index) = target {
                    show(index);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_next = {
        #[cfg(feature = "csr")]
        {
            let slider = Rc::clone(&slider);
            let show = Rc::clone(&show);
            move |_ev: leptos::ev::MouseEvent| {
                let target = slider.borrow_mut().next();
                if let Some(index) = target {
                    show(index);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            let slider = Rc::clone(&slider);
            move |ev: leptos::ev::TouchEvent| {
                let x = ev.touches().get(0).map(|t| f64::from(t.client_x()));
                slider.borrow_mut().on_touch_start(x);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "csr")]
        {
            let slider = Rc::clone(&slider);
            let show = Rc::clone(&show);
            move |ev: leptos::ev::TouchEvent| {
                let x = ev.changed_touches().get(0).map(|t| f64::from(t.client_x()));
                let target = slider.borrow_mut().on_touch_end(x);
                if let Some(index) = target {
                    show(index);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let dots = (0..count)
        .map(|index| {
            let on_dot = {
                #[cfg(feature = "csr")]
                {
                    let slider = Rc::clone(&slider);
                    let show = Rc::clone(&show);
                    move |_ev: leptos::ev::MouseEvent| {
                        let Ok(target) = isize::try_from(index) else {
                            return;
                        };
                        let resolved = slider.borrow_mut().go_to(target);
                        if let Some(resolved) = resolved {
                            show(resolved);
                        }
                    }
                }
                #[cfg(not(feature = "csr"))]
                {
                    move |_ev: leptos::ev::MouseEvent| {}
                }
            };
            let label = format!("Show artwork {}", index + 1);
            view! {
                <button
                    class="dot"
                    class:active=move || ui.get().is_slide_active(index)
                    type="button"
                    aria-label=label
                    on:click=on_dot
                ></button>
            }
        })
        .collect_view();

    let slides = gallery
        .into_iter()
        .map(|art| {
            let image = art.has_image().then(|| {
                let src = art.image.clone();
                view! {
                    <img
                        src=art.image.clone()
                        alt=art.title.clone()
                        style="cursor: zoom-in"
                        on:click=move |_ev: leptos::ev::MouseEvent| open_popup(ui, &src)
                    />
                }
            });
            view! {
                <div class="slide">
                    {image}
                    <div class="slide__meta">
                        <h3 class="slide__title">{art.title}</h3>
                        <p class="slide__caption">{art.caption}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="slider">
            <div
                id="slides"
                class="slides"
                node_ref=slides_ref
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
            >
                {slides}
            </div>
            <div class="slider__controls">
                <button id="prevBtn" class="slider__btn" type="button" aria-label="Previous artwork" on:click=on_prev>
                    "‹"
                </button>
                <div id="dots" class="dots">{dots}</div>
                <button id="nextBtn" class="slider__btn" type="button" aria-label="Next artwork" on:click=on_next>
                    "›"
                </button>
            </div>
        </div>
    }
}

/// Smooth-scroll `strip` so panel `index` sits at its centered position.
#[cfg(feature = "csr")]
fn center_panel(strip: &web_sys::HtmlElement, index: usize) {
    use showcase::slider::{PanelMetrics, scroll_left};
    use wasm_bindgen::JsCast as _;

    let Ok(panels) = strip.query_selector_all(".slide") else {
        return;
    };
    let Some(panel) = u32::try_from(index)
        .ok()
        .and_then(|i| panels.item(i))
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let metrics = PanelMetrics {
        offset_left: f64::from(panel.offset_left()),
        width: f64::from(panel.offset_width()),
    };
    let (viewport_width, _) = crate::util::dom::viewport_size();

    let options = web_sys::ScrollToOptions::new();
    options.set_left(scroll_left(metrics, viewport_width));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    strip.scroll_to_with_scroll_to_options(&options);
}
