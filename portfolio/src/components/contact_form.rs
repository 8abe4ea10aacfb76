//! Contact form that hands a composed message to the visitor's mail client.

use leptos::prelude::*;
use showcase::contact::ContactForm;

#[component]
pub fn ContactFormView(recipient: String) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = form.with_untracked(|f| f.mailto_href(&recipient));
        open_mail_client(&href);
    };
    let on_reset = move |_ev: leptos::ev::MouseEvent| {
        form.update(ContactForm::reset);
        log::debug!("contact: form reset");
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <label class="contact-form__field">
                <span>"Name"</span>
                <input
                    id="cfName"
                    type="text"
                    name="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                <span>"Email"</span>
                <input
                    id="cfEmail"
                    type="email"
                    name="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                <span>"Message"</span>
                <textarea
                    id="cfMessage"
                    name="message"
                    rows="5"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="contact-form__actions">
                <button type="submit" class="btn btn--primary">"Send"</button>
                <button id="resetBtn" type="button" class="btn" on:click=on_reset>"Reset"</button>
            </div>
        </form>
    }
}

/// Navigate the window to a `mailto:` link.
fn open_mail_client(href: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.location().set_href(href) {
            Ok(()) => log::debug!("contact: opened mail client"),
            Err(e) => log::warn!("contact: navigation failed: {e:?}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}
