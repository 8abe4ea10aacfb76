//! Root application component and page layout.

use leptos::prelude::*;
use leptos_meta::{Meta, provide_meta_context};
use showcase::populate::populate;

use crate::components::contact_form::ContactFormView;
use crate::components::petals::Petals;
use crate::components::popup::ImagePopup;
use crate::components::reveal::RevealOnScroll;
use crate::components::slider::GallerySlider;
use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::state::ui::UiState;
use crate::util::dom::{self, ids};

/// Root application component.
///
/// Provides the shared `UiState` signal. Controllers come up in document
/// order after the populator: theme, slider, popup, reveal, decorations.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile = config::load_profile();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    {
        let profile = profile.clone();
        Effect::new(move || {
            let report = populate(&profile, &dom::page_slots(), dom::current_year());
            log::info!(
                "populate: wrote {} targets, {} absent",
                report.written.len(),
                report.absent.len()
            );
        });
    }

    let name = profile.name.clone();
    let footer_name = profile.name.clone();
    let role = profile.role.clone();

    view! {
        <Meta name="description" content=profile.bio.clone() />

        <header class="site-header">
            <a class="brand" href="#home">{name.clone()}</a>
            <nav class="site-nav">
                <a href="#work">"Work"</a>
                <a href="#about">"About"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <ThemeToggle />
        </header>

        <main>
            <section id="home" class="hero">
                <div class="hero-inner">
                    <h1 class="hero-title">{name}</h1>
                    <p class="hero-role">{role}</p>
                    <p id=ids::BIO_TEXT class="hero-bio"></p>
                    <a id=ids::RESUME_LINK class="btn btn--primary" href="#" target="_blank" rel="noopener">
                        "Résumé"
                    </a>
                </div>
            </section>

            <section id="work" class="section">
                <div class="section-head">
                    <h2>"Selected Work"</h2>
                    <p>"Tap an image to view it full size."</p>
                </div>
                <GallerySlider gallery=profile.gallery.clone() />
            </section>

            <section id="about" class="section">
                <div class="section-head">
                    <h2>"Practice"</h2>
                </div>
                <div class="cards">
                    <article class="card">
                        <h3>"Drawing"</h3>
                        <p>"Ink, graphite and charcoal studies from life."</p>
                    </article>
                    <article class="card">
                        <h3>"Printmaking"</h3>
                        <p>"Small-run linocuts and relief prints."</p>
                    </article>
                    <article class="card">
                        <h3>"Digital"</h3>
                        <p>"Painted illustration built over hand-drawn bases."</p>
                    </article>
                </div>
            </section>

            <section id="contact" class="section">
                <div class="section-head">
                    <h2>"Contact"</h2>
                </div>
                <div class="cards">
                    <div class="card contact-details">
                        <a id=ids::CONTACT_EMAIL class="contact-details__item"></a>
                        <a id=ids::CONTACT_PHONE class="contact-details__item"></a>
                        <a id=ids::SOCIAL_LINK class="contact-details__item" target="_blank" rel="noopener">
                            "Instagram"
                        </a>
                    </div>
                    <div class="card">
                        <ContactFormView recipient=profile.email.clone() />
                    </div>
                </div>
            </section>
        </main>

        <footer class="site-footer">
            "© "
            <span id=ids::YEAR></span>
            " "
            {footer_name}
        </footer>

        <ImagePopup />
        <RevealOnScroll />

        <div class="decor-bg" aria-hidden="true">
            <Petals />
        </div>
    }
}
