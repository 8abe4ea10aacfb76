//! Trunk entry point.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
        }
        log::info!("portfolio: mounting");
        leptos::mount::mount_to_body(portfolio::app::App);
    }
}
