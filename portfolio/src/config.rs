//! Bundled profile configuration.
//!
//! `profile.json` is embedded at compile time. A document that fails to
//! parse is logged and replaced by the built-in default so the page still
//! renders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use showcase::profile::Profile;

/// Profile document shipped with the page.
pub const PROFILE_JSON: &str = include_str!("../profile.json");

/// Load the bundled profile.
pub fn load_profile() -> Profile {
    profile_from(PROFILE_JSON)
}

/// Parse `raw`, falling back to [`Profile::fallback`] on any error.
pub fn profile_from(raw: &str) -> Profile {
    match Profile::from_json(raw) {
        Ok(profile) => {
            log::debug!("config: loaded profile for {}", profile.name);
            profile
        }
        Err(e) => {
            log::error!("config: invalid profile, using defaults: {e}");
            Profile::fallback()
        }
    }
}
