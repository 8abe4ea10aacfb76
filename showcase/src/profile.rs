//! Profile config store.
//!
//! The profile is loaded once from a JSON document and is read-only
//! afterwards. Everything except `name` is optional in the document.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`Profile::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The document is not valid JSON or does not match the profile shape.
    #[error("failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but carries an empty `name`.
    #[error("profile name is empty")]
    MissingName,
}

/// Artist profile shown on the page.
///
/// `Default` is the empty document shape used while deserializing; a
/// missing `name` therefore stays blank and is rejected by
/// [`Profile::from_json`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Short descriptor appended to the document title.
    pub role: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    /// Social profile URL.
    pub social: String,
    /// Resume URL. Empty means the resume link is left untouched.
    pub resume: String,
    pub gallery: Vec<Artwork>,
}

/// One slider panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artwork {
    pub title: String,
    /// Image URL. Empty renders a panel without an image.
    pub image: String,
    pub caption: String,
}

impl Artwork {
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }
}

impl Profile {
    /// Built-in profile shown when the configured document is unusable.
    #[must_use]
    pub fn fallback() -> Self {
        Self { name: "Portfolio".to_owned(), role: "Visual Artist".to_owned(), ..Self::default() }
    }

    /// Parse a profile from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Parse`] for malformed JSON and
    /// [`ProfileError::MissingName`] when `name` is blank.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(raw)?;
        if profile.name.trim().is_empty() {
            return Err(ProfileError::MissingName);
        }
        Ok(profile)
    }

    /// Document title, `"{name} - {role}"`, or just the name without a role.
    #[must_use]
    pub fn page_title(&self) -> String {
        if self.role.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.role)
        }
    }

    #[must_use]
    pub fn has_resume(&self) -> bool {
        !self.resume.trim().is_empty()
    }

    /// `tel:` link for the phone number with spaces stripped.
    #[must_use]
    pub fn phone_href(&self) -> Option<String> {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("tel:{digits}"))
        }
    }
}
