//! Contact form: composes a `mailto:` navigation from the form fields.
//!
//! No request is made. The browser hands the link to the mail client.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::{CONTACT_BODY_SEPARATOR, CONTACT_SUBJECT_PREFIX};

/// Current values of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn subject(&self) -> String {
        format!("{CONTACT_SUBJECT_PREFIX}{}", self.name)
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!("{}{CONTACT_BODY_SEPARATOR}{}", self.message, self.email)
    }

    /// `mailto:` URL addressed to `recipient` with encoded subject and body.
    #[must_use]
    pub fn mailto_href(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body())
        )
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode `input` the way browsers' `encodeURIComponent` does.
///
/// ASCII letters, digits and `- _ . ! ~ * ' ( )` pass through; every other
/// byte of the UTF-8 encoding becomes `%XX` with uppercase hex.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
