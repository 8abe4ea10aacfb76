//! Page populator: copies profile fields into their display slots.
//!
//! Every slot is optional. A missing slot is skipped and reported, never an
//! error. Running the populator again writes the same values, so it is
//! idempotent.

#[cfg(test)]
#[path = "populate_test.rs"]
mod populate_test;

use crate::profile::Profile;

/// A writable display location on the page.
pub trait Slot {
    fn set_text(&self, text: &str);
    fn set_attribute(&self, name: &str, value: &str);
}

/// Named display locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Title,
    Bio,
    ResumeLink,
    Year,
    Email,
    Phone,
    Social,
}

/// Page slots, each present or absent.
#[derive(Debug)]
pub struct PageSlots<S> {
    pub title: Option<S>,
    pub bio: Option<S>,
    pub resume_link: Option<S>,
    pub year: Option<S>,
    pub email: Option<S>,
    pub phone: Option<S>,
    pub social: Option<S>,
}

impl<S> Default for PageSlots<S> {
    fn default() -> Self {
        Self {
            title: None,
            bio: None,
            resume_link: None,
            year: None,
            email: None,
            phone: None,
            social: None,
        }
    }
}

/// Which targets were written and which had no slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub written: Vec<Target>,
    pub absent: Vec<Target>,
}

/// Copy `profile` into `slots`. `year` fills the footer.
///
/// The resume link is only written when the profile has one; contact
/// targets are only written when the profile field is non-empty.
pub fn populate<S: Slot>(profile: &Profile, slots: &PageSlots<S>, year: i32) -> PopulateReport {
    let mut report = PopulateReport::default();

    fill(&mut report, Target::Title, slots.title.as_ref(), |s| s.set_text(&profile.page_title()));
    fill(&mut report, Target::Bio, slots.bio.as_ref(), |s| s.set_text(&profile.bio));
    if profile.has_resume() {
        fill(&mut report, Target::ResumeLink, slots.resume_link.as_ref(), |s| {
            s.set_attribute("href", &profile.resume);
        });
    }
    fill(&mut report, Target::Year, slots.year.as_ref(), |s| s.set_text(&year.to_string()));
    if !profile.email.is_empty() {
        fill(&mut report, Target::Email, slots.email.as_ref(), |s| {
            s.set_text(&profile.email);
            s.set_attribute("href", &format!("mailto:{}", profile.email));
        });
    }
    if let Some(href) = profile.phone_href() {
        fill(&mut report, Target::Phone, slots.phone.as_ref(), |s| {
            s.set_text(&profile.phone);
            s.set_attribute("href", &href);
        });
    }
    if !profile.social.is_empty() {
        fill(&mut report, Target::Social, slots.social.as_ref(), |s| {
            s.set_attribute("href", &profile.social);
        });
    }

    if !report.absent.is_empty() {
        log::debug!("populate: skipped absent targets {:?}", report.absent);
    }
    report
}

fn fill<S: Slot>(
    report: &mut PopulateReport,
    target: Target,
    slot: Option<&S>,
    write: impl FnOnce(&S),
) {
    match slot {
        Some(slot) => {
            write(slot);
            report.written.push(target);
        }
        None => report.absent.push(target),
    }
}
