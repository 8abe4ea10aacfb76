//! One-way scroll reveal.
//!
//! Each observed element starts `Pending` and flips to `Revealed` the first
//! time a sample shows it intersecting at or above [`REVEAL_THRESHOLD`].
//! Nothing ever moves it back, so scrolling away does not flicker.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// One intersection observation for an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    #[must_use]
    pub fn reveals(self) -> bool {
        self.is_intersecting && self.ratio >= REVEAL_THRESHOLD
    }
}

/// Reveal state for every observed element, addressed by registration order.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element and return its id.
    pub fn observe(&mut self) -> usize {
        self.states.push(RevealState::Pending);
        self.states.len() - 1
    }

    /// Feed a sample for `id`.
    ///
    /// Returns `true` only on the transition to `Revealed`; the host adds the
    /// reveal class and may stop observing the element.
    pub fn on_intersection(&mut self, id: usize, sample: IntersectionSample) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        if *state == RevealState::Revealed || !sample.reveals() {
            return false;
        }
        *state = RevealState::Revealed;
        log::debug!("reveal: element {id} revealed");
        true
    }

    #[must_use]
    pub fn state(&self, id: usize) -> Option<RevealState> {
        self.states.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Revealed).count()
    }
}
