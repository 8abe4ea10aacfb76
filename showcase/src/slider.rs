//! Slider model: wrapped index navigation, swipe classification and the
//! centering offset for the active panel.
//!
//! `Slider` never touches layout. Navigation returns the new index and the
//! host reads the active panel's metrics to compute [`scroll_left`], then
//! highlights indicators from [`Slider::indicators`].

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use crate::consts::{
    NARROW_BREAKPOINT_PX, NARROW_INSET_PX, SWIPE_THRESHOLD_PX, WIDE_CENTER_NUDGE_PX,
};

/// Layout of one panel inside the scroll container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMetrics {
    pub offset_left: f64,
    pub width: f64,
}

/// Direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left; show the next panel.
    Next,
    /// Finger moved right; show the previous panel.
    Previous,
}

/// Classify a touch from its start and end X.
///
/// `delta = start - end`; only `|delta| > SWIPE_THRESHOLD_PX` is a swipe.
#[must_use]
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<Swipe> {
    let delta = start_x - end_x;
    if delta.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if delta > 0.0 {
        Some(Swipe::Next)
    } else {
        Some(Swipe::Previous)
    }
}

/// Scroll offset that brings `panel` into position for this viewport width.
///
/// Narrow viewports pin the panel at a fixed inset; wide viewports center
/// it and nudge slightly left.
#[must_use]
pub fn scroll_left(panel: PanelMetrics, viewport_width: f64) -> f64 {
    let inset = if viewport_width < NARROW_BREAKPOINT_PX {
        NARROW_INSET_PX
    } else {
        (viewport_width - panel.width) / 2.0 - WIDE_CENTER_NUDGE_PX
    };
    panel.offset_left - inset
}

/// Navigation and gesture state for a fixed set of panels.
#[derive(Debug, Clone, Default)]
pub struct Slider {
    count: usize,
    index: usize,
    touch_start_x: Option<f64>,
}

impl Slider {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, index: 0, touch_start_x: None }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Move to `target`, wrapping in both directions.
    ///
    /// Returns the new index, or `None` when there are no panels.
    pub fn go_to(&mut self, target: isize) -> Option<usize> {
        let Ok(n) = isize::try_from(self.count) else {
            return None;
        };
        if n == 0 {
            return None;
        }
        let Ok(wrapped) = usize::try_from(target.rem_euclid(n)) else {
            return None;
        };
        self.index = wrapped;
        log::debug!("slider: index {} of {}", self.index, self.count);
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.step(-1)
    }

    fn step(&mut self, by: isize) -> Option<usize> {
        let Ok(current) = isize::try_from(self.index) else {
            return None;
        };
        self.go_to(current + by)
    }

    /// Record the first touch point. `None` when the event carried no touch.
    pub fn on_touch_start(&mut self, x: Option<f64>) {
        self.touch_start_x = x;
    }

    /// Finish a touch gesture and navigate if it was a swipe.
    ///
    /// Gesture state is cleared whatever the outcome.
    pub fn on_touch_end(&mut self, x: Option<f64>) -> Option<usize> {
        let start = self.touch_start_x.take()?;
        let end = x?;
        match classify_swipe(start, end)? {
            Swipe::Next => self.next(),
            Swipe::Previous => self.previous(),
        }
    }

    #[must_use]
    pub fn has_pending_touch(&self) -> bool {
        self.touch_start_x.is_some()
    }

    #[must_use]
    pub fn is_active(&self, indicator: usize) -> bool {
        self.count > 0 && indicator == self.index
    }

    /// Active flag per indicator. Exactly one is `true` when `count > 0`.
    #[must_use]
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.count).map(|i| self.is_active(i)).collect()
    }
}
