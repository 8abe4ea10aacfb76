#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// go_to / next / previous
// =============================================================

#[test]
fn go_to_wraps_negative_indices() {
    let mut slider = Slider::new(5);
    assert_eq!(slider.go_to(-1), Some(4));
    assert_eq!(slider.go_to(-6), Some(4));
}

#[test]
fn go_to_matches_euclidean_remainder() {
    for n in 1..=6_isize {
        let mut slider = Slider::new(usize::try_from(n).expect("positive"));
        for i in -20..=20_isize {
            let expected = usize::try_from(((i % n) + n) % n).expect("non-negative");
            assert_eq!(slider.go_to(i), Some(expected), "go_to({i}) with {n} panels");
            assert_eq!(slider.index(), expected);
        }
    }
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut slider = Slider::new(3);
    assert_eq!(slider.previous(), Some(2));
    assert_eq!(slider.next(), Some(0));
}

#[test]
fn next_walks_forward() {
    let mut slider = Slider::new(3);
    assert_eq!(slider.next(), Some(1));
    assert_eq!(slider.next(), Some(2));
    assert_eq!(slider.next(), Some(0));
}

#[test]
fn zero_panels_are_a_no_op() {
    let mut slider = Slider::new(0);
    assert!(slider.is_empty());
    assert_eq!(slider.go_to(3), None);
    assert_eq!(slider.next(), None);
    assert_eq!(slider.previous(), None);
    slider.on_touch_start(Some(200.0));
    assert_eq!(slider.on_touch_end(Some(10.0)), None);
    assert!(slider.indicators().is_empty());
    assert_eq!(slider.index(), 0);
}

// =============================================================
// Indicators
// =============================================================

#[test]
fn exactly_one_indicator_is_active() {
    let mut slider = Slider::new(4);
    for target in [0, 3, -1, 7, 2] {
        slider.go_to(target);
        let flags = slider.indicators();
        assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        assert!(flags[slider.index()]);
    }
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn swipe_of_exactly_threshold_does_not_navigate() {
    let mut slider = Slider::new(3);
    slider.on_touch_start(Some(100.0));
    assert_eq!(slider.on_touch_end(Some(60.0)), None);
    assert_eq!(slider.index(), 0);
}

#[test]
fn swipe_past_threshold_left_goes_next() {
    let mut slider = Slider::new(3);
    slider.on_touch_start(Some(100.0));
    assert_eq!(slider.on_touch_end(Some(59.0)), Some(1));
}

#[test]
fn swipe_past_threshold_right_goes_previous() {
    let mut slider = Slider::new(3);
    slider.on_touch_start(Some(100.0));
    assert_eq!(slider.on_touch_end(Some(141.0)), Some(2));
}

#[test]
fn touch_state_resets_after_every_end() {
    let mut slider = Slider::new(3);
    slider.on_touch_start(Some(100.0));
    assert!(slider.has_pending_touch());
    slider.on_touch_end(Some(95.0));
    assert!(!slider.has_pending_touch());

    slider.on_touch_start(Some(100.0));
    assert_eq!(slider.on_touch_end(None), None);
    assert!(!slider.has_pending_touch());

    // A stray end with no start never navigates.
    assert_eq!(slider.on_touch_end(Some(0.0)), None);
    assert_eq!(slider.index(), 0);
}

#[test]
fn touch_starting_at_zero_is_tracked() {
    let mut slider = Slider::new(3);
    slider.on_touch_start(Some(0.0));
    assert_eq!(slider.on_touch_end(Some(80.0)), Some(2));
}

#[test]
fn missing_touch_start_short_circuits() {
    let mut slider = Slider::new(3);
    slider.on_touch_start(None);
    assert_eq!(slider.on_touch_end(Some(500.0)), None);
}

#[test]
fn classify_swipe_uses_strict_threshold() {
    assert_eq!(classify_swipe(0.0, 40.0), None);
    assert_eq!(classify_swipe(0.0, -40.0), None);
    assert_eq!(classify_swipe(0.0, 41.0), Some(Swipe::Previous));
    assert_eq!(classify_swipe(41.0, 0.0), Some(Swipe::Next));
}

// =============================================================
// Centering
// =============================================================

#[test]
fn narrow_viewport_uses_fixed_inset() {
    let panel = PanelMetrics { offset_left: 500.0, width: 300.0 };
    assert_eq!(scroll_left(panel, 979.0), 476.0);
}

#[test]
fn wide_viewport_centers_panel() {
    let panel = PanelMetrics { offset_left: 1200.0, width: 600.0 };
    // inset = (1280 - 600) / 2 - 30 = 310
    assert_eq!(scroll_left(panel, 1280.0), 890.0);
}

#[test]
fn breakpoint_width_counts_as_wide() {
    let panel = PanelMetrics { offset_left: 1000.0, width: 580.0 };
    // inset = (980 - 580) / 2 - 30 = 170
    assert_eq!(scroll_left(panel, 980.0), 830.0);
}
