#![allow(clippy::float_cmp)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::timer::fake::ManualTimers;

fn seeded(seed: u64) -> Rc<RefCell<StdRng>> {
    Rc::new(RefCell::new(StdRng::seed_from_u64(seed)))
}

fn noop_move() -> Rc<dyn Fn(usize, &Particle)> {
    Rc::new(|_: usize, _: &Particle| {})
}

// =============================================================
// Particle
// =============================================================

#[test]
fn spawned_particles_stay_in_their_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Particle::spawn(&mut rng);
        assert!((0.0..80.0).contains(&p.left_pct));
        assert_eq!(p.left_pct.fract(), 0.0);
        assert!((0.0..30.0).contains(&p.top_pct));
        assert!((14.0..32.0).contains(&p.size_px));
        assert!((0.4..0.9).contains(&p.opacity));
        assert!((-20.0..20.0).contains(&p.rotation_deg));
        assert!((8.0..16.0).contains(&p.transform_secs));
        assert!((8.0..16.0).contains(&p.top_secs));
        assert!((100..900).contains(&p.first_delay_ms));
        assert!((6_000..10_000).contains(&p.interval_ms));
    }
}

#[test]
fn first_drift_moves_into_lower_band() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut p = Particle::spawn(&mut rng);
        let left_before = p.left_pct;
        p.first_drift(&mut rng);
        assert!((50.0..90.0).contains(&p.top_pct));
        assert!((p.left_pct - left_before).abs() <= 10.0);
    }
}

#[test]
fn recurring_drift_sways_wider() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let mut p = Particle::spawn(&mut rng);
        let left_before = p.left_pct;
        p.drift(&mut rng);
        assert!((40.0..100.0).contains(&p.top_pct));
        assert!((p.left_pct - left_before).abs() <= 15.0);
    }
}

#[test]
fn style_carries_position_and_transition() {
    let p = Particle {
        left_pct: 12.0,
        top_pct: 5.0,
        size_px: 20.0,
        opacity: 0.5,
        rotation_deg: -10.0,
        transform_secs: 9.0,
        top_secs: 12.5,
        first_delay_ms: 100,
        interval_ms: 6_000,
    };
    let style = p.style();
    assert!(style.contains("left: 12.00%"));
    assert!(style.contains("top: 5.00%"));
    assert!(style.contains("width: 20.00px"));
    assert!(style.contains("rotate(-10.00deg)"));
    assert!(style.contains("top 12.50s linear"));
}

// =============================================================
// spawn_all
// =============================================================

#[test]
fn spawn_all_creates_fixed_count() {
    let host = ManualTimers::new();
    let decor = spawn_all(&host, seeded(1), noop_move());
    assert_eq!(decor.len(), PARTICLE_COUNT);
    assert!(decor.is_running());
    // One first-drift timeout and one recurring interval per particle.
    assert_eq!(host.pending(), PARTICLE_COUNT * 2);
}

#[test]
fn every_particle_drifts_once_within_first_second() {
    let host = ManualTimers::new();
    let moved = Rc::new(RefCell::new(vec![0_u32; PARTICLE_COUNT]));
    let sink = Rc::clone(&moved);
    let decor = spawn_all(
        &host,
        seeded(2),
        Rc::new(move |i: usize, p: &Particle| {
            assert!((50.0..90.0).contains(&p.top_pct));
            sink.borrow_mut()[i] += 1;
        }),
    );

    host.advance(900);
    assert!(moved.borrow().iter().all(|count| *count == 1));
    assert!(decor.particles().iter().all(|p| p.top_pct >= 50.0));
}

#[test]
fn particles_keep_drifting_on_their_interval() {
    let host = ManualTimers::new();
    let moves = Rc::new(Cell::new(0_u32));
    let sink = Rc::clone(&moves);
    let _decor = spawn_all(
        &host,
        seeded(3),
        Rc::new(move |_: usize, _: &Particle| sink.set(sink.get() + 1)),
    );

    // Each interval is under 10s, so 30s yields at least three drifts each
    // plus the first drift.
    host.advance(30_000);
    let minimum = u32::try_from(PARTICLE_COUNT * 4).expect("small count");
    assert!(moves.get() >= minimum, "only {} moves", moves.get());
}

#[test]
fn stop_cancels_all_drifting() {
    let host = ManualTimers::new();
    let moves = Rc::new(Cell::new(0_u32));
    let sink = Rc::clone(&moves);
    let mut decor = spawn_all(
        &host,
        seeded(4),
        Rc::new(move |_: usize, _: &Particle| sink.set(sink.get() + 1)),
    );

    decor.stop();
    assert!(!decor.is_running());
    host.advance(60_000);
    assert_eq!(moves.get(), 0);
    assert_eq!(host.pending(), 0);
    assert_eq!(decor.len(), PARTICLE_COUNT);
}

#[test]
fn dropping_decorations_cancels_timers() {
    let host = ManualTimers::new();
    drop(spawn_all(&host, seeded(5), noop_move()));
    assert_eq!(host.pending(), 0);
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_is_zero_at_center() {
    assert_eq!(parallax_offset(500.0, 400.0, 1000.0, 800.0), (0.0, 0.0));
}

#[test]
fn parallax_spans_ten_pixels_each_way() {
    assert_eq!(parallax_offset(0.0, 0.0, 1000.0, 800.0), (-10.0, -10.0));
    assert_eq!(parallax_offset(1000.0, 800.0, 1000.0, 800.0), (10.0, 10.0));
    assert_eq!(parallax_offset(750.0, 200.0, 1000.0, 800.0), (5.0, -5.0));
}

#[test]
fn parallax_degenerate_viewport_is_zero() {
    assert_eq!(parallax_offset(10.0, 10.0, 0.0, 800.0), (0.0, 0.0));
    assert_eq!(parallax_offset(10.0, 10.0, 1000.0, 0.0), (0.0, 0.0));
}

#[test]
fn parallax_transform_formats_translate3d() {
    assert_eq!(parallax_transform((5.0, -2.5)), "translate3d(5px, -2.5px, 0)");
}
