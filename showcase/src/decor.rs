//! Decorative petals and pointer parallax.
//!
//! [`spawn_all`] creates a fixed set of particles with randomized looks and
//! starts their drift timers on a [`TimerHost`]. Drifting has no end
//! condition; it runs until [`Decorations::stop`] or until the value is
//! dropped with the page.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

use crate::consts::{
    DRIFT_INTERVAL_MAX_MS, DRIFT_INTERVAL_MIN_MS, DRIFT_SWAY_PCT, DRIFT_TOP_MAX_PCT,
    DRIFT_TOP_MIN_PCT, FIRST_DRIFT_DELAY_MAX_MS, FIRST_DRIFT_DELAY_MIN_MS, FIRST_DRIFT_SWAY_PCT,
    FIRST_DRIFT_TOP_MAX_PCT, FIRST_DRIFT_TOP_MIN_PCT, PARALLAX_SCALE, PARTICLE_COUNT,
    PARTICLE_OPACITY_MAX, PARTICLE_OPACITY_MIN, PARTICLE_ROTATION_DEG, PARTICLE_SIZE_MAX_PX,
    PARTICLE_SIZE_MIN_PX, SPAWN_LEFT_MAX_PCT, SPAWN_TOP_MAX_PCT, TRANSITION_MAX_SECS,
    TRANSITION_MIN_SECS,
};
use crate::timer::{TaskHandle, TimerHost};

/// Inline SVG petal used as every particle's image source.
pub const PETAL_SVG_DATA_URI: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' \
     width='28' height='28'><path d='M14 1.5c3 0 5 2.3 5 5 0 3.2-5 8.8-5 8.8s-5-5.6-5-8.8c0-2.7 2-5 5-5z' \
     fill='%23ff7eb6' opacity='0.95'/></svg>";

/// One floating petal.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub rotation_deg: f64,
    pub transform_secs: f64,
    pub top_secs: f64,
    /// Delay before the first drift.
    pub first_delay_ms: u32,
    /// Period of the recurring drift.
    pub interval_ms: u32,
}

impl Particle {
    /// Randomize a new particle near the top of the container.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: f64::from(rng.random_range(0..SPAWN_LEFT_MAX_PCT)),
            top_pct: f64::from(rng.random_range(0..SPAWN_TOP_MAX_PCT)),
            size_px: rng.random_range(PARTICLE_SIZE_MIN_PX..PARTICLE_SIZE_MAX_PX),
            opacity: rng.random_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX),
            rotation_deg: rng.random_range(-PARTICLE_ROTATION_DEG..PARTICLE_ROTATION_DEG),
            transform_secs: rng.random_range(TRANSITION_MIN_SECS..TRANSITION_MAX_SECS),
            top_secs: rng.random_range(TRANSITION_MIN_SECS..TRANSITION_MAX_SECS),
            first_delay_ms: rng.random_range(FIRST_DRIFT_DELAY_MIN_MS..FIRST_DRIFT_DELAY_MAX_MS),
            interval_ms: rng.random_range(DRIFT_INTERVAL_MIN_MS..DRIFT_INTERVAL_MAX_MS),
        }
    }

    /// The initial drop from the spawn band toward the lower half.
    pub fn first_drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.top_pct = rng.random_range(FIRST_DRIFT_TOP_MIN_PCT..FIRST_DRIFT_TOP_MAX_PCT);
        self.left_pct += rng.random_range(-FIRST_DRIFT_SWAY_PCT..FIRST_DRIFT_SWAY_PCT);
    }

    /// A recurring drift to a new height with wider sway.
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.top_pct = rng.random_range(DRIFT_TOP_MIN_PCT..DRIFT_TOP_MAX_PCT);
        self.left_pct += rng.random_range(-DRIFT_SWAY_PCT..DRIFT_SWAY_PCT);
    }

    /// Inline style for the particle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "position: absolute; left: {:.2}%; top: {:.2}%; width: {:.2}px; opacity: {:.2}; \
             transform: rotate({:.2}deg); transition: transform {:.2}s linear, top {:.2}s linear;",
            self.left_pct,
            self.top_pct,
            self.size_px,
            self.opacity,
            self.rotation_deg,
            self.transform_secs,
            self.top_secs
        )
    }
}

/// Live particles and the timers that move them.
pub struct Decorations<T> {
    particles: Vec<Rc<RefCell<Particle>>>,
    tasks: Vec<TaskHandle<T>>,
}

impl<T> Decorations<T> {
    /// Snapshot of every particle's current state.
    #[must_use]
    pub fn particles(&self) -> Vec<Particle> {
        self.particles.iter().map(|p| p.borrow().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Cancel all drift timers. Particles stay where they are.
    pub fn stop(&mut self) {
        for task in &mut self.tasks {
            task.stop();
        }
        log::debug!("decor: stopped {} drift tasks", self.tasks.len());
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(TaskHandle::is_running)
    }
}

/// Spawn [`PARTICLE_COUNT`] particles and start their drift timers.
///
/// `on_move(index, particle)` runs after every drift so the host can restyle
/// the matching element. Initial styles come from
/// [`Decorations::particles`] right after this returns.
pub fn spawn_all<H, R>(
    host: &H,
    rng: Rc<RefCell<R>>,
    on_move: Rc<dyn Fn(usize, &Particle)>,
) -> Decorations<H::Timer>
where
    H: TimerHost,
    R: Rng + 'static,
{
    let particles: Vec<Rc<RefCell<Particle>>> = (0..PARTICLE_COUNT)
        .map(|_| Rc::new(RefCell::new(Particle::spawn(&mut *rng.borrow_mut()))))
        .collect();

    let tasks = particles
        .iter()
        .enumerate()
        .map(|(index, particle)| start_drift(host, index, particle, &rng, &on_move))
        .collect();

    log::debug!("decor: spawned {PARTICLE_COUNT} particles");
    Decorations { particles, tasks }
}

fn start_drift<H, R>(
    host: &H,
    index: usize,
    particle: &Rc<RefCell<Particle>>,
    rng: &Rc<RefCell<R>>,
    on_move: &Rc<dyn Fn(usize, &Particle)>,
) -> TaskHandle<H::Timer>
where
    H: TimerHost,
    R: Rng + 'static,
{
    let (first_delay_ms, interval_ms) = {
        let p = particle.borrow();
        (p.first_delay_ms, p.interval_ms)
    };
    let mut task = TaskHandle::new();

    let first = {
        let particle = Rc::clone(particle);
        let rng = Rc::clone(rng);
        let on_move = Rc::clone(on_move);
        host.timeout(
            first_delay_ms,
            Box::new(move || {
                particle.borrow_mut().first_drift(&mut *rng.borrow_mut());
                on_move(index, &*particle.borrow());
            }),
        )
    };
    task.hold(first);

    let repeat = {
        let particle = Rc::clone(particle);
        let rng = Rc::clone(rng);
        let on_move = Rc::clone(on_move);
        host.interval(
            interval_ms,
            Box::new(move || {
                particle.borrow_mut().drift(&mut *rng.borrow_mut());
                on_move(index, &*particle.borrow());
            }),
        )
    };
    task.hold(repeat);

    task
}

/// Parallax offset in pixels for a pointer at `(x, y)` in a `width × height`
/// viewport. Each axis spans `±PARALLAX_SCALE / 2`; a degenerate viewport
/// yields no offset.
#[must_use]
pub fn parallax_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    ((x / width - 0.5) * PARALLAX_SCALE, (y / height - 0.5) * PARALLAX_SCALE)
}

/// CSS transform applying a parallax offset.
#[must_use]
pub fn parallax_transform((dx, dy): (f64, f64)) -> String {
    format!("translate3d({dx}px, {dy}px, 0)")
}
