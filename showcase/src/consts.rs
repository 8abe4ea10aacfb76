//! Shared constants for the behavior core.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "siteTheme";

/// Stored value for light mode. Dark mode is stored as an absent key.
pub const THEME_LIGHT_VALUE: &str = "light";

/// Class applied to the document root while light mode is active.
pub const LIGHT_CLASS: &str = "light";

/// Indicator shown while light mode is active.
pub const LIGHT_MODE_GLYPH: &str = "\u{1F319}";

/// Indicator shown while dark mode is active.
pub const DARK_MODE_GLYPH: &str = "\u{1F31E}";

// ── Slider ──────────────────────────────────────────────────────

/// Horizontal travel a touch must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Viewports narrower than this use the fixed inset.
pub const NARROW_BREAKPOINT_PX: f64 = 980.0;

/// Left inset applied to the active panel on narrow viewports.
pub const NARROW_INSET_PX: f64 = 24.0;

/// Leftward nudge applied after centering on wide viewports.
pub const WIDE_CENTER_NUDGE_PX: f64 = 30.0;

/// Delay before the one-shot re-centering pass after mount.
pub const SETTLE_DELAY_MS: u32 = 400;

// ── Reveal ──────────────────────────────────────────────────────

/// Minimum visible intersection ratio that reveals an element.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Selector list of elements that reveal on scroll.
pub const REVEAL_SELECTORS: &str = ".card, .slide, .hero-inner, .section-head";

/// Class added to every observed element before it reveals.
pub const REVEAL_PENDING_CLASS: &str = "fade-up";

/// Class added once an element reveals.
pub const REVEAL_SHOWN_CLASS: &str = "show";

// ── Decorations ─────────────────────────────────────────────────

/// Number of particles spawned at startup.
pub const PARTICLE_COUNT: usize = 7;

/// Exclusive upper bound of the initial horizontal position, in percent.
pub const SPAWN_LEFT_MAX_PCT: u32 = 80;

/// Exclusive upper bound of the initial vertical position, in percent.
pub const SPAWN_TOP_MAX_PCT: u32 = 30;

pub const PARTICLE_SIZE_MIN_PX: f64 = 14.0;
pub const PARTICLE_SIZE_MAX_PX: f64 = 32.0;

pub const PARTICLE_OPACITY_MIN: f64 = 0.4;
pub const PARTICLE_OPACITY_MAX: f64 = 0.9;

/// Initial rotation is drawn from `-PARTICLE_ROTATION_DEG..PARTICLE_ROTATION_DEG`.
pub const PARTICLE_ROTATION_DEG: f64 = 20.0;

pub const TRANSITION_MIN_SECS: f64 = 8.0;
pub const TRANSITION_MAX_SECS: f64 = 16.0;

pub const FIRST_DRIFT_DELAY_MIN_MS: u32 = 100;
pub const FIRST_DRIFT_DELAY_MAX_MS: u32 = 900;

pub const DRIFT_INTERVAL_MIN_MS: u32 = 6_000;
pub const DRIFT_INTERVAL_MAX_MS: u32 = 10_000;

pub const FIRST_DRIFT_TOP_MIN_PCT: f64 = 50.0;
pub const FIRST_DRIFT_TOP_MAX_PCT: f64 = 90.0;
pub const FIRST_DRIFT_SWAY_PCT: f64 = 10.0;

pub const DRIFT_TOP_MIN_PCT: f64 = 40.0;
pub const DRIFT_TOP_MAX_PCT: f64 = 100.0;
pub const DRIFT_SWAY_PCT: f64 = 15.0;

/// Pointer parallax gain. Offsets span `±PARALLAX_SCALE / 2` pixels.
pub const PARALLAX_SCALE: f64 = 20.0;

/// Class of elements translated by the parallax effect.
pub const PARALLAX_CLASS: &str = "decor-bg";

// ── Contact ─────────────────────────────────────────────────────

pub const CONTACT_SUBJECT_PREFIX: &str = "Portfolio contact from ";
pub const CONTACT_BODY_SEPARATOR: &str = "\n\nContact: ";
