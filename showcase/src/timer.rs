//! Host timer capability and cancellable task handles.
//!
//! Timers are cancelled by dropping them, which is how `gloo-timers`
//! behaves in the browser. [`TaskHandle`] groups the timers that make up one
//! recurring task so it can be stopped explicitly.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[cfg(test)]
#[path = "timer_fake.rs"]
pub(crate) mod fake;

/// Schedules callbacks on the host event loop.
pub trait TimerHost {
    /// Pending timer. Dropping it cancels the callback.
    type Timer;

    /// Run `callback` once after `delay_ms`.
    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;

    /// Run `callback` every `period_ms` until the timer is dropped.
    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Timer;
}

/// Owns the timers of one recurring task.
#[derive(Debug)]
pub struct TaskHandle<T> {
    timers: Vec<T>,
}

impl<T> Default for TaskHandle<T> {
    fn default() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<T> TaskHandle<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `timer` alive until [`stop`](Self::stop) or drop.
    pub fn hold(&mut self, timer: T) {
        self.timers.push(timer);
    }

    /// Cancel every held timer. Stopping twice is a no-op.
    pub fn stop(&mut self) {
        self.timers.clear();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timers.is_empty()
    }
}
