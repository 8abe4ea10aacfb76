//! Browser timer host backed by `gloo-timers`.
//!
//! `Timeout` and `Interval` cancel on drop, which is the contract
//! `showcase::timer::TimerHost` expects. Outside the browser no callback is
//! ever scheduled.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use showcase::timer::TimerHost;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

/// A pending browser timer.
pub enum BrowserTimer {
    #[cfg(feature = "csr")]
    Timeout(gloo_timers::callback::Timeout),
    #[cfg(feature = "csr")]
    Interval(gloo_timers::callback::Interval),
    Inert,
}

impl TimerHost for BrowserTimers {
    type Timer = BrowserTimer;

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        #[cfg(feature = "csr")]
        {
            BrowserTimer::Timeout(gloo_timers::callback::Timeout::new(delay_ms, callback))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, callback);
            BrowserTimer::Inert
        }
    }

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        #[cfg(feature = "csr")]
        {
            BrowserTimer::Interval(gloo_timers::callback::Interval::new(period_ms, callback))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (period_ms, callback);
            BrowserTimer::Inert
        }
    }
}
