//! Manual clock implementing [`TimerHost`] for deterministic tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::TimerHost;

enum Callback {
    Once(Option<Box<dyn FnOnce()>>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due_ms: u64,
    period_ms: Option<u64>,
    callback: Callback,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    entries: Vec<Entry>,
}

/// Timer host driven by [`ManualTimers::advance`].
#[derive(Clone, Default)]
pub(crate) struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its entry when dropped.
pub(crate) struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualTimers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Live (uncancelled, not yet completed) timers.
    pub(crate) fn pending(&self) -> usize {
        self.clock.borrow().entries.iter().filter(|e| !e.cancelled.get()).count()
    }

    /// Move the clock forward, firing due callbacks in due-time order.
    pub(crate) fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.entries.retain(|e| !e.cancelled.get());
                let idx = clock
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due_ms <= target)
                    .min_by_key(|(_, e)| e.due_ms)
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let entry = clock.entries.remove(i);
                    clock.now_ms = entry.due_ms;
                    entry
                })
            };
            let Some(mut entry) = next else {
                break;
            };
            let reschedule = match &mut entry.callback {
                Callback::Once(cb) => {
                    if let Some(cb) = cb.take() {
                        cb();
                    }
                    entry.cancelled.set(true);
                    None
                }
                Callback::Repeat(cb) => {
                    cb();
                    entry.period_ms
                }
            };
            if let Some(period) = reschedule {
                entry.due_ms += period.max(1);
                self.clock.borrow_mut().entries.push(entry);
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }

    fn schedule(&self, delay_ms: u32, period_ms: Option<u64>, callback: Callback) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.entries.push(Entry { due_ms, period_ms, callback, cancelled: Rc::clone(&cancelled) });
        ManualTimer { cancelled }
    }
}

impl TimerHost for ManualTimers {
    type Timer = ManualTimer;

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualTimer {
        self.schedule(delay_ms, None, Callback::Once(Some(callback)))
    }

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualTimer {
        self.schedule(period_ms, Some(u64::from(period_ms)), Callback::Repeat(callback))
    }
}
