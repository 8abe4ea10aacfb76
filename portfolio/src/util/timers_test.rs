#![cfg(not(feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;

use showcase::timer::TaskHandle;

use super::*;

#[test]
fn native_timers_never_fire() {
    let fired = Rc::new(Cell::new(false));
    let sink = Rc::clone(&fired);
    let timer = BrowserTimers.timeout(0, Box::new(move || sink.set(true)));
    assert!(matches!(timer, BrowserTimer::Inert));
    drop(timer);
    assert!(!fired.get());
}

#[test]
fn native_timers_can_be_held_and_stopped() {
    let mut task = TaskHandle::new();
    task.hold(BrowserTimers.interval(10, Box::new(|| {})));
    assert!(task.is_running());
    task.stop();
    assert!(!task.is_running());
}
