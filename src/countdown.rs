//! Countdown scheduling for the playing phase.
//!
//! The store arms the countdown when it enters `Phase::Playing` and cancels it on
//! every phase change, so at most one ticking timer is ever live.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::TICK_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One second elapsed.
    Tick,
    /// The delay requested through [`Countdown::defer_end`] expired.
    DeferredEnd,
}

pub trait Countdown {
    /// Starts one new ticking timer. Callers go through [`Countdown::arm`].
    fn start(&mut self);
    fn cancel(&mut self);

    /// Starts ticking once per second. Any live timer is cancelled first.
    fn arm(&mut self) {
        self.cancel();
        self.start();
    }

    fn is_armed(&self) -> bool;
    /// Requests a single `DeferredEnd` event after `delay_ms`, replacing any pending one.
    fn defer_end(&mut self, delay_ms: u32);
    fn cancel_deferred(&mut self);
}

/// Browser countdown backed by `setInterval` / `setTimeout`.
pub struct IntervalCountdown {
    on_event: Rc<dyn Fn(CountdownEvent)>,
    interval: Option<(i32, Closure<dyn FnMut()>)>,
    deferred: Option<i32>,
}

impl IntervalCountdown {
    pub fn new(on_event: impl Fn(CountdownEvent) + 'static) -> Self {
        Self {
            on_event: Rc::new(on_event),
            interval: None,
            deferred: None,
        }
    }
}

impl Countdown for IntervalCountdown {
    fn start(&mut self) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; countdown not armed");
            return;
        };
        let on_event = self.on_event.clone();
        let tick = Closure::wrap(Box::new(move || on_event(CountdownEvent::Tick)) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TICK_MS as i32,
        ) {
            Ok(id) => self.interval = Some((id, tick)),
            Err(e) => log::warn!("setInterval failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some((id, _tick)) = self.interval.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    fn defer_end(&mut self, delay_ms: u32) {
        self.cancel_deferred();
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_event = self.on_event.clone();
        // Freed by wasm-bindgen after its single call, so firing never drops a closure we own.
        let callback = Closure::once_into_js(move || on_event(CountdownEvent::DeferredEnd));
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => self.deferred = Some(id),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }

    fn cancel_deferred(&mut self) {
        if let Some(id) = self.deferred.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for IntervalCountdown {
    fn drop(&mut self) {
        self.cancel();
        self.cancel_deferred();
    }
}

/// Countdown whose events are delivered by the caller. Used by headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualCountdown {
    live: u32,
    peak: u32,
    arms: u32,
    pending_end: Option<u32>,
}

impl ManualCountdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the countdown has been armed.
    pub fn arms(&self) -> u32 {
        self.arms
    }

    /// Most timers that were ever live at the same time.
    pub fn peak(&self) -> u32 {
        self.peak
    }

    /// Delay of the pending deferred end, if one is scheduled.
    pub fn pending_end(&self) -> Option<u32> {
        self.pending_end
    }
}

impl Countdown for ManualCountdown {
    fn start(&mut self) {
        self.live += 1;
        self.peak = self.peak.max(self.live);
        self.arms += 1;
    }

    fn cancel(&mut self) {
        self.live = 0;
    }

    fn is_armed(&self) -> bool {
        self.live > 0
    }

    fn defer_end(&mut self, delay_ms: u32) {
        self.pending_end = Some(delay_ms);
    }

    fn cancel_deferred(&mut self) {
        self.pending_end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearm_keeps_single_timer() {
        let mut c = ManualCountdown::new();
        c.arm();
        c.arm();
        c.arm();
        assert!(c.is_armed());
        assert_eq!(c.arms(), 3);
        assert_eq!(c.peak(), 1);
        c.cancel();
        assert!(!c.is_armed());
    }

    #[test]
    fn start_without_cancel_stacks_timers() {
        let mut c = ManualCountdown::new();
        c.start();
        c.start();
        assert_eq!(c.peak(), 2);
        c.cancel();
        c.arm();
        assert_eq!(c.peak(), 2);
        assert!(c.is_armed());
    }

    #[test]
    fn deferred_end_is_replaced_not_queued() {
        let mut c = ManualCountdown::new();
        c.defer_end(100);
        c.defer_end(250);
        assert_eq!(c.pending_end(), Some(250));
        c.cancel_deferred();
        assert_eq!(c.pending_end(), None);
    }
}
