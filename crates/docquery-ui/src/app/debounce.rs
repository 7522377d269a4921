//! Debounce wrapper over a callback.

use crate::logic::should_fire_leading;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Coalesces rapid repeated calls into one invocation per quiet period.
///
/// Trailing mode (the default) invokes the callback once the quiet period
/// elapses after the last call; leading mode invokes it on the first call of
/// a burst instead. Every call cancels the previously scheduled invocation.
pub struct Debounce {
    wait_ms: u32,
    immediate: bool,
    callback: Rc<dyn Fn()>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    /// Trailing debounce: fire once `wait_ms` of quiet follows the last call.
    #[must_use]
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self::with_mode(wait_ms, false, callback)
    }

    /// Leading debounce: fire on the first call of a burst, then stay quiet
    /// until `wait_ms` passes without further calls.
    #[must_use]
    pub fn leading(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self::with_mode(wait_ms, true, callback)
    }

    fn with_mode(wait_ms: u32, immediate: bool, callback: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            immediate,
            callback: Rc::new(callback),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Record a call; schedules (or in leading mode may perform) the single
    /// invocation for the current burst.
    pub fn call(&self) {
        let pending = self.timer.borrow().is_some();
        if should_fire_leading(self.immediate, pending) {
            (self.callback)();
        }
        let timer = Rc::clone(&self.timer);
        let callback = Rc::clone(&self.callback);
        let immediate = self.immediate;
        let handle = Timeout::new(self.wait_ms, move || {
            timer.borrow_mut().take();
            if !immediate {
                callback();
            }
        });
        if let Some(previous) = self.timer.borrow_mut().replace(handle) {
            previous.cancel();
        }
    }

    /// Drop any pending invocation without firing it.
    pub fn cancel(&self) {
        if let Some(previous) = self.timer.borrow_mut().take() {
            previous.cancel();
        }
    }
}
