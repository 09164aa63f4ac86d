//! Trailing-edge debounce on top of `gloo_timers`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Runs only the last scheduled action once `delay` passes without another.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: u32::try_from(delay.as_millis()).unwrap_or(u32::MAX),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, action);
        // Dropping the previous timeout cancels it
        self.pending.borrow_mut().replace(timeout);
    }
}
