use gloo_timers::callback::Timeout;
use std::collections::HashMap;
use std::time::Duration;

use crate::login::TimerId;

/// Browser timeouts owned by a view, one per [`TimerId`].
/// `gloo_timers::callback::Timeout` calls `clearTimeout` on drop, so
/// replacing or clearing an entry guarantees its callback never runs.
/// View teardown relies on this through [`clear`](Self::clear).
#[derive(Default)]
pub struct TimerRegistry {
    armed: HashMap<TimerId, Timeout>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, timer: TimerId, after: Duration, callback: impl FnOnce() + 'static) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);

        if self.armed.insert(timer, Timeout::new(millis, callback)).is_some() {
            log::debug!("Re-armed {} before it fired", timer);
        }
    }

    /// Forget a timer that has fired
    pub fn release(&mut self, timer: TimerId) {
        self.armed.remove(&timer);
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.armed.contains_key(&timer)
    }

    /// Cancel everything still pending
    pub fn clear(&mut self) {
        self.armed.clear();
    }
}
