//! Wall-clock source for cache expiry, in whole epoch seconds.

use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Seconds since the Unix epoch, rounded down.
    fn now_seconds(&self) -> u64;
}

/// The real clock: `Date.now()` in the browser, `SystemTime` natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_seconds(&self) -> u64 {
        (js_sys::Date::now() / crate::config::MS_PER_SECOND).floor() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_seconds(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn at(seconds: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(seconds)),
        }
    }

    pub fn set(&self, seconds: u64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: u64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_shared() {
        let clock = ManualClock::at(5);
        let other = clock.clone();
        clock.advance(6);
        assert_eq!(other.now_seconds(), 11);
        other.set(0);
        assert_eq!(clock.now_seconds(), 0);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_seconds() > 1_577_836_800);
    }
}
