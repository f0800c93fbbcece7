//! Debounced recompile scheduling.
//!
//! Each editor change re-arms a single deadline; only the last scheduled
//! call fires. Time is passed in explicitly so tests never sleep.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and a preview recompile.
pub const PREVIEW_DEBOUNCE: Duration = Duration::from_millis(300);

/// Cancel-and-rearm deadline coalescing.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now + delay`, cancelling any
    /// pending one.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once per armed deadline, when it has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(PREVIEW_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_after_delay() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.schedule(t0);
        assert!(debouncer.is_pending());
        assert!(!debouncer.fire(t0 + 100 * MS));
        assert!(debouncer.fire(t0 + 300 * MS));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_fires_only_once() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.schedule(t0);
        assert!(debouncer.fire(t0 + 400 * MS));
        assert!(!debouncer.fire(t0 + 800 * MS));
    }

    #[test]
    fn test_reschedule_pushes_deadline_back() {
        // A keystroke at t0 and another at t0+200 coalesce into one fire at
        // t0+500, not two.
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.schedule(t0);
        debouncer.schedule(t0 + 200 * MS);
        assert!(!debouncer.fire(t0 + 350 * MS));
        assert!(debouncer.fire(t0 + 500 * MS));
    }

    #[test]
    fn test_cancel_drops_pending_fire() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.schedule(t0);
        debouncer.cancel();
        assert!(!debouncer.fire(t0 + 600 * MS));
    }

    #[test]
    fn test_idle_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.fire(Instant::now()));
    }
}
