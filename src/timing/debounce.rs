//! Trailing-edge debouncing.
//!
//! A burst of submissions collapses into one: every submission replaces the
//! pending value and pushes the deadline out by the window. The value fires
//! only once no new submission has arrived for a full window.
//!
//! Time is passed in explicitly, so the policy is deterministic under test.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Trailing-edge debouncer for values of type `T`.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Queue `value`, replacing anything pending, and restart the window.
    /// Returns when it will fire.
    pub fn submit(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// When the pending value will fire.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn test_fires_after_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.submit("higher", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(start + WINDOW), Some("higher"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + WINDOW * 4), None);
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.submit(1, start);
        debouncer.submit(2, start + Duration::from_millis(300));
        let fires_at = debouncer.submit(3, start + Duration::from_millis(600));

        // The first deadline has passed but the window was restarted.
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
        assert_eq!(fires_at, start + Duration::from_millis(1100));
        assert_eq!(debouncer.deadline(), Some(fires_at));
        assert_eq!(debouncer.poll(start + Duration::from_millis(1100)), Some(3));
    }

    #[test]
    fn test_replaced_value_never_fires() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        let first = debouncer.submit('a', now);
        debouncer.submit('b', now);

        assert_eq!(debouncer.poll(first), Some('b'));
        assert_eq!(debouncer.poll(first + WINDOW), None);
    }

    #[test]
    fn test_cancel() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.submit(7, now);
        assert_eq!(debouncer.cancel(), Some(7));
        assert_eq!(debouncer.poll(now + WINDOW), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
