//! One-shot deferred firing keyed by identity.
//!
//! Scheduling replaces whatever was scheduled before. The key comes back
//! when the timer fires so the receiver can check it still applies.

use std::time::{Duration, Instant};

/// A cancellable one-shot timer carrying a key.
#[derive(Clone, Debug)]
pub struct Deferred<K> {
    delay: Duration,
    scheduled: Option<(K, Instant)>,
}

impl<K: Copy + Eq> Deferred<K> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            scheduled: None,
        }
    }

    /// Schedule `key` to fire `delay` after `now`. Returns the due time.
    pub fn schedule(&mut self, key: K, now: Instant) -> Instant {
        let due = now + self.delay;
        self.scheduled = Some((key, due));
        due
    }

    /// Take the key if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<K> {
        match self.scheduled {
            Some((key, due)) if now >= due => {
                self.scheduled = None;
                Some(key)
            }
            _ => None,
        }
    }

    /// Cancel whatever is scheduled.
    pub fn cancel(&mut self) -> Option<K> {
        self.scheduled.take().map(|(key, _)| key)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.scheduled.map(|(_, due)| due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_fires_once_when_due() {
        let now = Instant::now();
        let mut timer = Deferred::new(DELAY);

        let due = timer.schedule(5u32, now);

        assert_eq!(due, now + DELAY);
        assert_eq!(timer.poll(now + Duration::from_millis(1999)), None);
        assert_eq!(timer.poll(due), Some(5));
        assert_eq!(timer.poll(due + DELAY), None);
    }

    #[test]
    fn test_reschedule_replaces() {
        let now = Instant::now();
        let mut timer = Deferred::new(DELAY);

        timer.schedule(1u32, now);
        timer.schedule(2u32, now + Duration::from_millis(500));

        assert_eq!(timer.poll(now + DELAY), None);
        assert_eq!(timer.poll(now + DELAY + Duration::from_millis(500)), Some(2));
    }

    #[test]
    fn test_cancel() {
        let now = Instant::now();
        let mut timer = Deferred::new(DELAY);

        timer.schedule(1u32, now);
        assert_eq!(timer.cancel(), Some(1));
        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.poll(now + DELAY), None);
    }
}
