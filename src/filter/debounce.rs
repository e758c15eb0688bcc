// src/filter/debounce.rs
//! Coalesces bursts of free-text edits into a single query-string write.
//!
//! The caller owns the clock: every method takes `now`, so the same logic
//! drives a real timer loop or a test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    due: Instant,
}

impl QueryDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending value and pushes the deadline out to `now + delay`.
    pub fn schedule(&mut self, now: Instant, value: String) {
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
        });
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return self.pending.take().map(|p| p.value);
        }
        None
    }

    /// Takes the pending value regardless of the deadline.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_not_due_before_delay() {
        let start = Instant::now();
        let mut d = QueryDebouncer::new(DELAY);
        d.schedule(start, "a".to_string());
        assert_eq!(d.poll(start + Duration::from_millis(299)), None);
        assert_eq!(d.poll(start + DELAY), Some("a".to_string()));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_burst_coalesces_to_last() {
        let start = Instant::now();
        let mut d = QueryDebouncer::new(DELAY);
        d.schedule(start, "m".to_string());
        d.schedule(start + Duration::from_millis(100), "me".to_string());
        d.schedule(start + Duration::from_millis(200), "men".to_string());
        // First edit's deadline has passed, but the burst rescheduled it.
        assert_eq!(d.poll(start + Duration::from_millis(350)), None);
        assert_eq!(d.poll(start + Duration::from_millis(500)), Some("men".to_string()));
        assert_eq!(d.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_flush_and_cancel() {
        let start = Instant::now();
        let mut d = QueryDebouncer::new(DELAY);
        d.schedule(start, "x".to_string());
        assert_eq!(d.flush(), Some("x".to_string()));
        d.schedule(start, "y".to_string());
        d.cancel();
        assert_eq!(d.poll(start + DELAY * 2), None);
    }
}
