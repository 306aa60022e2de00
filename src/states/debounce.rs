//! Debouncer
//!
//! Holds back rapidly changing input until it stops changing for a quiet
//! period. Each new value bumps a generation counter; a timer that fires
//! for an older generation is stale and settles nothing.

use std::time::Duration;

/// Identifies the value a pending timer was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Debounced value with its latest raw input
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
    settled: T,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Create a debouncer whose settled value starts at `initial`
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
            settled: initial,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Value currently driving downstream work
    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// Record a new raw value; any earlier ticket becomes stale
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Promote the pending value if `ticket` is still the latest
    ///
    /// Returns the newly settled value when it actually changed, `None` for
    /// stale tickets or when the pending value equals the settled one.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<&T> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        if value == self.settled {
            return None;
        }
        self.settled = value;
        Some(&self.settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> Debouncer<String> {
        Debouncer::new(String::new(), Duration::from_millis(500))
    }

    #[test]
    fn burst_settles_once_with_last_value() {
        let mut debouncer = debouncer();
        let tickets: Vec<_> = ["a", "ab", "abc"]
            .iter()
            .map(|q| debouncer.push(q.to_string()))
            .collect();

        let passes: Vec<String> = tickets
            .into_iter()
            .filter_map(|t| debouncer.settle(t).cloned())
            .collect();

        assert_eq!(passes, vec!["abc".to_string()]);
        assert_eq!(debouncer.settled(), "abc");
    }

    #[test]
    fn stale_ticket_does_not_settle() {
        let mut debouncer = debouncer();
        let first = debouncer.push("a".to_string());
        let _second = debouncer.push("ab".to_string());

        assert!(debouncer.settle(first).is_none());
        assert_eq!(debouncer.settled(), "");
    }

    #[test]
    fn unchanged_value_is_not_a_new_pass() {
        let mut debouncer = debouncer();
        let ticket = debouncer.push("lamp".to_string());
        assert!(debouncer.settle(ticket).is_some());

        let again = debouncer.push("lamp".to_string());
        assert!(debouncer.settle(again).is_none());
    }

    #[test]
    fn ticket_settles_only_once() {
        let mut debouncer = debouncer();
        let ticket = debouncer.push("x".to_string());
        assert!(debouncer.settle(ticket).is_some());
        assert!(debouncer.settle(ticket).is_none());
    }
}
