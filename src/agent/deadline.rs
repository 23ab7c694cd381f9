use std::time::{Duration, Instant};

/// Wall-clock budget for one move.
///
/// A `Deadline` is created by the harness before asking a player for a move
/// and is shared by reference through the whole search. It is only ever
/// polled; within one move the remaining budget is monotonically
/// non-increasing.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    /// Deadline expiring `budget` from now.
    pub fn from_now(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
        }
    }

    /// Seconds left until expiry, 0.0 once expired (never negative).
    pub fn seconds_remaining(&self) -> f64 {
        self.expires_at
            .saturating_duration_since(Instant::now())
            .as_secs_f64()
    }

    pub fn has_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_deadline_has_budget() {
        let deadline = Deadline::from_now(Duration::from_secs(10));
        assert!(!deadline.has_expired());
        let remaining = deadline.seconds_remaining();
        assert!(remaining > 9.0 && remaining <= 10.0, "remaining: {}", remaining);
    }

    #[test]
    fn test_zero_budget_is_expired() {
        let deadline = Deadline::from_now(Duration::ZERO);
        assert!(deadline.has_expired());
        assert_eq!(deadline.seconds_remaining(), 0.0);
    }

    #[test]
    fn test_remaining_never_increases() {
        let deadline = Deadline::from_now(Duration::from_millis(50));
        let first = deadline.seconds_remaining();
        let second = deadline.seconds_remaining();
        assert!(second <= first);
    }
}
