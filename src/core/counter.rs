//! Monotonic operation counter used for cache staleness detection.
//!
//! Every successful *mutating* git command advances the counter by exactly
//! one; read-only commands (`status`, `log`) never touch it. Cached views
//! record the counter value they were computed under and recompute whenever
//! the live value has moved past it.
//!
//! # Public API
//! - [`OperationCounter`]: cloneable atomic counter shared across threads

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-wide mutation counter, shared between the primary session and any
/// background worker threads. Clones observe the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct OperationCounter(Arc<AtomicU64>);

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value. Non-decreasing over the session lifetime.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Advance by one. Only the command executor calls this, and only after
    /// a mutating command exited successfully.
    pub fn advance(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Reinstate a value captured in a session snapshot. Not part of the
    /// mutation path; monotonicity resumes from the restored value.
    pub(crate) fn reset_to(&self, value: u64) {
        self.0.store(value, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(OperationCounter::new().current(), 0);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let counter = OperationCounter::new();
        for expected in 1..=5 {
            counter.advance();
            assert_eq!(counter.current(), expected);
        }
    }

    #[test]
    fn test_clones_share_state() {
        let counter = OperationCounter::new();
        let clone = counter.clone();
        clone.advance();
        assert_eq!(counter.current(), 1);
    }

    #[test]
    fn test_concurrent_advances_are_lossless() {
        let counter = OperationCounter::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let c = counter.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        c.advance();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.current(), 800);
    }
}
