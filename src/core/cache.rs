//! Single-slot cache entries stamped with the operation counter.
//!
//! Each cached view (file status, commit history, branch list, clean flag)
//! holds exactly one value plus the counter value it was computed under. A
//! view is stale when it has never been computed or when the counter has
//! moved since its stamp. There is no eviction policy beyond stale/fresh;
//! cardinality is one slot per view.
//!
//! # Public API
//! - [`CacheEntry`]: value + stamp + staleness logic

use crate::core::counter::OperationCounter;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};

/// One cached view value. Empty until first computed; `invalidate` returns it
/// to the empty state so the next access recomputes regardless of the
/// counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    value: Option<T>,
    stamp: u64,
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self {
            value: None,
            stamp: 0,
        }
    }
}

impl<T: Clone> CacheEntry<T> {
    /// Stale iff never computed or computed under an older counter value.
    pub fn is_stale(&self, counter: &OperationCounter) -> bool {
        self.value.is_none() || self.stamp != counter.current()
    }

    /// Return the cached value, recomputing first if stale. The stamp is
    /// taken *after* `compute` finishes so a mutation that lands mid-compute
    /// leaves the entry stale rather than falsely fresh.
    pub fn get_or_recompute(
        &mut self,
        counter: &OperationCounter,
        compute: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        if !self.is_stale(counter) {
            if let Some(value) = &self.value {
                return Ok(value.clone());
            }
        }
        let value = compute()?;
        self.stamp = counter.current();
        self.value = Some(value.clone());
        Ok(value)
    }

    /// Forced-stale marker for consumers that know a refresh is warranted
    /// even though the counter has not moved.
    pub fn invalidate(&mut self) {
        self.value = None;
    }

    /// Peek without recomputing.
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }
}
