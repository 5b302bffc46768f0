//! Lock free integer counter.
//!
//! [`AtomicCounter`] provides the same operations as [`Counter`](crate::Counter)
//! without a lock. Transformations are applied by compare-and-swap:
//! the new value is computed from a snapshot and stored only if nobody changed
//! the counter meanwhile, otherwise it retries with the fresh value.
//!
//! As a consequence, transformations may run more than once per call
//! and MUST be pure functions of their argument.

use std::sync::atomic::{AtomicI64, Ordering};
use std::fmt;

use tracing::trace;

/// Thread safe integer counter based on a single `AtomicI64`.
///
/// Like [`Counter`](crate::Counter), the value wraps around on overflow.
#[repr(align(64))]
pub struct AtomicCounter {
    initial: i64,
    value: AtomicI64,
}

impl AtomicCounter {
    /// Create new atomic counter starting from `initial`.
    pub const fn new(initial: i64) -> Self {
        AtomicCounter {
            initial,
            value: AtomicI64::new(initial),
        }
    }

    /// Value this counter was constructed with.
    pub fn initial_value(&self) -> i64 {
        self.initial
    }

    /// Increase the value by 1.
    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::AcqRel);
    }

    /// Decrease the value by 1.
    pub fn decrement(&self) {
        self.value.fetch_sub(1, Ordering::AcqRel);
    }

    /// Current value.
    ///
    /// It uses `Acquire` ordering.
    pub fn get_value(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    /// Increase the value by 1 and returns the increased value.
    pub fn increment_and_get(&self) -> i64 {
        self.value.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
    }

    /// Decrease the value by 1 and returns the decreased value.
    pub fn decrement_and_get(&self) -> i64 {
        self.value.fetch_sub(1, Ordering::AcqRel).wrapping_sub(1)
    }

    /// Replace the value with `f(value)`.
    ///
    /// `f` may be called multiple times under contention.
    pub fn operate<F>(&self, f: F)
    where
        F: Fn(i64) -> i64,
    {
        self.operate_and_get(f);
    }

    /// Replace the value with `f(value)` and returns the new value.
    ///
    /// `f` may be called multiple times under contention.
    pub fn operate_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        let mut current = self.value.load(Ordering::Acquire);

        loop {
            let next = f(current);

            match self.value.compare_exchange_weak(
                current, next, Ordering::AcqRel, Ordering::Acquire
            ) {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }

    /// Replace the value with the result of fallible `f`.
    ///
    /// If `f` returns `Err`, the value is left unchanged and the error is returned as-is.
    /// `f` may be called multiple times under contention.
    pub fn try_operate<F, E>(&self, f: F) -> Result<i64, E>
    where
        F: Fn(i64) -> Result<i64, E>,
    {
        let mut current = self.value.load(Ordering::Acquire);

        loop {
            let next = f(current)?;

            match self.value.compare_exchange_weak(
                current, next, Ordering::AcqRel, Ordering::Acquire
            ) {
                Ok(_) => return Ok(next),
                Err(actual) => current = actual,
            }
        }
    }

    /// Restore the value this counter was constructed with.
    pub fn reset(&self) {
        let prev = self.value.swap(self.initial, Ordering::AcqRel);
        trace!(from = prev, to = self.initial, "atomic counter reset");
    }

    /// Consume the counter and returns its current value.
    pub fn into_inner(self) -> i64 {
        self.value.into_inner()
    }
}

impl Default for AtomicCounter {
    fn default() -> Self {
        AtomicCounter::new(0)
    }
}

impl From<i64> for AtomicCounter {
    fn from(initial: i64) -> Self {
        AtomicCounter::new(initial)
    }
}

impl fmt::Debug for AtomicCounter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AtomicCounter({}, initial: {})", self.get_value(), self.initial)
    }
}
