//! Mutex guarded integer counter.
//!
//! Every operation of [`Counter`] acquires its guard, does its work and releases
//! the guard before returning. The guard is scoped, so it is released on every
//! exit path, including a panic unwinding out of a caller-supplied transformation.
//!
//! # Reentrancy
//!
//! The guard is NOT reentrant. Transformations passed to [`Counter::operate`],
//! [`Counter::operate_and_get`] and [`Counter::try_operate`] run while the guard
//! is held, so they MUST NOT call any operation on the same counter.
//! Doing so deadlocks the calling thread.

use std::fmt;
use std::mem;

use parking_lot::Mutex;
use tracing::trace;

/// Thread safe integer counter guarded by a mutex.
///
/// The value is an `i64` which wraps around on overflow, so no operation can fail.
/// Share it between threads with `Arc<Counter>` or plain references.
pub struct Counter {
    initial: i64,
    value: Mutex<i64>,
}

impl Counter {
    /// Create new counter starting from `initial`.
    ///
    /// [`reset`](Counter::reset) brings the counter back to this value.
    pub const fn new(initial: i64) -> Self {
        Counter {
            initial,
            value: parking_lot::const_mutex(initial),
        }
    }

    /// Value this counter was constructed with.
    pub fn initial_value(&self) -> i64 {
        self.initial
    }

    /// Increase the value by 1.
    pub fn increment(&self) {
        let mut value = self.value.lock();
        *value = value.wrapping_add(1);
    }

    /// Decrease the value by 1.
    pub fn decrement(&self) {
        let mut value = self.value.lock();
        *value = value.wrapping_sub(1);
    }

    /// Current value.
    pub fn get_value(&self) -> i64 {
        *self.value.lock()
    }

    /// Increase the value by 1 and returns the increased value.
    pub fn increment_and_get(&self) -> i64 {
        let mut value = self.value.lock();
        *value = value.wrapping_add(1);
        *value
    }

    /// Decrease the value by 1 and returns the decreased value.
    pub fn decrement_and_get(&self) -> i64 {
        let mut value = self.value.lock();
        *value = value.wrapping_sub(1);
        *value
    }

    /// Replace the value with `f(value)` in a single critical section.
    ///
    /// `f` runs while the guard is held. It MUST NOT touch this counter.
    pub fn operate<F>(&self, f: F)
    where
        F: FnOnce(i64) -> i64,
    {
        let mut value = self.value.lock();
        *value = f(*value);
    }

    /// Replace the value with `f(value)` and returns the new value.
    ///
    /// `f` runs while the guard is held. It MUST NOT touch this counter.
    pub fn operate_and_get<F>(&self, f: F) -> i64
    where
        F: FnOnce(i64) -> i64,
    {
        let mut value = self.value.lock();
        *value = f(*value);
        *value
    }

    /// Replace the value with the result of fallible `f`.
    ///
    /// If `f` returns `Err`, the value is left unchanged and the error is returned as-is.
    /// Otherwise returns the new value.
    ///
    /// `f` runs while the guard is held. It MUST NOT touch this counter.
    pub fn try_operate<F, E>(&self, f: F) -> Result<i64, E>
    where
        F: FnOnce(i64) -> Result<i64, E>,
    {
        let mut value = self.value.lock();
        *value = f(*value)?;
        Ok(*value)
    }

    /// Restore the value this counter was constructed with.
    pub fn reset(&self) {
        let prev = mem::replace(&mut *self.value.lock(), self.initial);
        trace!(from = prev, to = self.initial, "counter reset");
    }

    /// Consume the counter and returns its current value.
    pub fn into_inner(self) -> i64 {
        self.value.into_inner()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new(0)
    }
}

impl From<i64> for Counter {
    fn from(initial: i64) -> Self {
        Counter::new(initial)
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `try_lock` so formatting inside a transformation doesn't deadlock
        match self.value.try_lock() {
            Some(value) => write!(f, "Counter({}, initial: {})", *value, self.initial),
            None => write!(f, "Counter(<locked>, initial: {})", self.initial),
        }
    }
}
