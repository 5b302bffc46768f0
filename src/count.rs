//! Operations shared by every counter flavour.
//!
//! [`Count`] is implemented by both [`Counter`] and [`AtomicCounter`],
//! so code generic over it can pick either locking or lock-free counting.
//! It is also implemented for references, `Arc` and `Option`.
//!
//! # Absent counters
//!
//! `Option<C>` stands for a counter which may not exist.
//! `None` accepts every operation: mutations do nothing, reads return `0`
//! and transformations are never called.
//!
//! ```
//! use guarded_counter::{Count, Counter};
//!
//! let absent: Option<&Counter> = None;
//! absent.increment();
//! assert_eq!(absent.operate_and_get(|v| v + 10), 0);
//! assert_eq!(absent.get_value(), 0);
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::atomic::AtomicCounter;
use crate::counter::Counter;

/// Thread safe integer counter operations.
///
/// Every operation takes effect atomically with respect to others on the same counter.
/// Nothing is ordered across different counters.
pub trait Count {
    /// Increase the value by 1.
    fn increment(&self);

    /// Decrease the value by 1.
    fn decrement(&self);

    /// Current value.
    fn get_value(&self) -> i64;

    /// Increase the value by 1 and returns the increased value.
    fn increment_and_get(&self) -> i64;

    /// Decrease the value by 1 and returns the decreased value.
    fn decrement_and_get(&self) -> i64;

    /// Replace the value with `f(value)`.
    ///
    /// `f` MUST be pure and MUST NOT touch this counter.
    fn operate<F>(&self, f: F)
    where
        F: Fn(i64) -> i64;

    /// Replace the value with `f(value)` and returns the new value.
    ///
    /// `f` MUST be pure and MUST NOT touch this counter.
    fn operate_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64;

    /// Restore the value this counter was constructed with.
    fn reset(&self);
}

impl Count for Counter {
    fn increment(&self) {
        Counter::increment(self)
    }

    fn decrement(&self) {
        Counter::decrement(self)
    }

    fn get_value(&self) -> i64 {
        Counter::get_value(self)
    }

    fn increment_and_get(&self) -> i64 {
        Counter::increment_and_get(self)
    }

    fn decrement_and_get(&self) -> i64 {
        Counter::decrement_and_get(self)
    }

    fn operate<F>(&self, f: F)
    where
        F: Fn(i64) -> i64,
    {
        Counter::operate(self, f)
    }

    fn operate_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        Counter::operate_and_get(self, f)
    }

    fn reset(&self) {
        Counter::reset(self)
    }
}

impl Count for AtomicCounter {
    fn increment(&self) {
        AtomicCounter::increment(self)
    }

    fn decrement(&self) {
        AtomicCounter::decrement(self)
    }

    fn get_value(&self) -> i64 {
        AtomicCounter::get_value(self)
    }

    fn increment_and_get(&self) -> i64 {
        AtomicCounter::increment_and_get(self)
    }

    fn decrement_and_get(&self) -> i64 {
        AtomicCounter::decrement_and_get(self)
    }

    fn operate<F>(&self, f: F)
    where
        F: Fn(i64) -> i64,
    {
        AtomicCounter::operate(self, f)
    }

    fn operate_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        AtomicCounter::operate_and_get(self, f)
    }

    fn reset(&self) {
        AtomicCounter::reset(self)
    }
}

macro_rules! forward_count {
    ($($ty:ty),*) => {$(
        impl<C: Count> Count for $ty {
            fn increment(&self) {
                (**self).increment()
            }

            fn decrement(&self) {
                (**self).decrement()
            }

            fn get_value(&self) -> i64 {
                (**self).get_value()
            }

            fn increment_and_get(&self) -> i64 {
                (**self).increment_and_get()
            }

            fn decrement_and_get(&self) -> i64 {
                (**self).decrement_and_get()
            }

            fn operate<F>(&self, f: F)
            where
                F: Fn(i64) -> i64,
            {
                (**self).operate(f)
            }

            fn operate_and_get<F>(&self, f: F) -> i64
            where
                F: Fn(i64) -> i64,
            {
                (**self).operate_and_get(f)
            }

            fn reset(&self) {
                (**self).reset()
            }
        }
    )*};
}

forward_count!(&C, Arc<C>);

fn absent(op: &'static str) {
    debug!(op, "operation on absent counter ignored");
}

impl<C: Count> Count for Option<C> {
    fn increment(&self) {
        match *self {
            Some(ref counter) => counter.increment(),
            None => absent("increment"),
        }
    }

    fn decrement(&self) {
        match *self {
            Some(ref counter) => counter.decrement(),
            None => absent("decrement"),
        }
    }

    fn get_value(&self) -> i64 {
        match *self {
            Some(ref counter) => counter.get_value(),
            None => {
                absent("get_value");
                0
            }
        }
    }

    fn increment_and_get(&self) -> i64 {
        match *self {
            Some(ref counter) => counter.increment_and_get(),
            None => {
                absent("increment_and_get");
                0
            }
        }
    }

    fn decrement_and_get(&self) -> i64 {
        match *self {
            Some(ref counter) => counter.decrement_and_get(),
            None => {
                absent("decrement_and_get");
                0
            }
        }
    }

    fn operate<F>(&self, f: F)
    where
        F: Fn(i64) -> i64,
    {
        match *self {
            Some(ref counter) => counter.operate(f),
            None => absent("operate"),
        }
    }

    fn operate_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        match *self {
            Some(ref counter) => counter.operate_and_get(f),
            None => {
                absent("operate_and_get");
                0
            }
        }
    }

    fn reset(&self) {
        match *self {
            Some(ref counter) => counter.reset(),
            None => absent("reset"),
        }
    }
}
