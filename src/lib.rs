//! Thread safe integer counters.
//!
//! This crate provides a counter that can be shared between threads
//! and mutated without losing updates.
//!
//! [`Counter`] keeps its value behind a mutex, so arbitrary read-modify-write
//! operations run as a single critical section. [`AtomicCounter`] offers the same
//! operations on top of a single atomic integer, retrying transformations with
//! compare-and-swap instead of locking.
//!
//! Both implement [`Count`], which is also implemented for `Option<C>`.
//! An absent counter (`None`) accepts every operation as a no-op and reads as `0`.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use guarded_counter::Counter;
//!
//! let counter = Arc::new(Counter::new(0));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let counter = counter.clone();
//!         thread::spawn(move|| {
//!             for _ in 0..100 {
//!                 counter.increment();
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.get_value(), 400);
//! ```

#![deny(missing_docs)]

pub mod atomic;
pub mod count;
pub mod counter;

pub use atomic::AtomicCounter;
pub use count::Count;
pub use counter::Counter;
