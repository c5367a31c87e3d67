//! Timers.
//!
//! This module provides time-related utilities that integrate with the
//! event loop.
//!
//! It includes:
//! - [`set_timeout`] for scheduling a callback after a delay,
//! - [`Timeout`] for cancelling it,
//! - [`now`] for reading the loop clock.

mod timeout;

#[doc(inline)]
pub use timeout::{Timeout, now, set_timeout, try_now, try_set_timeout};
