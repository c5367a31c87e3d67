//! The event loop.
//!
//! This module contains the single-threaded loop that hosts asynchronous
//! task completions: deferred jobs, timers, and the thread-local context
//! through which both are registered.
//!
//! It is responsible for:
//! - running deferred jobs in submission order,
//! - firing timers in deadline order on a real or virtual clock,
//! - installing itself as the current loop while running.
//!
//! The combinators do not depend on it: any single-threaded callback source
//! can complete tasks. The loop is what drives timers in applications and
//! tests.

mod builder;
mod core;
mod defer;
mod scheduler;
mod timer;

pub(crate) mod context;

pub use builder::{Clock, LoopBuilder};
pub use self::core::{EventLoop, Resolver};
pub use defer::{defer, try_defer};
