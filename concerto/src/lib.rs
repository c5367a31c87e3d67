//! # Concerto
//!
//! **Concerto** is a small library of collection control-flow combinators for
//! callback-driven code, together with the lightweight single-threaded event
//! loop that hosts it.
//!
//! A *task* is a closure that receives a [`Completion`] and eventually
//! reports through it, once, with a value or an error. Combinators drive a
//! whole collection of tasks and aggregate their outcomes:
//!
//! - [`parallel`] and [`series`] run tasks (a sequence or a keyed mapping)
//!   concurrently or one at a time, and collect results shaped like the input,
//! - [`each`] and [`each_series`] apply a function to every item and only
//!   report completion (also exported as [`for_each`] and [`for_each_series`]),
//! - [`map`] and [`map_series`] apply a function to every item and collect
//!   results in input order.
//!
//! Every combinator reports the first error immediately, fires its final
//! callback at most once, and accepts a missing final callback.
//!
//! "Concurrent" means interleaved: everything runs on one thread, and
//! completions arrive from timers or other callbacks scheduled on the
//! [`EventLoop`].
//!
//! ## Quick Start
//!
//! ```rust
//! use concerto::time::set_timeout;
//! use concerto::{Clock, Completion, Keyed, LoopBuilder, Outcome, callback, series, task};
//! use std::time::Duration;
//!
//! let event_loop = LoopBuilder::new().clock(Clock::Virtual).build();
//!
//! let results = event_loop
//!     .block_on(|resolve| {
//!         let tasks = Keyed::from([
//!             ("one", task(|done: Completion<u32, String>| {
//!                 set_timeout(Duration::from_millis(30), move || done.ok(1));
//!             })),
//!             ("three", task(|done: Completion<u32, String>| done.ok_many(vec![3, 3]))),
//!         ]);
//!
//!         series(tasks, callback(resolve));
//!     })
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(results["one"], Outcome::Single(1));
//! assert_eq!(results["three"], Outcome::Multiple(vec![3, 3]));
//! ```
//!
//! ## Modules
//!
//! - [`time`] — Timers on the running event loop
//!
//! ## Getting Started
//!
//! Add Concerto to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! concerto = { git = "https://github.com/nebula-platform/concerto", package = "concerto" }
//! ```

mod collection;
mod combinator;
mod completion;
mod engine;
mod error;
mod runtime;

pub mod time;

pub use collection::{Collection, Key, Keyed, Results};
pub use combinator::{each, each_series, for_each, for_each_series, map, map_series, parallel, series};
pub use completion::{Completion, Outcome};
pub use engine::{Callback, Task, callback, task};
pub use error::{LoopError, SignalError};
pub use runtime::{Clock, EventLoop, LoopBuilder, Resolver, defer, try_defer};

pub use concerto_macros::*;
