//! The completion engine shared by every combinator.
//!
//! A combinator configures the engine with a scheduling policy
//! ([`Schedule`]) and a result policy ([`Retain`]), then hands it a
//! collection of tasks. The engine:
//! - invokes each task exactly once,
//! - counts successful completions,
//! - writes outcomes into a result container shaped like the input,
//! - short-circuits on the first error,
//! - fires the final callback at most once.
//!
//! Engine state lives behind `Rc`/`RefCell`. Signals are therefore `!Send`
//! and must be completed on the thread the combinator was started on.

mod concurrent;
mod sequential;
mod state;

use crate::collection::{self, Collection, Results};
use crate::completion::Completion;

use concurrent::Concurrent;
use sequential::Sequential;
use state::EngineState;

/// A unit of asynchronous work.
///
/// The task receives its [`Completion`] and must eventually report through
/// it, either before returning or later from a timer or another callback.
pub type Task<V, E> = Box<dyn FnOnce(Completion<V, E>)>;

/// An optional final callback. `None` runs the tasks without reporting.
pub type Callback<T, E> = Option<Box<dyn FnOnce(Result<T, E>)>>;

/// Boxes a closure into a [`Task`].
pub fn task<V, E>(f: impl FnOnce(Completion<V, E>) + 'static) -> Task<V, E> {
    Box::new(f)
}

/// Boxes a closure into a present [`Callback`].
pub fn callback<T, E>(f: impl FnOnce(Result<T, E>) + 'static) -> Callback<T, E> {
    Some(Box::new(f))
}

/// How tasks are started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Schedule {
    /// All tasks start immediately.
    Concurrent,

    /// Each task starts after its predecessor succeeded.
    Sequential,
}

/// What happens to successful outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Retain {
    /// Outcomes are written into the result container.
    Collect,

    /// Outcomes are dropped; only completion is tracked.
    Discard,
}

/// Runs `tasks` to completion and reports through `finish`.
pub(crate) fn run<V: 'static, E: 'static>(
    label: &'static str,
    schedule: Schedule,
    retain: Retain,
    tasks: Collection<Task<V, E>>,
    finish: Callback<Results<V>, E>,
) {
    let (pairs, slots) = collection::adapt(tasks);

    tracing::debug!(combinator = label, tasks = pairs.len(), "starting");

    let state = EngineState::new(label, slots, retain, finish);

    match schedule {
        Schedule::Concurrent => Concurrent::drive(state, pairs),
        Schedule::Sequential => Sequential::start(state, pairs),
    }
}
