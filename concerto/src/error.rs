//! Error types.
//!
//! Task errors are never wrapped: whatever value a task fails with is handed
//! to the final callback as-is. The types here only describe misuse of the
//! library itself.

use crate::collection::Key;

use thiserror::Error;

/// Misuse of a [`Completion`](crate::Completion) signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The signal (or one of its clones) had already reported an outcome.
    #[error("completion signal for task {key} was invoked more than once")]
    AlreadyCompleted {
        /// Identifier of the task whose signal was reused.
        key: Key,
    },
}

/// Errors reported by the event loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    /// A loop facility was used on a thread with no running [`EventLoop`](crate::EventLoop).
    #[error("no event loop is running on this thread")]
    NoCurrentLoop,

    /// The loop ran more turns than its configured limit.
    #[error("event loop exceeded its limit of {limit} turns")]
    TurnLimitExceeded {
        /// The configured limit.
        limit: u64,
    },

    /// The loop went idle before the resolver passed to
    /// [`EventLoop::block_on`](crate::EventLoop::block_on) was called.
    #[error("event loop went idle before the entry point resolved")]
    Unresolved,
}
