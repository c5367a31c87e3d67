//! Completion signals and task outcomes.
//!
//! Every task receives a [`Completion`] and reports through it exactly once.
//! Successful reports are normalized into an [`Outcome`].

mod outcome;
mod signal;

pub(crate) use signal::Settle;

pub use outcome::Outcome;
pub use signal::Completion;
