use super::{Callback, Retain};
use crate::collection::{Results, Slots};
use crate::completion::Outcome;

/// Bookkeeping for one combinator invocation.
///
/// Created fresh per call and dropped once the final callback has fired and
/// every outstanding signal is gone.
pub(crate) struct EngineState<V, E> {
    /// Name of the combinator, for diagnostics.
    pub(crate) label: &'static str,

    /// Result container, shaped before any task runs.
    slots: Slots<V>,

    /// Whether successful outcomes are written into `slots`.
    retain: Retain,

    /// Tasks that have not completed successfully yet. Only decreases.
    remaining: usize,

    /// A task has failed.
    failed: bool,

    /// The final callback has fired (or would have, if one was supplied).
    fired: bool,

    /// Final callback, taken when it fires.
    finish: Callback<Results<V>, E>,
}

/// What the engine must do after a task reported.
pub(crate) enum Progress<V, E> {
    /// The report arrived after the invocation was already resolved.
    Ignored,

    /// The report was recorded; other tasks are still outstanding.
    Advanced,

    /// The invocation is resolved; deliver outside of any borrow.
    Settled(Delivery<V, E>),
}

/// A pending final-callback invocation.
pub(crate) struct Delivery<V, E> {
    finish: Callback<Results<V>, E>,
    result: Result<Results<V>, E>,
}

impl<V, E> Delivery<V, E> {
    /// Invokes the final callback, if any.
    pub(crate) fn deliver(self) {
        if let Some(finish) = self.finish {
            finish(self.result);
        }
    }
}

impl<V, E> EngineState<V, E> {
    pub(crate) fn new(
        label: &'static str,
        slots: Slots<V>,
        retain: Retain,
        finish: Callback<Results<V>, E>,
    ) -> Self {
        Self {
            label,
            remaining: slots.len(),
            slots,
            retain,
            failed: false,
            fired: false,
            finish,
        }
    }

    /// Resolves an invocation that has no tasks at all.
    pub(crate) fn settle_empty(&mut self) -> Delivery<V, E> {
        self.fired = true;

        Delivery {
            finish: self.finish.take(),
            result: Ok(std::mem::take(&mut self.slots).into_results()),
        }
    }

    /// Applies one task's report.
    pub(crate) fn settle(&mut self, slot: usize, result: Result<Outcome<V>, E>) -> Progress<V, E> {
        if self.failed || self.fired {
            tracing::trace!(
                combinator = self.label,
                task = %self.slots.key(slot),
                "ignoring completion after the invocation resolved"
            );
            return Progress::Ignored;
        }

        match result {
            Err(error) => {
                tracing::debug!(
                    combinator = self.label,
                    task = %self.slots.key(slot),
                    "task failed, short-circuiting"
                );

                self.failed = true;
                self.fired = true;

                Progress::Settled(Delivery {
                    finish: self.finish.take(),
                    result: Err(error),
                })
            }

            Ok(outcome) => {
                if let Retain::Collect = self.retain {
                    self.slots.fill(slot, outcome);
                }

                self.remaining = self.remaining.saturating_sub(1);

                if self.remaining > 0 {
                    return Progress::Advanced;
                }

                tracing::debug!(combinator = self.label, "all tasks completed");
                self.fired = true;

                Progress::Settled(Delivery {
                    finish: self.finish.take(),
                    result: Ok(std::mem::take(&mut self.slots).into_results()),
                })
            }
        }
    }
}
