use crate::collection::{Collection, Results};
use crate::engine::{self, Callback, Retain, Schedule, Task};

/// Runs tasks one at a time, in iteration order, and collects their outcomes.
///
/// Task `k + 1` is started only after task `k` reported success. The first
/// failure resolves the call with its error, and no later task is started.
///
/// Results are shaped like the input, as with [`parallel`](crate::parallel).
pub fn series<V, E>(tasks: impl Into<Collection<Task<V, E>>>, callback: Callback<Results<V>, E>)
where
    V: 'static,
    E: 'static,
{
    engine::run(
        "series",
        Schedule::Sequential,
        Retain::Collect,
        tasks.into(),
        callback,
    );
}
