use crate::collection::{Collection, Results};
use crate::engine::{self, Callback, Retain, Schedule, Task};

/// Runs every task concurrently and collects their outcomes.
///
/// All tasks are started immediately, in iteration order. The final
/// callback receives the outcomes shaped like the input (a sequence for a
/// sequence, a mapping for a keyed collection), each slot holding what its
/// task reported regardless of completion order.
///
/// The first task to fail resolves the call with its error at once. Tasks
/// still in flight keep running; their reports are ignored.
///
/// An empty collection resolves immediately with an empty container.
///
/// # Examples
///
/// ```rust
/// use concerto::time::set_timeout;
/// use concerto::{Clock, Completion, LoopBuilder, Outcome, Results, callback, parallel, task};
/// use std::time::Duration;
///
/// let event_loop = LoopBuilder::new().clock(Clock::Virtual).build();
///
/// let results = event_loop
///     .block_on(|resolve| {
///         parallel(
///             vec![
///                 task(|done: Completion<u32, ()>| {
///                     set_timeout(Duration::from_millis(50), move || done.ok(1));
///                 }),
///                 task(|done: Completion<u32, ()>| {
///                     set_timeout(Duration::from_millis(10), move || done.ok(2));
///                 }),
///             ],
///             callback(resolve),
///         )
///     })
///     .unwrap();
///
/// assert_eq!(
///     results,
///     Ok(Results::Sequence(vec![Outcome::Single(1), Outcome::Single(2)]))
/// );
/// ```
pub fn parallel<V, E>(tasks: impl Into<Collection<Task<V, E>>>, callback: Callback<Results<V>, E>)
where
    V: 'static,
    E: 'static,
{
    engine::run(
        "parallel",
        Schedule::Concurrent,
        Retain::Collect,
        tasks.into(),
        callback,
    );
}
