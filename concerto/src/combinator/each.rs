use super::bind;
use crate::collection::Results;
use crate::completion::Completion;
use crate::engine::{self, Callback, Retain, Schedule};

/// Applies `iterator` to every item concurrently.
///
/// The iterator is called once per item, in order, without waiting for
/// earlier items to complete. The final callback receives `Ok(())` once
/// every item completed, or the first error as soon as it is reported.
///
/// Also exported as [`for_each`](crate::for_each).
///
/// # Examples
///
/// ```rust
/// use concerto::time::set_timeout;
/// use concerto::{Clock, LoopBuilder, callback, each};
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let event_loop = LoopBuilder::new().clock(Clock::Virtual).build();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = seen.clone();
///
/// let result = event_loop
///     .block_on(|resolve| {
///         each(
///             vec![1u64, 3, 2],
///             move |x, done| {
///                 let log = log.clone();
///                 set_timeout(Duration::from_millis(x * 25), move || {
///                     log.borrow_mut().push(x);
///                     done.done();
///                 });
///             },
///             callback(resolve),
///         )
///     })
///     .unwrap();
///
/// assert_eq!(result, Ok::<(), ()>(()));
/// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
/// ```
pub fn each<T, I, E, F>(items: T, iterator: F, callback: Callback<(), E>)
where
    T: IntoIterator<Item = I>,
    I: 'static,
    E: 'static,
    F: FnMut(I, Completion<(), E>) + 'static,
{
    engine::run(
        "each",
        Schedule::Concurrent,
        Retain::Discard,
        bind(items, iterator),
        discard(callback),
    );
}

/// Applies `iterator` to every item, one at a time, in order.
///
/// The iterator is called for item `k + 1` only after item `k` completed
/// successfully. On the first error the final callback receives it and no
/// further item is visited.
///
/// Also exported as [`for_each_series`](crate::for_each_series).
pub fn each_series<T, I, E, F>(items: T, iterator: F, callback: Callback<(), E>)
where
    T: IntoIterator<Item = I>,
    I: 'static,
    E: 'static,
    F: FnMut(I, Completion<(), E>) + 'static,
{
    engine::run(
        "each_series",
        Schedule::Sequential,
        Retain::Discard,
        bind(items, iterator),
        discard(callback),
    );
}

/// Adapts a unit callback to the engine's result type.
fn discard<E: 'static>(callback: Callback<(), E>) -> Callback<Results<()>, E> {
    let finish = callback?;
    Some(Box::new(move |result: Result<Results<()>, E>| {
        finish(result.map(drop))
    }))
}
