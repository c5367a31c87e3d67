use super::bind;
use crate::collection::Results;
use crate::completion::{Completion, Outcome};
use crate::engine::{self, Callback, Retain, Schedule};

/// Applies `iterator` to every item concurrently and collects the outcomes.
///
/// Outcomes are returned in input order whatever order the items complete
/// in. The first error resolves the call immediately.
///
/// # Examples
///
/// ```rust
/// use concerto::{Outcome, callback, map};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let doubled = Rc::new(RefCell::new(None));
/// let sink = doubled.clone();
/// let input = vec![1, 2, 3];
///
/// map(
///     input.clone(),
///     |x: i32, done: concerto::Completion<i32, String>| done.ok(x * 2),
///     callback(move |result| *sink.borrow_mut() = Some(result)),
/// );
///
/// assert_eq!(
///     doubled.borrow_mut().take(),
///     Some(Ok(vec![Outcome::Single(2), Outcome::Single(4), Outcome::Single(6)]))
/// );
/// assert_eq!(input, vec![1, 2, 3]);
/// ```
pub fn map<T, I, V, E, F>(items: T, iterator: F, callback: Callback<Vec<Outcome<V>>, E>)
where
    T: IntoIterator<Item = I>,
    I: 'static,
    V: 'static,
    E: 'static,
    F: FnMut(I, Completion<V, E>) + 'static,
{
    engine::run(
        "map",
        Schedule::Concurrent,
        Retain::Collect,
        bind(items, iterator),
        flatten(callback),
    );
}

/// Applies `iterator` to every item, one at a time, and collects the outcomes.
///
/// Item `k + 1` is visited only after item `k` completed successfully.
pub fn map_series<T, I, V, E, F>(items: T, iterator: F, callback: Callback<Vec<Outcome<V>>, E>)
where
    T: IntoIterator<Item = I>,
    I: 'static,
    V: 'static,
    E: 'static,
    F: FnMut(I, Completion<V, E>) + 'static,
{
    engine::run(
        "map_series",
        Schedule::Sequential,
        Retain::Collect,
        bind(items, iterator),
        flatten(callback),
    );
}

/// Adapts a sequence callback to the engine's result type.
fn flatten<V: 'static, E: 'static>(
    callback: Callback<Vec<Outcome<V>>, E>,
) -> Callback<Results<V>, E> {
    let finish = callback?;
    Some(Box::new(move |result: Result<Results<V>, E>| {
        finish(result.map(Results::into_outcomes))
    }))
}
