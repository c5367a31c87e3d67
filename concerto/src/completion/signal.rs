use super::Outcome;
use crate::collection::Key;
use crate::error::SignalError;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Receiver of task outcomes.
///
/// Implemented by the concurrent and sequential engines. A signal holds the
/// engine as a trait object so one signal type serves every combinator.
pub(crate) trait Settle<V, E> {
    /// Records the outcome of the task owning `slot`.
    fn settle(self: Rc<Self>, slot: usize, result: Result<Outcome<V>, E>);
}

/// The single-shot completion signal handed to every task.
///
/// A task reports its outcome exactly once, through any of the completing
/// methods. Clones share the same guard, so a task may pass copies to
/// several branches and whichever fires first wins; any later invocation is
/// a usage error.
///
/// Signals are bound to the thread their combinator was started on.
///
/// # Examples
///
/// ```rust
/// use concerto::{Completion, Outcome, Results, callback, parallel, task};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(None));
/// let sink = seen.clone();
///
/// parallel(
///     vec![
///         task(|done: Completion<i32, String>| done.ok(1)),
///         task(|done: Completion<i32, String>| done.ok_many(vec![2, 2])),
///     ],
///     callback(move |result| *sink.borrow_mut() = Some(result)),
/// );
///
/// assert_eq!(
///     seen.borrow_mut().take(),
///     Some(Ok(Results::Sequence(vec![
///         Outcome::Single(1),
///         Outcome::Multiple(vec![2, 2]),
///     ])))
/// );
/// ```
pub struct Completion<V, E> {
    /// Identifier of the owning task, for diagnostics.
    key: Key,

    /// Slot of the owning task in the engine's result container.
    slot: usize,

    /// Set once an outcome has been reported. Shared by all clones.
    used: Rc<Cell<bool>>,

    /// Engine receiving the outcome.
    sink: Rc<dyn Settle<V, E>>,
}

impl<V, E> Completion<V, E> {
    pub(crate) fn new(key: Key, slot: usize, sink: Rc<dyn Settle<V, E>>) -> Self {
        Self {
            key,
            slot,
            used: Rc::new(Cell::new(false)),
            sink,
        }
    }

    /// Identifier of the task this signal belongs to.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns `true` once an outcome has been reported.
    pub fn is_used(&self) -> bool {
        self.used.get()
    }

    /// Reports the task's outcome.
    ///
    /// The first call forwards `result` to the combinator. Every later call,
    /// through this signal or any clone of it, is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::AlreadyCompleted`] if an outcome was already
    /// reported.
    pub fn try_complete(&self, result: Result<Outcome<V>, E>) -> Result<(), SignalError> {
        if self.used.replace(true) {
            tracing::warn!(task = %self.key, "completion signal invoked more than once");

            return Err(SignalError::AlreadyCompleted {
                key: self.key.clone(),
            });
        }

        Rc::clone(&self.sink).settle(self.slot, result);
        Ok(())
    }

    /// Reports the task's outcome.
    ///
    /// # Panics
    ///
    /// Panics if an outcome was already reported through this signal or one
    /// of its clones.
    pub fn complete(&self, result: Result<Outcome<V>, E>) {
        if let Err(err) = self.try_complete(result) {
            panic!("{err}");
        }
    }

    /// Reports success with a single value.
    ///
    /// # Panics
    ///
    /// Panics if the signal was already used.
    pub fn ok(&self, value: V) {
        self.complete(Ok(Outcome::Single(value)));
    }

    /// Reports success with any number of values.
    ///
    /// # Panics
    ///
    /// Panics if the signal was already used.
    pub fn ok_many(&self, values: Vec<V>) {
        self.complete(Ok(Outcome::from_values(values)));
    }

    /// Reports success without a value.
    ///
    /// # Panics
    ///
    /// Panics if the signal was already used.
    pub fn done(&self) {
        self.complete(Ok(Outcome::Empty));
    }

    /// Reports failure.
    ///
    /// # Panics
    ///
    /// Panics if the signal was already used.
    pub fn fail(&self, error: E) {
        self.complete(Err(error));
    }

    /// Reports an `(error, values)` pair.
    ///
    /// `Some(error)` fails the task and discards `values`; `None` succeeds
    /// with [`Outcome::from_values`].
    ///
    /// # Panics
    ///
    /// Panics if the signal was already used.
    pub fn signal(&self, error: Option<E>, values: Vec<V>) {
        match error {
            Some(error) => self.fail(error),
            None => self.ok_many(values),
        }
    }
}

impl<V, E> Clone for Completion<V, E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            slot: self.slot,
            used: Rc::clone(&self.used),
            sink: Rc::clone(&self.sink),
        }
    }
}

impl<V, E> fmt::Debug for Completion<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("key", &self.key)
            .field("used", &self.used.get())
            .finish()
    }
}
