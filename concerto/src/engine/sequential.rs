use super::state::{EngineState, Progress};
use super::Task;
use crate::collection::Key;
use crate::completion::{Completion, Outcome, Settle};

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Dispatch state of the sequential driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    /// No task invocation is on the stack.
    Idle,

    /// A task is being invoked by [`Sequential::drive`].
    Running,

    /// The running task completed before its invocation returned.
    Resumed,
}

/// Engine that runs one task at a time, in iteration order.
///
/// A task that completes synchronously does not start its successor from
/// inside its own stack frame: the driver loop notices the completion once
/// the invocation returns and continues from there. Long chains of
/// synchronous tasks therefore run in constant stack depth.
pub(crate) struct Sequential<V, E> {
    state: RefCell<EngineState<V, E>>,

    /// Tasks not started yet. The front is the cursor.
    pending: RefCell<VecDeque<(usize, Key, Task<V, E>)>>,

    dispatch: Cell<Dispatch>,
}

impl<V: 'static, E: 'static> Sequential<V, E> {
    /// Starts the first task.
    pub(crate) fn start(mut state: EngineState<V, E>, pairs: Vec<(Key, Task<V, E>)>) {
        if pairs.is_empty() {
            state.settle_empty().deliver();
            return;
        }

        let pending = pairs
            .into_iter()
            .enumerate()
            .map(|(slot, (key, task))| (slot, key, task))
            .collect();

        let engine = Rc::new(Self {
            state: RefCell::new(state),
            pending: RefCell::new(pending),
            dispatch: Cell::new(Dispatch::Idle),
        });

        engine.drive();
    }

    /// Invokes tasks until one suspends or none are left.
    fn drive(self: Rc<Self>) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some((slot, key, task)) = next else {
                return;
            };

            tracing::trace!(combinator = self.state.borrow().label, task = %key, "starting task");

            self.dispatch.set(Dispatch::Running);

            let sink: Rc<dyn Settle<V, E>> = self.clone();
            task(Completion::new(key, slot, sink));

            if self.dispatch.replace(Dispatch::Idle) != Dispatch::Resumed {
                return;
            }
        }
    }
}

impl<V: 'static, E: 'static> Settle<V, E> for Sequential<V, E> {
    fn settle(self: Rc<Self>, slot: usize, result: Result<Outcome<V>, E>) {
        let progress = self.state.borrow_mut().settle(slot, result);

        match progress {
            Progress::Ignored => {}

            Progress::Advanced => {
                if self.dispatch.get() == Dispatch::Running {
                    self.dispatch.set(Dispatch::Resumed);
                } else {
                    self.drive();
                }
            }

            Progress::Settled(delivery) => {
                self.pending.borrow_mut().clear();
                delivery.deliver();
            }
        }
    }
}
