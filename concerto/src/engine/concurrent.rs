use super::state::{EngineState, Progress};
use super::Task;
use crate::collection::Key;
use crate::completion::{Completion, Outcome, Settle};

use std::cell::RefCell;
use std::rc::Rc;

/// Engine that starts every task up front and collects reports in whatever
/// order they arrive.
pub(crate) struct Concurrent<V, E> {
    state: RefCell<EngineState<V, E>>,
}

impl<V: 'static, E: 'static> Concurrent<V, E> {
    /// Invokes every task in iteration order.
    ///
    /// Tasks are started even if an earlier one already failed
    /// synchronously; their reports are then ignored.
    pub(crate) fn drive(mut state: EngineState<V, E>, pairs: Vec<(Key, Task<V, E>)>) {
        if pairs.is_empty() {
            state.settle_empty().deliver();
            return;
        }

        let engine = Rc::new(Self {
            state: RefCell::new(state),
        });

        for (slot, (key, task)) in pairs.into_iter().enumerate() {
            let sink: Rc<dyn Settle<V, E>> = engine.clone();
            task(Completion::new(key, slot, sink));
        }
    }
}

impl<V, E> Settle<V, E> for Concurrent<V, E> {
    fn settle(self: Rc<Self>, slot: usize, result: Result<Outcome<V>, E>) {
        let progress = self.state.borrow_mut().settle(slot, result);

        if let Progress::Settled(delivery) = progress {
            delivery.deliver();
        }
    }
}
