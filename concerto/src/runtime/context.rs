use super::scheduler::Scheduler;
use crate::error::LoopError;

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Scheduler of the event loop currently running on this thread.
    ///
    /// This is set while a loop runs and allows timers and deferred jobs
    /// to be registered without passing the loop around.
    static CURRENT_SCHEDULER: RefCell<Option<Rc<Scheduler>>> = const { RefCell::new(None) };
}

/// Restores the previously installed scheduler on drop, including when the
/// loop unwinds.
struct Restore(Option<Rc<Scheduler>>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT_SCHEDULER.with(|current| *current.borrow_mut() = previous);
    }
}

/// Enters the loop context for the current thread.
///
/// Installs `scheduler` as the current scheduler for the duration of `f`,
/// then restores whatever was installed before. Loops may therefore be
/// nested.
pub(crate) fn enter_context<R>(scheduler: Rc<Scheduler>, f: impl FnOnce() -> R) -> R {
    let previous = CURRENT_SCHEDULER.with(|current| current.replace(Some(scheduler)));
    let _restore = Restore(previous);

    f()
}

/// Runs `f` with the current scheduler.
///
/// # Errors
///
/// Returns [`LoopError::NoCurrentLoop`] when no loop is running on this
/// thread.
pub(crate) fn with_current<R>(f: impl FnOnce(&Scheduler) -> R) -> Result<R, LoopError> {
    let scheduler = CURRENT_SCHEDULER.with(|current| current.borrow().clone());

    match scheduler {
        Some(scheduler) => Ok(f(&scheduler)),
        None => Err(LoopError::NoCurrentLoop),
    }
}
