use crate::error::LoopError;
use crate::runtime::context::with_current;

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Schedules `job` to run on the current event loop once `delay` has elapsed.
///
/// Timers fire in deadline order; timers with equal deadlines fire in the
/// order they were scheduled. A delay too large to represent as a deadline
/// (such as [`Duration::MAX`]) is clamped to a deadline decades away.
///
/// # Panics
///
/// Panics if no event loop is running on this thread.
///
/// # Examples
///
/// ```rust
/// use concerto::{Clock, LoopBuilder};
/// use concerto::time::set_timeout;
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let order = Rc::new(RefCell::new(Vec::new()));
/// let (slow, fast) = (order.clone(), order.clone());
///
/// LoopBuilder::new()
///     .clock(Clock::Virtual)
///     .build()
///     .run(move || {
///         set_timeout(Duration::from_millis(20), move || slow.borrow_mut().push("slow"));
///         set_timeout(Duration::from_millis(10), move || fast.borrow_mut().push("fast"));
///     })
///     .unwrap();
///
/// assert_eq!(*order.borrow(), vec!["fast", "slow"]);
/// ```
pub fn set_timeout(delay: Duration, job: impl FnOnce() + 'static) -> Timeout {
    try_set_timeout(delay, job).unwrap_or_else(|err| panic!("{err}"))
}

/// Schedules `job` to run on the current event loop once `delay` has elapsed.
///
/// # Errors
///
/// Returns [`LoopError::NoCurrentLoop`] if no event loop is running on this
/// thread.
pub fn try_set_timeout(delay: Duration, job: impl FnOnce() + 'static) -> Result<Timeout, LoopError> {
    with_current(|scheduler| scheduler.schedule(delay, Box::new(job)))
}

/// Current time of the running event loop.
///
/// On a virtual clock this is the simulated time.
///
/// # Panics
///
/// Panics if no event loop is running on this thread.
pub fn now() -> Instant {
    try_now().unwrap_or_else(|err| panic!("{err}"))
}

/// Current time of the running event loop.
///
/// # Errors
///
/// Returns [`LoopError::NoCurrentLoop`] if no event loop is running on this
/// thread.
pub fn try_now() -> Result<Instant, LoopError> {
    with_current(|scheduler| scheduler.now())
}

/// Handle to a scheduled timer.
///
/// Dropping the handle does **not** cancel the timer; call
/// [`cancel`](Self::cancel) for that.
#[derive(Debug, Clone)]
pub struct Timeout {
    /// Cancellation flag shared with the loop's timer entry.
    cancelled: Rc<Cell<bool>>,
}

impl Timeout {
    pub(crate) fn new(cancelled: Rc<Cell<bool>>) -> Self {
        Self { cancelled }
    }

    /// Prevents the timer's job from running.
    ///
    /// Has no effect if the job already ran.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Returns `true` if [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
