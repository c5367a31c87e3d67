use super::context::with_current;
use crate::error::LoopError;

/// Queues `job` to run on a later turn of the current event loop.
///
/// Deferred jobs run in submission order, before any timer.
///
/// # Panics
///
/// Panics if no event loop is running on this thread.
pub fn defer(job: impl FnOnce() + 'static) {
    if let Err(err) = try_defer(job) {
        panic!("{err}");
    }
}

/// Queues `job` to run on a later turn of the current event loop.
///
/// # Errors
///
/// Returns [`LoopError::NoCurrentLoop`] if no event loop is running on this
/// thread.
pub fn try_defer(job: impl FnOnce() + 'static) -> Result<(), LoopError> {
    with_current(|scheduler| scheduler.defer(Box::new(job)))
}
