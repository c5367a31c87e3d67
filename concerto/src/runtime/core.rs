use super::builder::{Clock, LoopBuilder};
use super::context::enter_context;
use super::scheduler::Scheduler;
use crate::error::LoopError;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

/// Hands a value back to [`EventLoop::block_on`].
pub type Resolver<T> = Box<dyn FnOnce(T)>;

/// A single-threaded, callback-driven event loop.
///
/// `EventLoop` is responsible for:
/// - running jobs deferred with [`defer`](crate::defer),
/// - firing timers registered with [`set_timeout`](crate::time::set_timeout),
/// - providing a synchronous entry point via [`run`](Self::run) and
///   [`block_on`](Self::block_on).
///
/// Every job runs to completion before the next one starts, so callbacks
/// never interleave.
pub struct EventLoop {
    /// Queues shared with the thread-local context while running.
    scheduler: Rc<Scheduler>,

    /// Maximum number of jobs per run.
    turn_limit: Option<u64>,
}

impl EventLoop {
    /// Creates a new loop. Use [`LoopBuilder`](crate::LoopBuilder).
    pub(crate) fn new(clock: Clock, turn_limit: Option<u64>, timer_capacity: usize) -> Self {
        Self {
            scheduler: Rc::new(Scheduler::new(clock, timer_capacity)),
            turn_limit,
        }
    }

    /// Runs `entry` inside the loop, then drives the loop until it is idle.
    ///
    /// The loop is idle once no deferred job and no uncancelled timer is
    /// left. Returns the value produced by `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::TurnLimitExceeded`] if the configured turn limit
    /// is reached before the loop goes idle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concerto::LoopBuilder;
    /// use concerto::time::set_timeout;
    /// use std::time::Duration;
    ///
    /// let event_loop = LoopBuilder::new().build();
    ///
    /// let answer = event_loop
    ///     .run(|| {
    ///         set_timeout(Duration::from_millis(1), || println!("fired"));
    ///         42
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(answer, 42);
    /// ```
    pub fn run<R>(&self, entry: impl FnOnce() -> R) -> Result<R, LoopError> {
        enter_context(self.scheduler.clone(), || {
            let output = entry();
            self.drain()?;
            Ok(output)
        })
    }

    /// Runs `entry` inside the loop and returns the value it resolves with.
    ///
    /// `entry` receives a [`Resolver`]; the loop is driven until idle and
    /// the resolved value is returned. The loop keeps running after the
    /// resolver is called, so late callbacks are still executed.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::Unresolved`] if the loop went idle without the
    /// resolver being called, or [`LoopError::TurnLimitExceeded`].
    pub fn block_on<T: 'static>(&self, entry: impl FnOnce(Resolver<T>)) -> Result<T, LoopError> {
        let slot = Rc::new(RefCell::new(None));
        let sink = slot.clone();

        self.run(move || {
            entry(Box::new(move |value| {
                *sink.borrow_mut() = Some(value);
            }))
        })?;

        slot.borrow_mut().take().ok_or(LoopError::Unresolved)
    }

    /// Current loop time.
    pub fn now(&self) -> Instant {
        self.scheduler.now()
    }

    /// Executes jobs until both queues are empty.
    fn drain(&self) -> Result<(), LoopError> {
        let mut turns: u64 = 0;

        while let Some(job) = self.scheduler.next() {
            if let Some(limit) = self.turn_limit.filter(|limit| turns >= *limit) {
                tracing::debug!(limit, "event loop turn limit reached");
                return Err(LoopError::TurnLimitExceeded { limit });
            }

            turns += 1;
            job();
        }

        tracing::trace!(turns, "event loop idle");
        Ok(())
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        LoopBuilder::new().build()
    }
}
