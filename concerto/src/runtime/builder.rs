use super::EventLoop;

/// Source of time for an [`EventLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Wall-clock time. The loop sleeps the thread until the next deadline.
    #[default]
    Real,

    /// Simulated time. The loop jumps straight to the next deadline, so
    /// timer-driven code runs instantly and deterministically.
    Virtual,
}

/// Builder for configuring and creating an event loop.
///
/// `LoopBuilder` allows customizing loop parameters before constructing
/// the loop: the clock it runs on, a safety limit on the number of turns,
/// and the initial capacity of the timer queue.
///
/// # Examples
///
/// ```rust
/// use concerto::{Clock, LoopBuilder};
///
/// let event_loop = LoopBuilder::new()
///     .clock(Clock::Virtual)
///     .turn_limit(10_000)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct LoopBuilder {
    /// Clock driving timers.
    clock: Clock,

    /// Maximum number of jobs a single run may execute.
    turn_limit: Option<u64>,

    /// Initial capacity of the timer heap.
    timer_capacity: usize,
}

impl LoopBuilder {
    /// Creates a new `LoopBuilder` with default configuration.
    ///
    /// By default the loop runs on the real clock, has no turn limit, and
    /// reserves room for 64 timers.
    pub fn new() -> Self {
        Self {
            clock: Clock::Real,
            turn_limit: None,
            timer_capacity: 64,
        }
    }

    /// Sets the clock used for timers.
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Limits how many jobs a single [`run`](EventLoop::run) may execute.
    ///
    /// # Panics
    ///
    /// Panics if `limit == 0`.
    pub fn turn_limit(mut self, limit: u64) -> Self {
        assert!(limit > 0, "turn_limit must be > 0");

        self.turn_limit = Some(limit);
        self
    }

    /// Sets the initial capacity of the timer queue.
    pub fn timer_capacity(mut self, capacity: usize) -> Self {
        self.timer_capacity = capacity;
        self
    }

    /// Builds the event loop with the configured options.
    pub fn build(self) -> EventLoop {
        EventLoop::new(self.clock, self.turn_limit, self.timer_capacity)
    }
}

impl Default for LoopBuilder {
    fn default() -> Self {
        Self::new()
    }
}
