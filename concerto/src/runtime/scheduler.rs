use super::builder::Clock;
use super::timer::TimerEntry;
use crate::time::Timeout;

use std::cell::{Cell, RefCell};
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

/// Deadline used when `now + delay` is not representable (about 30 years).
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// A deferred unit of loop work.
pub(crate) type Job = Box<dyn FnOnce()>;

/// The loop's queues.
///
/// The scheduler owns:
/// - a FIFO of jobs deferred to the next turn,
/// - a min-heap of timers ordered by deadline,
/// - the loop clock.
///
/// It is shared through `Rc` with the thread-local context so timers and
/// deferred jobs can be registered from inside running callbacks.
pub(crate) struct Scheduler {
    clock: Clock,

    /// Current time of a [`Clock::Virtual`] loop.
    virtual_now: Cell<Instant>,

    /// Jobs ready to run, in submission order.
    ready: RefCell<VecDeque<Job>>,

    /// Pending timers, earliest deadline first.
    timers: RefCell<BinaryHeap<TimerEntry>>,

    /// Next timer sequence number.
    sequence: Cell<u64>,
}

impl Scheduler {
    pub(crate) fn new(clock: Clock, timer_capacity: usize) -> Self {
        Self {
            clock,
            virtual_now: Cell::new(Instant::now()),
            ready: RefCell::new(VecDeque::new()),
            timers: RefCell::new(BinaryHeap::with_capacity(timer_capacity)),
            sequence: Cell::new(0),
        }
    }

    /// Current loop time.
    pub(crate) fn now(&self) -> Instant {
        match self.clock {
            Clock::Real => Instant::now(),
            Clock::Virtual => self.virtual_now.get(),
        }
    }

    /// Queues a job for the next turn.
    pub(crate) fn defer(&self, job: Job) {
        self.ready.borrow_mut().push_back(job);
    }

    /// Schedules a job to run once `delay` has elapsed.
    pub(crate) fn schedule(&self, delay: Duration, job: Job) -> Timeout {
        let cancelled = Rc::new(Cell::new(false));
        let sequence = self.sequence.get();
        self.sequence.set(sequence + 1);

        self.timers.borrow_mut().push(TimerEntry {
            deadline: deadline_after(self.now(), delay),
            sequence,
            job,
            cancelled: cancelled.clone(),
        });

        Timeout::new(cancelled)
    }

    /// Returns the next job to run, waiting for a timer if nothing is ready.
    ///
    /// Ready jobs always run before timers. Cancelled timers are discarded.
    /// Returns `None` once both queues are empty.
    pub(crate) fn next(&self) -> Option<Job> {
        if let Some(job) = self.ready.borrow_mut().pop_front() {
            return Some(job);
        }

        loop {
            let entry = self.timers.borrow_mut().pop()?;

            if entry.cancelled.get() {
                continue;
            }

            self.wait_until(entry.deadline);
            return Some(entry.job);
        }
    }

    fn wait_until(&self, deadline: Instant) {
        match self.clock {
            Clock::Real => {
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                }
            }
            Clock::Virtual => {
                if deadline > self.virtual_now.get() {
                    self.virtual_now.set(deadline);
                }
            }
        }
    }
}

/// `now + delay`, clamped to [`FAR_FUTURE`] when the sum overflows `Instant`.
fn deadline_after(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}
