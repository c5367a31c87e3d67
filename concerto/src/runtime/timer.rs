use super::scheduler::Job;

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::time::Instant;

/// An entry in the loop's timer queue.
///
/// `TimerEntry` represents a job scheduled to run at a specific deadline.
/// Entries are stored in a binary heap ordered by deadline, with ties broken
/// by scheduling order.
///
/// The entry may be cancelled before it fires.
pub(crate) struct TimerEntry {
    /// The time at which the job should run.
    pub(crate) deadline: Instant,

    /// Scheduling order, used to break deadline ties.
    pub(crate) sequence: u64,

    /// Job to run when the deadline is reached.
    pub(crate) job: Job,

    /// Cancellation flag shared with the associated [`Timeout`](crate::time::Timeout).
    pub(crate) cancelled: Rc<Cell<bool>>,
}

impl TimerEntry {
    fn rank(&self) -> (Instant, u64) {
        (self.deadline, self.sequence)
    }
}

impl Eq for TimerEntry {}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank().eq(&other.rank())
    }
}

impl Ord for TimerEntry {
    /// Orders timer entries by deadline, then by scheduling order.
    ///
    /// Note that the comparison is **reversed** so that a
    /// `BinaryHeap<TimerEntry>` behaves as a min-heap,
    /// where the earliest deadline is popped first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
