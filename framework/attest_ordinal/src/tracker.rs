use parking_lot::Mutex;
use tracing::debug;

use crate::Ordinal;

/// Mutable holder of the current [`Ordinal`] for one logical execution.
///
/// A tracker is owned by exactly one executing suite at a time; the
/// lock exists because a suite and the reporting machinery may touch
/// it from different threads, not to share one tracker between suites.
/// Handing work to a spawned thread goes through [`Tracker::next_tracker`],
/// which reserves the fork point and leaves the parent's own sequence
/// otherwise undisturbed.
#[derive(Debug)]
pub struct Tracker {
    current: Mutex<Ordinal>,
}

impl Tracker {
    /// Tracker starting at the first ordinal of run 0.
    pub fn new() -> Self {
        Tracker::with_first(Ordinal::new(0))
    }

    /// Tracker starting at a given ordinal.
    pub fn with_first(first: Ordinal) -> Self {
        Tracker {
            current: Mutex::new(first),
        }
    }

    /// Issue the current ordinal and advance.
    ///
    /// Successive calls return strictly increasing, gapless ordinals:
    /// each returned value is exactly `previous.next()`.
    pub fn next_ordinal(&self) -> Ordinal {
        let mut current = self.current.lock();
        let issued = current.clone();
        *current = current.next();
        issued
    }

    /// Fork a child tracker for a nested parallel execution.
    ///
    /// The child's sequence and the parent's continued sequence never
    /// collide, and everything the child ever issues sorts before
    /// everything the parent issues after the fork.
    pub fn next_tracker(&self) -> Tracker {
        let mut current = self.current.lock();
        let (child, continued) = current.next_new_old_pair();
        debug!(child_start = %child, continued = %continued, "forked child tracker");
        *current = continued;
        Tracker::with_first(child)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Tracker::new()
    }
}
