use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Stamp vector. Depth grows by one per fork; eight inline levels
/// cover any realistic suite nesting without a heap allocation.
type Stamps = SmallVec<[u32; 8]>;

/// An immutable, totally ordered, forkable sequence token.
///
/// An ordinal is a run stamp plus a vector of stamps, one level per
/// fork on the path that produced it. The stamp vector is never empty.
///
/// Ordering is by run stamp, then element-wise by stamps, with a
/// prefix tie going to the shorter vector. This gives the fork
/// invariant its teeth: [`Ordinal::next_new_old_pair`] returns a `new`
/// branch (one level deeper, appended `0`) and an `old` branch (last
/// stamp incremented), and every ordinal ever derived from `new` sorts
/// strictly after the fork point and strictly before every ordinal
/// derived from `old`. Sequences from the two branches never collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ordinal {
    run_stamp: u32,
    stamps: Stamps,
}

impl Ordinal {
    /// The first ordinal of a run.
    pub fn new(run_stamp: u32) -> Self {
        Ordinal {
            run_stamp,
            stamps: smallvec![0],
        }
    }

    /// The run this ordinal belongs to.
    pub fn run_stamp(&self) -> u32 {
        self.run_stamp
    }

    /// The single successor: last stamp incremented.
    pub fn next(&self) -> Ordinal {
        let mut stamps = self.stamps.clone();
        if let Some(last) = stamps.last_mut() {
            *last += 1;
        }
        Ordinal {
            run_stamp: self.run_stamp,
            stamps,
        }
    }

    /// Fork into two diverging successor sequences.
    ///
    /// Returns `(new, old)`: `new` seeds the sequence handed to a
    /// spawned thread, `old` continues the current one. All ordinals
    /// derived from `new` sort between `self` and `old`.
    pub fn next_new_old_pair(&self) -> (Ordinal, Ordinal) {
        let mut forked = self.stamps.clone();
        forked.push(0);
        (
            Ordinal {
                run_stamp: self.run_stamp,
                stamps: forked,
            },
            self.next(),
        )
    }

    /// The token as a flat vector: run stamp followed by the stamps.
    pub fn to_vec(&self) -> Vec<u32> {
        std::iter::once(self.run_stamp)
            .chain(self.stamps.iter().copied())
            .collect()
    }
}

impl Ord for Ordinal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.run_stamp.cmp(&other.run_stamp).then_with(|| {
            for (mine, theirs) in self.stamps.iter().zip(&other.stamps) {
                match mine.cmp(theirs) {
                    Ordering::Equal => {}
                    decided => return decided,
                }
            }
            // Prefix tie: the shallower ordinal is the fork point and
            // precedes everything forked beneath it.
            self.stamps.len().cmp(&other.stamps.len())
        })
    }
}

impl PartialOrd for Ordinal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.run_stamp)?;
        for stamp in &self.stamps {
            write!(f, ".{stamp}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
