//! Attest Ordinal - event ordering for parallel test execution.
//!
//! When nested suites run on spawned threads, the events they report
//! arrive in wall-clock order, which differs from run to run. To
//! reconstruct one deterministic presentation order, every event
//! carries an [`Ordinal`]: an immutable, totally ordered, forkable
//! sequence token.
//!
//! A [`Tracker`] owns the "current" ordinal for one logical execution.
//! Issuing events advances it; handing work to a spawned thread forks
//! it. The fork yields two diverging sequences that never collide, and
//! every ordinal from the spawned branch sorts before every ordinal
//! the continuing branch issues afterwards - so sorting a merged event
//! stream reproduces the nesting structure regardless of how the
//! threads actually interleaved.

mod ordinal;
mod tracker;

pub use ordinal::Ordinal;
pub use tracker::Tracker;
