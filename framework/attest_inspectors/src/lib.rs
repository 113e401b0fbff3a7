//! Attest Inspectors - quantifier policies over collections.
//!
//! An inspector applies one assertion to every element of a collection
//! and decides the aggregate verdict by a counting rule:
//!
//! - [`for_all`] - every element must pass; reports the FIRST failure
//! - [`for_every`] - every element must pass; reports ALL failures
//! - [`for_at_least`] - at least `n` elements pass
//! - [`for_at_most`] - at most `n` elements pass
//! - [`for_exactly`] - exactly `n` elements pass
//! - [`for_between`] - the pass count falls in an inclusive range
//!
//! Each comes in two forms: applying a [`Matcher`](attest_core::Matcher)
//! (`for_all`), or running a fallible closure (`for_all_with`), which
//! is how inspections nest.
//!
//! Policies short-circuit where their counting rule allows: `for_all`
//! stops at the first failure, `for_at_least` succeeds as soon as the
//! quota is met, `for_at_most` fails as soon as the quota is exceeded.
//! `for_every` and the shortfall side of `for_exactly` must examine
//! everything.

mod inspect;
mod outcome;
mod quantifier;

pub use inspect::{
    for_all, for_all_with, for_at_least, for_at_least_with, for_at_most, for_at_most_with,
    for_between, for_between_with, for_every, for_every_with, for_exactly, for_exactly_with,
};
pub use outcome::{ElementFailure, InspectionError, InspectionStats, Unsatisfied};
pub use quantifier::Quantifier;
