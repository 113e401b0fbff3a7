//! Attest Core - the matcher engine.
//!
//! This crate provides:
//! - `MatchResult` - the outcome of applying a matcher: a boolean plus
//!   four raw message templates (failure, negated failure, and their
//!   mid-sentence variants) with captured argument vectors
//! - `Matcher` - a predicate-with-explanation over a value
//! - `and` / `or` / `not` composition
//! - `expect(..)` - the assertion entry point
//!
//! # Message protocol
//!
//! Every matcher fills all four message variants so that composition
//! never needs special cases: `not` swaps the failure/negated pairs,
//! and `and`/`or` splice sub-messages mid-sentence. Message
//! construction is pure and deferred - applying a matcher captures raw
//! templates and arguments, and nothing is formatted until a
//! `*_message` accessor is called.
//!
//! # Composition semantics
//!
//! `and` and `or` evaluate both sides eagerly (both matchers always
//! run), but message construction short-circuits: when the left side of
//! an `and` fails, the composed result is the left result and the right
//! side's messages never surface.

mod expect;
mod match_result;
mod matcher;

pub use expect::{expect, Expectation, FailedAssertion};
pub use match_result::{ArgVec, MatchResult, MessageVariant};
pub use matcher::{not, AndMatcher, Matcher, NotMatcher, OrMatcher};

// The formatting layer is part of this crate's public signatures.
pub use attest_render::{expand, ArgValue, Prettifier, RenderArg};
