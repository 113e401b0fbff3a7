//! Attest Matchers - the concrete matcher library.
//!
//! Each matcher is a small value built by a constructor function:
//!
//! ```
//! use attest_core::{expect, not, Matcher};
//! use attest_matchers::{be_greater_than, contain, equal};
//!
//! # fn main() -> Result<(), attest_core::FailedAssertion> {
//! expect(&3).to(equal(3))?;
//! expect(&7).to(be_greater_than(2).and(not(equal(9))))?;
//! expect(&vec![1, 2, 3]).to(contain(2))?;
//! # Ok(())
//! # }
//! ```
//!
//! Matchers fill all four message variants of the result protocol, so
//! they compose under `and`/`or`/`not` without special cases.
//!
//! The original framework's enumerable fluent surface (hundreds of
//! near-duplicate syntax words) reduces to this representative set;
//! anything bespoke fits through [`satisfy`].

mod containment;
mod equality;
mod length;
mod ordering;
mod satisfy;
mod strings;
mod wrappers;

pub use containment::{
    contain, contain_all_of, contain_at_least_one_of, contain_none_of, contain_one_of,
    contain_the_same_elements_as, ContainAllOfMatcher, ContainAtLeastOneOfMatcher,
    ContainMatcher, ContainNoneOfMatcher, ContainOneOfMatcher, SameElementsMatcher,
};
pub use equality::{equal, EqualMatcher};
pub use length::{
    be_empty, have_length, BeEmptyMatcher, HasLength, HaveLengthMatcher, IsEmpty,
};
pub use ordering::{
    be_greater_than, be_greater_than_or_equal_to, be_less_than, be_less_than_or_equal_to,
    OrderingMatcher,
};
pub use satisfy::{satisfy, SatisfyMatcher};
pub use strings::{end_with, include, start_with, EndWithMatcher, IncludeMatcher, StartWithMatcher};
pub use wrappers::{be_err, be_none, be_ok, be_some, BeErrMatcher, BeNoneMatcher, BeOkMatcher, BeSomeMatcher};
