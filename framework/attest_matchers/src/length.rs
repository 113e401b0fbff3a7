use std::collections::VecDeque;
use std::fmt;

use attest_core::{ArgValue, MatchResult, Matcher};

/// Types with a length, for [`have_length`].
///
/// Explicit trait rather than reflective property lookup: a type opts
/// in by saying what its length is.
pub trait HasLength: fmt::Debug {
    /// The number of elements (or chars, for strings).
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T: fmt::Debug> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: fmt::Debug> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: fmt::Debug> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: fmt::Debug, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

/// Types that can be empty, for [`be_empty`].
pub trait IsEmpty: fmt::Debug {
    /// Whether the value holds nothing.
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: fmt::Debug> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: fmt::Debug> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: fmt::Debug> IsEmpty for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Match values whose [`HasLength::length`] equals `expected`.
pub fn have_length(expected: usize) -> HaveLengthMatcher {
    HaveLengthMatcher { expected }
}

/// Match values that are empty.
pub fn be_empty() -> BeEmptyMatcher {
    BeEmptyMatcher
}

/// Length matcher. Built by [`have_length`].
#[derive(Clone, Copy, Debug)]
pub struct HaveLengthMatcher {
    expected: usize,
}

impl<T> Matcher<T> for HaveLengthMatcher
where
    T: HasLength + ?Sized,
{
    fn apply(&self, actual: &T) -> MatchResult {
        let length = actual.length();
        MatchResult::new(
            length == self.expected,
            "{0} had length {1} instead of expected length {2}",
            "{0} had length {1}",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::value(length),
            ArgValue::value(self.expected),
        ])
    }
}

/// Emptiness matcher. Built by [`be_empty`].
#[derive(Clone, Copy, Debug)]
pub struct BeEmptyMatcher;

impl<T> Matcher<T> for BeEmptyMatcher
where
    T: IsEmpty + ?Sized,
{
    fn apply(&self, actual: &T) -> MatchResult {
        MatchResult::new(
            actual.is_empty_value(),
            "{0} was not empty",
            "{0} was empty",
        )
        .with_args([ArgValue::rendered(format!("{actual:?}"))])
    }
}
