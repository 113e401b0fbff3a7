use std::fmt;

use attest_core::{ArgValue, MatchResult, Matcher};

/// Which comparison an [`OrderingMatcher`] performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Op {
    fn raw_failure(self) -> &'static str {
        match self {
            Op::Less => "{0} was not less than {1}",
            Op::LessOrEqual => "{0} was not less than or equal to {1}",
            Op::Greater => "{0} was not greater than {1}",
            Op::GreaterOrEqual => "{0} was not greater than or equal to {1}",
        }
    }

    fn raw_negated(self) -> &'static str {
        match self {
            Op::Less => "{0} was less than {1}",
            Op::LessOrEqual => "{0} was less than or equal to {1}",
            Op::Greater => "{0} was greater than {1}",
            Op::GreaterOrEqual => "{0} was greater than or equal to {1}",
        }
    }
}

/// Match values strictly less than `right`.
pub fn be_less_than<E>(right: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        right,
        op: Op::Less,
    }
}

/// Match values less than or equal to `right`.
pub fn be_less_than_or_equal_to<E>(right: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        right,
        op: Op::LessOrEqual,
    }
}

/// Match values strictly greater than `right`.
pub fn be_greater_than<E>(right: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        right,
        op: Op::Greater,
    }
}

/// Match values greater than or equal to `right`.
pub fn be_greater_than_or_equal_to<E>(right: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        right,
        op: Op::GreaterOrEqual,
    }
}

/// Comparison matcher. Built by the `be_*_than` constructors.
#[derive(Clone, Copy, Debug)]
pub struct OrderingMatcher<E> {
    right: E,
    op: Op,
}

impl<T, E> Matcher<T> for OrderingMatcher<E>
where
    T: PartialOrd<E> + fmt::Debug + Clone + Send + Sync + 'static,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &T) -> MatchResult {
        let matches = match self.op {
            Op::Less => *actual < self.right,
            Op::LessOrEqual => *actual <= self.right,
            Op::Greater => *actual > self.right,
            Op::GreaterOrEqual => *actual >= self.right,
        };
        MatchResult::new(matches, self.op.raw_failure(), self.op.raw_negated()).with_args([
            ArgValue::value(actual.clone()),
            ArgValue::value(self.right.clone()),
        ])
    }
}
