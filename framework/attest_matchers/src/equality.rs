use std::fmt;

use attest_core::{ArgValue, MatchResult, Matcher};

const DID_NOT_EQUAL: &str = "{0} did not equal {1}";
const EQUALED: &str = "{0} equaled {1}";

/// Match values equal to `expected`.
pub fn equal<E>(expected: E) -> EqualMatcher<E> {
    EqualMatcher { expected }
}

/// Equality matcher. Built by [`equal`].
#[derive(Clone, Copy, Debug)]
pub struct EqualMatcher<E> {
    expected: E,
}

impl<T, E> Matcher<T> for EqualMatcher<E>
where
    T: PartialEq<E> + fmt::Debug + Clone + Send + Sync + 'static,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &T) -> MatchResult {
        MatchResult::new(*actual == self.expected, DID_NOT_EQUAL, EQUALED).with_args([
            ArgValue::value(actual.clone()),
            ArgValue::value(self.expected.clone()),
        ])
    }
}
