use attest_render::Prettifier;

use crate::Matcher;

/// A failed assertion, carrying the rendered diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FailedAssertion {
    /// The expanded failure message.
    pub message: String,
}

impl FailedAssertion {
    /// Wrap an already-rendered message.
    pub fn new(message: impl Into<String>) -> Self {
        FailedAssertion {
            message: message.into(),
        }
    }
}

/// Entry point for an assertion: `expect(&value).to(matcher)?`.
pub fn expect<T: ?Sized>(actual: &T) -> Expectation<'_, T> {
    Expectation {
        actual,
        prettifier: Prettifier::new(),
    }
}

/// A value under assertion.
///
/// Borrow of the actual value plus the prettifier that will render the
/// diagnostic if the assertion fails. Consumed by [`Expectation::to`]
/// or [`Expectation::to_not`].
pub struct Expectation<'a, T: ?Sized> {
    actual: &'a T,
    prettifier: Prettifier,
}

impl<'a, T: ?Sized> Expectation<'a, T> {
    /// Render any failure with `prettifier` instead of the default.
    pub fn with_prettifier(mut self, prettifier: Prettifier) -> Self {
        self.prettifier = prettifier;
        self
    }

    /// Assert the matcher accepts the value.
    pub fn to(self, matcher: impl Matcher<T>) -> Result<(), FailedAssertion> {
        let result = matcher.apply(self.actual);
        if result.matches {
            Ok(())
        } else {
            Err(FailedAssertion::new(
                result.failure_message(&self.prettifier),
            ))
        }
    }

    /// Assert the matcher rejects the value.
    pub fn to_not(self, matcher: impl Matcher<T>) -> Result<(), FailedAssertion> {
        let result = matcher.apply(self.actual);
        if result.matches {
            Err(FailedAssertion::new(
                result.negated_failure_message(&self.prettifier),
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgValue, MatchResult};
    use pretty_assertions::assert_eq;

    fn positive(actual: &i32) -> MatchResult {
        MatchResult::new(
            *actual > 0,
            "{0} was not positive",
            "{0} was positive",
        )
        .with_args([ArgValue::value(*actual)])
    }

    #[test]
    fn passing_assertion_returns_ok() {
        assert_eq!(expect(&3).to(positive), Ok(()));
        assert_eq!(expect(&-1).to_not(positive), Ok(()));
    }

    #[test]
    fn failing_assertion_carries_the_failure_message() {
        let err = expect(&-2).to(positive);
        assert_eq!(err, Err(FailedAssertion::new("-2 was not positive")));
    }

    #[test]
    fn failing_negated_assertion_uses_the_negated_message() {
        let err = expect(&2).to_not(positive);
        assert_eq!(err, Err(FailedAssertion::new("2 was positive")));
    }

    #[test]
    fn custom_prettifier_applies_to_the_report() {
        let verbose = |actual: &String| {
            MatchResult::new(false, "{0} was rejected", "{0} was accepted")
                .with_args([ArgValue::value(actual.clone())])
        };
        let err = expect(&"abcdefghijkl".to_string())
            .with_prettifier(Prettifier::truncating(5))
            .to(verbose);
        assert_eq!(err, Err(FailedAssertion::new("\"abcd... was rejected")));
    }

    #[test]
    fn failed_assertion_displays_its_message() {
        let err = FailedAssertion::new("3 was not positive");
        assert_eq!(err.to_string(), "3 was not positive");
    }
}
