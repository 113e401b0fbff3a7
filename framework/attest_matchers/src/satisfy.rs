use std::fmt;

use attest_core::{ArgValue, MatchResult, Matcher};

/// Match values for which `predicate` returns true.
///
/// The escape hatch: anything without a dedicated matcher fits here.
/// `description` names the predicate in the messages - "the x was
/// positive", "a valid user id" - so failures still read as prose.
pub fn satisfy<F>(description: impl Into<String>, predicate: F) -> SatisfyMatcher<F> {
    SatisfyMatcher {
        description: description.into(),
        predicate,
    }
}

/// Predicate matcher. Built by [`satisfy`].
#[derive(Clone)]
pub struct SatisfyMatcher<F> {
    description: String,
    predicate: F,
}

impl<F> fmt::Debug for SatisfyMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SatisfyMatcher")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<T, F> Matcher<T> for SatisfyMatcher<F>
where
    T: fmt::Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    fn apply(&self, actual: &T) -> MatchResult {
        MatchResult::new(
            (self.predicate)(actual),
            "{0} did not satisfy {1}",
            "{0} satisfied {1}",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::raw(self.description.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::{expect, Prettifier};
    use pretty_assertions::assert_eq;

    #[test]
    fn applies_the_predicate() {
        let positive = satisfy("the positivity requirement", |n: &i32| *n > 0);
        assert!(positive.apply(&3).matches);
        assert!(!positive.apply(&-3).matches);
    }

    #[test]
    fn description_appears_unquoted() {
        let positive = satisfy("the positivity requirement", |n: &i32| *n > 0);
        let result = positive.apply(&-3);
        assert_eq!(
            result.failure_message(&Prettifier::new()),
            "-3 did not satisfy the positivity requirement"
        );
        let result = positive.apply(&3);
        assert_eq!(
            result.negated_failure_message(&Prettifier::new()),
            "3 satisfied the positivity requirement"
        );
    }

    #[test]
    fn works_on_unsized_values() {
        let shouty = satisfy("the all-caps convention", |s: &str| {
            s.chars().all(|c| !c.is_lowercase())
        });
        assert_eq!(expect("LOUD").to(shouty), Ok(()));
    }
}
