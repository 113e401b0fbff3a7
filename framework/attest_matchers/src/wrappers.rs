use std::fmt;

use attest_core::{ArgValue, MatchResult, Matcher};

/// Match options holding a value.
pub fn be_some() -> BeSomeMatcher {
    BeSomeMatcher
}

/// Match empty options.
pub fn be_none() -> BeNoneMatcher {
    BeNoneMatcher
}

/// Match `Ok` results.
pub fn be_ok() -> BeOkMatcher {
    BeOkMatcher
}

/// Match `Err` results.
pub fn be_err() -> BeErrMatcher {
    BeErrMatcher
}

/// `Option::Some` matcher. Built by [`be_some`].
#[derive(Clone, Copy, Debug)]
pub struct BeSomeMatcher;

impl<T: fmt::Debug> Matcher<Option<T>> for BeSomeMatcher {
    fn apply(&self, actual: &Option<T>) -> MatchResult {
        MatchResult::new(actual.is_some(), "{0} was not Some", "{0} was Some")
            .with_args([ArgValue::rendered(format!("{actual:?}"))])
    }
}

/// `Option::None` matcher. Built by [`be_none`].
#[derive(Clone, Copy, Debug)]
pub struct BeNoneMatcher;

impl<T: fmt::Debug> Matcher<Option<T>> for BeNoneMatcher {
    fn apply(&self, actual: &Option<T>) -> MatchResult {
        MatchResult::new(actual.is_none(), "{0} was not None", "{0} was None")
            .with_args([ArgValue::rendered(format!("{actual:?}"))])
    }
}

/// `Result::Ok` matcher. Built by [`be_ok`].
#[derive(Clone, Copy, Debug)]
pub struct BeOkMatcher;

impl<T: fmt::Debug, E: fmt::Debug> Matcher<Result<T, E>> for BeOkMatcher {
    fn apply(&self, actual: &Result<T, E>) -> MatchResult {
        MatchResult::new(actual.is_ok(), "{0} was not Ok", "{0} was Ok")
            .with_args([ArgValue::rendered(format!("{actual:?}"))])
    }
}

/// `Result::Err` matcher. Built by [`be_err`].
#[derive(Clone, Copy, Debug)]
pub struct BeErrMatcher;

impl<T: fmt::Debug, E: fmt::Debug> Matcher<Result<T, E>> for BeErrMatcher {
    fn apply(&self, actual: &Result<T, E>) -> MatchResult {
        MatchResult::new(actual.is_err(), "{0} was not Err", "{0} was Err")
            .with_args([ArgValue::rendered(format!("{actual:?}"))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::Prettifier;
    use pretty_assertions::assert_eq;

    #[test]
    fn option_matchers() {
        assert!(be_some().apply(&Some(3)).matches);
        assert!(!be_some().apply(&None::<i32>).matches);
        assert!(be_none().apply(&None::<i32>).matches);

        let result = be_some().apply(&None::<i32>);
        assert_eq!(
            result.failure_message(&Prettifier::new()),
            "None was not Some"
        );
        let result = be_none().apply(&Some("x"));
        assert_eq!(
            result.failure_message(&Prettifier::new()),
            "Some(\"x\") was not None"
        );
    }

    #[test]
    fn result_matchers() {
        let ok: Result<i32, String> = Ok(1);
        let err: Result<i32, String> = Err("boom".to_string());
        assert!(be_ok().apply(&ok).matches);
        assert!(be_err().apply(&err).matches);

        let result = be_ok().apply(&err);
        assert_eq!(
            result.failure_message(&Prettifier::new()),
            "Err(\"boom\") was not Ok"
        );
        let result = be_err().apply(&ok);
        assert_eq!(
            result.negated_failure_message(&Prettifier::new()),
            "Ok(1) was Err"
        );
    }
}
