use attest_core::{ArgValue, MatchResult, Matcher};

/// Match strings starting with `prefix`.
pub fn start_with(prefix: impl Into<String>) -> StartWithMatcher {
    StartWithMatcher {
        prefix: prefix.into(),
    }
}

/// Match strings ending with `suffix`.
pub fn end_with(suffix: impl Into<String>) -> EndWithMatcher {
    EndWithMatcher {
        suffix: suffix.into(),
    }
}

/// Match strings containing `substring`.
pub fn include(substring: impl Into<String>) -> IncludeMatcher {
    IncludeMatcher {
        substring: substring.into(),
    }
}

/// Prefix matcher. Built by [`start_with`].
#[derive(Clone, Debug)]
pub struct StartWithMatcher {
    prefix: String,
}

impl<S> Matcher<S> for StartWithMatcher
where
    S: AsRef<str> + ?Sized,
{
    fn apply(&self, actual: &S) -> MatchResult {
        let actual = actual.as_ref();
        MatchResult::new(
            actual.starts_with(&self.prefix),
            "{0} did not start with substring {1}",
            "{0} started with substring {1}",
        )
        .with_args([
            ArgValue::value(actual.to_owned()),
            ArgValue::value(self.prefix.clone()),
        ])
    }
}

/// Suffix matcher. Built by [`end_with`].
#[derive(Clone, Debug)]
pub struct EndWithMatcher {
    suffix: String,
}

impl<S> Matcher<S> for EndWithMatcher
where
    S: AsRef<str> + ?Sized,
{
    fn apply(&self, actual: &S) -> MatchResult {
        let actual = actual.as_ref();
        MatchResult::new(
            actual.ends_with(&self.suffix),
            "{0} did not end with substring {1}",
            "{0} ended with substring {1}",
        )
        .with_args([
            ArgValue::value(actual.to_owned()),
            ArgValue::value(self.suffix.clone()),
        ])
    }
}

/// Substring matcher. Built by [`include`].
#[derive(Clone, Debug)]
pub struct IncludeMatcher {
    substring: String,
}

impl<S> Matcher<S> for IncludeMatcher
where
    S: AsRef<str> + ?Sized,
{
    fn apply(&self, actual: &S) -> MatchResult {
        let actual = actual.as_ref();
        MatchResult::new(
            actual.contains(&self.substring),
            "{0} did not include substring {1}",
            "{0} included substring {1}",
        )
        .with_args([
            ArgValue::value(actual.to_owned()),
            ArgValue::value(self.substring.clone()),
        ])
    }
}
