use attest_render::{templates, ArgValue, Prettifier, RenderArg};

use crate::{MatchResult, MessageVariant};

/// A predicate-with-explanation over values of type `T`.
///
/// Applying a matcher yields a [`MatchResult`]: the outcome plus the
/// deferred messages explaining it in either polarity. Matchers are
/// values - composition builds new matchers out of old ones.
pub trait Matcher<T: ?Sized> {
    /// Apply this matcher to a value.
    fn apply(&self, actual: &T) -> MatchResult;

    /// Both this matcher and `right` must accept the value.
    ///
    /// Both sides always run; only the failing side's message surfaces.
    fn and<R>(self, right: R) -> AndMatcher<Self, R>
    where
        Self: Sized,
        R: Matcher<T>,
    {
        AndMatcher { left: self, right }
    }

    /// At least one of this matcher and `right` must accept the value.
    ///
    /// Both sides always run, matching the `and` combinator - an `or`
    /// is not an excuse to skip evaluating a side effect or panic.
    fn or<R>(self, right: R) -> OrMatcher<Self, R>
    where
        Self: Sized,
        R: Matcher<T>,
    {
        OrMatcher { left: self, right }
    }
}

/// Any `Fn(&T) -> MatchResult` closure is a matcher.
impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T) -> MatchResult,
{
    fn apply(&self, actual: &T) -> MatchResult {
        self(actual)
    }
}

/// Invert a matcher.
pub fn not<M>(matcher: M) -> NotMatcher<M> {
    NotMatcher { inner: matcher }
}

/// Conjunction of two matchers. Built by [`Matcher::and`].
#[derive(Clone, Copy, Debug)]
pub struct AndMatcher<L, R> {
    left: L,
    right: R,
}

impl<T: ?Sized, L, R> Matcher<T> for AndMatcher<L, R>
where
    L: Matcher<T>,
    R: Matcher<T>,
{
    fn apply(&self, actual: &T) -> MatchResult {
        let left = self.left.apply(actual);
        let right = self.right.apply(actual);
        compose_and(left, right)
    }
}

/// Disjunction of two matchers. Built by [`Matcher::or`].
#[derive(Clone, Copy, Debug)]
pub struct OrMatcher<L, R> {
    left: L,
    right: R,
}

impl<T: ?Sized, L, R> Matcher<T> for OrMatcher<L, R>
where
    L: Matcher<T>,
    R: Matcher<T>,
{
    fn apply(&self, actual: &T) -> MatchResult {
        let left = self.left.apply(actual);
        let right = self.right.apply(actual);
        compose_or(left, right)
    }
}

/// Negation of a matcher. Built by [`not`].
#[derive(Clone, Copy, Debug)]
pub struct NotMatcher<M> {
    inner: M,
}

impl<T: ?Sized, M> Matcher<T> for NotMatcher<M>
where
    M: Matcher<T>,
{
    fn apply(&self, actual: &T) -> MatchResult {
        self.inner.apply(actual).negated()
    }
}

/// A sub-result's message, spliced into a composed template lazily.
///
/// Keeps composed results as deferred as their parts: the sub-message
/// renders with whatever prettifier is in effect when the composed
/// message is finally read.
struct SubMessage {
    result: MatchResult,
    variant: MessageVariant,
}

impl RenderArg for SubMessage {
    fn render(&self, prettifier: &Prettifier) -> String {
        self.result.message(self.variant, prettifier)
    }
}

fn sub(result: &MatchResult, variant: MessageVariant) -> ArgValue {
    ArgValue::lazy(SubMessage {
        result: result.clone(),
        variant,
    })
}

/// Compose two results under conjunction.
///
/// A failed left side IS the composed result - the right side's
/// messages never surface. Otherwise the left clause (which succeeded,
/// so its negated-failure phrasing describes what happened) joins the
/// right clause mid-sentence.
fn compose_and(left: MatchResult, right: MatchResult) -> MatchResult {
    use MessageVariant::{MidSentenceFailure, MidSentenceNegatedFailure, NegatedFailure};

    if !left.matches {
        return left;
    }
    MatchResult::with_messages(
        right.matches,
        templates::COMMA_BUT,
        templates::COMMA_AND,
        templates::COMMA_BUT,
        templates::COMMA_AND,
    )
    .with_failure_args([sub(&left, NegatedFailure), sub(&right, MidSentenceFailure)])
    .with_negated_args([
        sub(&left, NegatedFailure),
        sub(&right, MidSentenceNegatedFailure),
    ])
    .with_mid_failure_args([
        sub(&left, MidSentenceNegatedFailure),
        sub(&right, MidSentenceFailure),
    ])
    .with_mid_negated_args([
        sub(&left, MidSentenceNegatedFailure),
        sub(&right, MidSentenceNegatedFailure),
    ])
}

/// Compose two results under disjunction.
///
/// A matching left side keeps its own failure phrasing (nothing failed,
/// so that text is never read) and explains both disjuncts under
/// negation. A failed left side joins the right clause with comma-and:
/// when both fail, both failures are reported.
fn compose_or(left: MatchResult, right: MatchResult) -> MatchResult {
    use MessageVariant::{
        Failure, MidSentenceFailure, MidSentenceNegatedFailure, NegatedFailure,
    };

    if left.matches {
        let failure_args: Vec<ArgValue> = left.message_args(Failure).to_vec();
        let mid_failure_args: Vec<ArgValue> = left.message_args(MidSentenceFailure).to_vec();
        return MatchResult::with_messages(
            true,
            left.raw_message(Failure),
            templates::COMMA_AND,
            left.raw_message(MidSentenceFailure),
            templates::COMMA_AND,
        )
        .with_failure_args(failure_args)
        .with_negated_args([
            sub(&left, NegatedFailure),
            sub(&right, MidSentenceNegatedFailure),
        ])
        .with_mid_failure_args(mid_failure_args)
        .with_mid_negated_args([
            sub(&left, MidSentenceNegatedFailure),
            sub(&right, MidSentenceNegatedFailure),
        ]);
    }
    MatchResult::with_messages(
        right.matches,
        templates::COMMA_AND,
        templates::COMMA_AND,
        templates::COMMA_AND,
        templates::COMMA_AND,
    )
    .with_failure_args([sub(&left, Failure), sub(&right, MidSentenceFailure)])
    .with_negated_args([sub(&left, Failure), sub(&right, MidSentenceNegatedFailure)])
    .with_mid_failure_args([
        sub(&left, MidSentenceFailure),
        sub(&right, MidSentenceFailure),
    ])
    .with_mid_negated_args([
        sub(&left, MidSentenceFailure),
        sub(&right, MidSentenceNegatedFailure),
    ])
}
