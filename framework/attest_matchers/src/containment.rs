use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use attest_core::{ArgValue, MatchResult, Matcher};

/// Match collections containing `element`.
pub fn contain<E>(element: E) -> ContainMatcher<E> {
    ContainMatcher { element }
}

/// Match collections containing exactly one distinct element of `items`.
pub fn contain_one_of<E>(items: Vec<E>) -> ContainOneOfMatcher<E> {
    ContainOneOfMatcher { items }
}

/// Match collections containing at least one element of `items`.
pub fn contain_at_least_one_of<E>(items: Vec<E>) -> ContainAtLeastOneOfMatcher<E> {
    ContainAtLeastOneOfMatcher { items }
}

/// Match collections containing no element of `items`.
pub fn contain_none_of<E>(items: Vec<E>) -> ContainNoneOfMatcher<E> {
    ContainNoneOfMatcher { items }
}

/// Match collections containing every element of `items`.
pub fn contain_all_of<E>(items: Vec<E>) -> ContainAllOfMatcher<E> {
    ContainAllOfMatcher { items }
}

/// Match collections holding the same elements as `expected`, with the
/// same multiplicities, in any order.
pub fn contain_the_same_elements_as<E>(expected: Vec<E>) -> SameElementsMatcher<E> {
    SameElementsMatcher { expected }
}

/// Element containment matcher. Built by [`contain`].
#[derive(Clone, Copy, Debug)]
pub struct ContainMatcher<E> {
    element: E,
}

impl<C, E> Matcher<C> for ContainMatcher<E>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: PartialEq<&'a E>,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &C) -> MatchResult {
        let found = actual.into_iter().any(|item| item == &self.element);
        MatchResult::new(
            found,
            "{0} did not contain element {1}",
            "{0} contained element {1}",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::value(self.element.clone()),
        ])
    }
}

/// How many of `items` have at least one occurrence in the collection.
fn present_count<C, E>(actual: &C, items: &[E]) -> usize
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: PartialEq<&'a E>,
{
    items
        .iter()
        .filter(|expected| actual.into_iter().any(|item| item == *expected))
        .count()
}

/// Exactly-one-of matcher. Built by [`contain_one_of`].
#[derive(Clone, Debug)]
pub struct ContainOneOfMatcher<E> {
    items: Vec<E>,
}

impl<C, E> Matcher<C> for ContainOneOfMatcher<E>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: PartialEq<&'a E>,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &C) -> MatchResult {
        let present = present_count(actual, &self.items);
        MatchResult::new(
            present == 1,
            "{0} did not contain one (and only one) of ({1})",
            "{0} contained one (and only one) of ({1})",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::list(self.items.clone()),
        ])
    }
}

/// At-least-one-of matcher. Built by [`contain_at_least_one_of`].
#[derive(Clone, Debug)]
pub struct ContainAtLeastOneOfMatcher<E> {
    items: Vec<E>,
}

impl<C, E> Matcher<C> for ContainAtLeastOneOfMatcher<E>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: PartialEq<&'a E>,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &C) -> MatchResult {
        let present = present_count(actual, &self.items);
        MatchResult::new(
            present >= 1,
            "{0} did not contain at least one of ({1})",
            "{0} contained at least one of ({1})",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::list(self.items.clone()),
        ])
    }
}

/// None-of matcher. Built by [`contain_none_of`].
#[derive(Clone, Debug)]
pub struct ContainNoneOfMatcher<E> {
    items: Vec<E>,
}

impl<C, E> Matcher<C> for ContainNoneOfMatcher<E>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: PartialEq<&'a E>,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &C) -> MatchResult {
        let present = present_count(actual, &self.items);
        MatchResult::new(
            present == 0,
            "{0} contained one of ({1})",
            "{0} did not contain one of ({1})",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::list(self.items.clone()),
        ])
    }
}

/// All-of matcher. Built by [`contain_all_of`].
#[derive(Clone, Debug)]
pub struct ContainAllOfMatcher<E> {
    items: Vec<E>,
}

impl<C, E> Matcher<C> for ContainAllOfMatcher<E>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: PartialEq<&'a E>,
    E: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &C) -> MatchResult {
        let present = present_count(actual, &self.items);
        MatchResult::new(
            present == self.items.len(),
            "{0} did not contain all of ({1})",
            "{0} contained all of ({1})",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::list(self.items.clone()),
        ])
    }
}

/// Multiset equality matcher. Built by [`contain_the_same_elements_as`].
#[derive(Clone, Debug)]
pub struct SameElementsMatcher<E> {
    expected: Vec<E>,
}

impl<C, E> Matcher<C> for SameElementsMatcher<E>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a E>,
    E: Hash + Eq + fmt::Debug + Clone + Send + Sync + 'static,
{
    fn apply(&self, actual: &C) -> MatchResult {
        // Multiplicity ledger: +1 per expected occurrence, -1 per
        // actual occurrence. Equal multisets zero out exactly.
        let mut counts: FxHashMap<&E, i64> = FxHashMap::default();
        for expected in &self.expected {
            *counts.entry(expected).or_insert(0) += 1;
        }
        let mut unknown = false;
        for item in actual {
            match counts.get_mut(item) {
                Some(count) => *count -= 1,
                None => {
                    unknown = true;
                    break;
                }
            }
        }
        let matches = !unknown && counts.values().all(|&count| count == 0);
        MatchResult::new(
            matches,
            "{0} did not contain the same elements as ({1})",
            "{0} contained the same elements as ({1})",
        )
        .with_args([
            ArgValue::rendered(format!("{actual:?}")),
            ArgValue::list(self.expected.clone()),
        ])
    }
}

#[cfg(test)]
mod tests;
