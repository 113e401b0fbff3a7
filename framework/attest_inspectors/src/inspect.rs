use std::fmt;

use tracing::{debug, trace};

use attest_core::{Matcher, Prettifier};

use crate::{ElementFailure, InspectionError, InspectionStats, Quantifier, Unsatisfied};

/// Every element must pass. Reports the first failure only.
pub fn for_all<C, T, M>(collection: &C, matcher: M) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    M: Matcher<T>,
{
    run(Quantifier::All, collection, matcher_check(&matcher))
}

/// Every element must pass the closure. Reports the first failure only.
pub fn for_all_with<C, T, K>(collection: &C, check: K) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    run(Quantifier::All, collection, check)
}

/// Every element must pass. Examines everything, reports all failures.
pub fn for_every<C, T, M>(collection: &C, matcher: M) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    M: Matcher<T>,
{
    run(Quantifier::Every, collection, matcher_check(&matcher))
}

/// Every element must pass the closure. Reports all failures.
pub fn for_every_with<C, T, K>(collection: &C, check: K) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    run(Quantifier::Every, collection, check)
}

/// At least `n` elements must pass. Succeeds as soon as `n` do.
pub fn for_at_least<C, T, M>(n: usize, collection: &C, matcher: M) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    M: Matcher<T>,
{
    run(Quantifier::AtLeast(n), collection, matcher_check(&matcher))
}

/// At least `n` elements must pass the closure.
pub fn for_at_least_with<C, T, K>(n: usize, collection: &C, check: K) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    run(Quantifier::AtLeast(n), collection, check)
}

/// At most `n` elements may pass. Fails as soon as `n + 1` do.
pub fn for_at_most<C, T, M>(n: usize, collection: &C, matcher: M) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    M: Matcher<T>,
{
    run(Quantifier::AtMost(n), collection, matcher_check(&matcher))
}

/// At most `n` elements may pass the closure.
pub fn for_at_most_with<C, T, K>(n: usize, collection: &C, check: K) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    run(Quantifier::AtMost(n), collection, check)
}

/// Exactly `n` elements must pass.
pub fn for_exactly<C, T, M>(n: usize, collection: &C, matcher: M) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    M: Matcher<T>,
{
    run(Quantifier::Exactly(n), collection, matcher_check(&matcher))
}

/// Exactly `n` elements must pass the closure.
pub fn for_exactly_with<C, T, K>(n: usize, collection: &C, check: K) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    run(Quantifier::Exactly(n), collection, check)
}

/// Between `from` and `upto` elements (inclusive) must pass.
pub fn for_between<C, T, M>(
    from: usize,
    upto: usize,
    collection: &C,
    matcher: M,
) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    M: Matcher<T>,
{
    run(
        Quantifier::Between(from, upto),
        collection,
        matcher_check(&matcher),
    )
}

/// Between `from` and `upto` elements (inclusive) must pass the closure.
pub fn for_between_with<C, T, K>(
    from: usize,
    upto: usize,
    collection: &C,
    check: K,
) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    run(Quantifier::Between(from, upto), collection, check)
}

/// Adapt a matcher to the closure form the engine runs.
fn matcher_check<'m, T, M>(matcher: &'m M) -> impl FnMut(&T) -> Result<(), String> + 'm
where
    M: Matcher<T>,
{
    move |element: &T| {
        let result = matcher.apply(element);
        if result.matches {
            Ok(())
        } else {
            Err(result.failure_message(&Prettifier::new()))
        }
    }
}

/// The inspection engine: one iteration, counting per the quantifier.
///
/// Early exits per policy: success for `AtLeast` once the quota is
/// met, failure for `All` on the first miss and for the bounded
/// policies once the pass count exceeds what the rule allows.
fn run<C, T, K>(
    quantifier: Quantifier,
    collection: &C,
    mut check: K,
) -> Result<(), InspectionError>
where
    C: fmt::Debug + ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> Result<(), String>,
{
    if let Err(message) = quantifier.validate() {
        return Err(InspectionError::BadArgument(message));
    }

    let mut stats = InspectionStats::default();
    let mut failures: Vec<ElementFailure> = Vec::new();
    let mut passing: Vec<usize> = Vec::new();

    for (index, element) in collection.into_iter().enumerate() {
        stats.examined += 1;
        match check(element) {
            Ok(()) => {
                stats.passed += 1;
                passing.push(index);
                trace!(%quantifier, index, "element passed");
            }
            Err(message) => {
                stats.failed += 1;
                trace!(%quantifier, index, %message, "element failed");
                failures.push(ElementFailure { index, message });
            }
        }

        match quantifier {
            Quantifier::All if stats.failed > 0 => break,
            Quantifier::AtLeast(n) if stats.passed >= n => {
                debug!(%quantifier, examined = stats.examined, "quota met early");
                return Ok(());
            }
            Quantifier::AtMost(n) if stats.passed > n => break,
            Quantifier::Exactly(n) if stats.passed > n => break,
            Quantifier::Between(_, upto) if stats.passed > upto => break,
            _ => {}
        }
    }

    if quantifier.satisfied_by(stats.passed, stats.failed) {
        return Ok(());
    }
    debug!(%quantifier, ?stats, "inspection unsatisfied");
    Err(InspectionError::Unsatisfied(Unsatisfied {
        quantifier,
        stats,
        failures,
        passing,
        collection: format!("{collection:?}"),
    }))
}

#[cfg(test)]
mod tests;
