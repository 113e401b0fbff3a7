use super::*;
use attest_core::{expect, not, Prettifier};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

#[test]
fn contain_finds_an_element() {
    assert!(contain(2).apply(&vec![1, 2, 3]).matches);
    assert!(!contain(9).apply(&vec![1, 2, 3]).matches);

    let result = contain(9).apply(&vec![1, 2, 3]);
    assert_eq!(
        result.failure_message(&Prettifier::new()),
        "[1, 2, 3] did not contain element 9"
    );
}

#[test]
fn contain_works_over_slices_and_sets() {
    let slice: &[i32] = &[5, 6];
    assert!(contain(6).apply(slice).matches);

    let set: FxHashSet<i32> = [1, 2, 3].into_iter().collect();
    assert!(contain(2).apply(&set).matches);
}

#[test]
fn one_of_requires_exactly_one_distinct_hit() {
    assert!(contain_one_of(vec![7, 8, 9]).apply(&vec![1, 7, 1]).matches);
    // Two distinct hits.
    assert!(!contain_one_of(vec![7, 8]).apply(&vec![7, 8]).matches);
    // No hits.
    assert!(!contain_one_of(vec![7, 8]).apply(&vec![1, 2]).matches);
    // Repeated occurrences of a single hit still count once.
    assert!(contain_one_of(vec![7, 8]).apply(&vec![7, 7, 7]).matches);
}

#[test]
fn one_of_lists_candidates_in_the_message() {
    let result = contain_one_of(vec![7, 8]).apply(&vec![1, 2]);
    assert_eq!(
        result.failure_message(&Prettifier::new()),
        "[1, 2] did not contain one (and only one) of (7, 8)"
    );
}

#[test]
fn at_least_one_of_and_none_of_are_duals() {
    let actual = vec![1, 2, 3];
    assert!(contain_at_least_one_of(vec![3, 9]).apply(&actual).matches);
    assert!(!contain_none_of(vec![3, 9]).apply(&actual).matches);
    assert!(contain_none_of(vec![8, 9]).apply(&actual).matches);

    let result = contain_none_of(vec![3, 9]).apply(&actual);
    assert_eq!(
        result.failure_message(&Prettifier::new()),
        "[1, 2, 3] contained one of (3, 9)"
    );
}

#[test]
fn all_of_requires_every_item() {
    assert!(contain_all_of(vec![1, 3]).apply(&vec![1, 2, 3]).matches);
    assert!(!contain_all_of(vec![1, 4]).apply(&vec![1, 2, 3]).matches);

    let result = contain_all_of(vec![1, 4]).apply(&vec![1, 2, 3]);
    assert_eq!(
        result.failure_message(&Prettifier::new()),
        "[1, 2, 3] did not contain all of (1, 4)"
    );
}

#[test]
fn empty_candidate_lists() {
    let actual = vec![1, 2];
    // Existential forms fail on an empty candidate list...
    assert!(!contain_one_of(Vec::<i32>::new()).apply(&actual).matches);
    assert!(!contain_at_least_one_of(Vec::<i32>::new()).apply(&actual).matches);
    // ...universal forms pass vacuously.
    assert!(contain_none_of(Vec::<i32>::new()).apply(&actual).matches);
    assert!(contain_all_of(Vec::<i32>::new()).apply(&actual).matches);
}

#[test]
fn same_elements_is_multiset_equality() {
    assert!(contain_the_same_elements_as(vec![3, 1, 2])
        .apply(&vec![1, 2, 3])
        .matches);
    // Multiplicities must agree.
    assert!(!contain_the_same_elements_as(vec![1, 2])
        .apply(&vec![1, 2, 2])
        .matches);
    assert!(!contain_the_same_elements_as(vec![1, 2, 2])
        .apply(&vec![1, 2])
        .matches);
    // An element outside the expected multiset fails.
    assert!(!contain_the_same_elements_as(vec![1, 2])
        .apply(&vec![1, 9])
        .matches);
    // Order is irrelevant, duplicates on both sides balance.
    assert!(contain_the_same_elements_as(vec![2, 1, 2])
        .apply(&vec![2, 2, 1])
        .matches);
}

#[test]
fn same_elements_failure_message() {
    let result = contain_the_same_elements_as(vec![1, 2]).apply(&vec![1, 2, 2]);
    assert_eq!(
        result.failure_message(&Prettifier::new()),
        "[1, 2, 2] did not contain the same elements as (1, 2)"
    );
}

#[test]
fn containment_composes_with_the_entry_point() {
    let xs = vec![1, 2, 3];
    assert_eq!(expect(&xs).to(contain(1)), Ok(()));
    assert_eq!(expect(&xs).to(not(contain(9))), Ok(()));
    let err = expect(&xs).to(contain_one_of(vec![2, 3]));
    assert_eq!(
        err.map_err(|e| e.message),
        Err("[1, 2, 3] did not contain one (and only one) of (2, 3)".to_string())
    );
}
