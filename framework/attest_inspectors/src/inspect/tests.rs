use std::cell::Cell;

use super::*;
use attest_matchers::{be_greater_than, be_less_than};
use pretty_assertions::assert_eq;

fn unwrap_unsatisfied(result: Result<(), InspectionError>) -> Unsatisfied {
    match result {
        Err(InspectionError::Unsatisfied(unsatisfied)) => unsatisfied,
        other => panic!("expected an unsatisfied inspection, got {other:?}"),
    }
}

#[test]
fn for_all_passes_when_every_element_passes() {
    assert!(for_all(&vec![1, 2, 3], be_less_than(5)).is_ok());
}

#[test]
fn for_all_reports_the_first_failure_only() {
    let err = unwrap_unsatisfied(for_all(&vec![3, 1, 7, 9], be_less_than(5)));
    assert_eq!(err.failures.len(), 1);
    assert_eq!(err.failures[0].index, 2);
    assert_eq!(
        err.to_string(),
        "for_all failed, because:\n  at index 2, 7 was not less than 5\nin [3, 1, 7, 9]"
    );
}

#[test]
fn for_all_stops_examining_after_the_first_failure() {
    let err = unwrap_unsatisfied(for_all(&vec![9, 1, 7], be_less_than(5)));
    assert_eq!(err.stats.examined, 1);
    assert_eq!(err.stats.failed, 1);
    assert_eq!(err.stats.passed, 0);
}

#[test]
fn for_every_examines_everything_and_reports_all_failures() {
    let err = unwrap_unsatisfied(for_every(&vec![6, 1, 7], be_less_than(5)));
    assert_eq!(err.stats.examined, 3);
    assert_eq!(
        err.to_string(),
        "for_every failed, because:\n  at index 0, 6 was not less than 5\n  at index 2, 7 was not less than 5\nin [6, 1, 7]"
    );
}

#[test]
fn for_at_least_succeeds_as_soon_as_the_quota_is_met() {
    let examined = Cell::new(0);
    let result = for_at_least_with(2, &vec![1, 2, 9, 8], |n: &i32| {
        examined.set(examined.get() + 1);
        if *n < 5 {
            Ok(())
        } else {
            Err(format!("{n} was not less than 5"))
        }
    });
    assert!(result.is_ok());
    assert_eq!(examined.get(), 2);
}

#[test]
fn for_at_least_shortfall_reports_all_failures() {
    let err = unwrap_unsatisfied(for_at_least(3, &vec![1, 9, 8], be_less_than(5)));
    assert_eq!(
        err.to_string(),
        "for_at_least(3) failed, because only 1 of the 3 examined elements satisfied the assertion:\n  at index 1, 9 was not less than 5\n  at index 2, 8 was not less than 5\nin [1, 9, 8]"
    );
}

#[test]
fn for_at_most_fails_as_soon_as_the_quota_is_exceeded() {
    let err = unwrap_unsatisfied(for_at_most(1, &vec![1, 2, 9], be_less_than(5)));
    // Stopped at the second pass - the third element was never examined.
    assert_eq!(err.stats.examined, 2);
    assert_eq!(
        err.to_string(),
        "for_at_most(1) failed, because 2 elements satisfied the assertion, at indexes 0, 1, in [1, 2, 9]"
    );
}

#[test]
fn for_at_most_passes_under_the_quota() {
    assert!(for_at_most(2, &vec![1, 9, 8], be_less_than(5)).is_ok());
    assert!(for_at_most(2, &vec![9, 8, 7], be_less_than(5)).is_ok());
}

#[test]
fn for_exactly_distinguishes_shortfall_from_surplus() {
    assert!(for_exactly(2, &vec![1, 2, 9], be_less_than(5)).is_ok());

    let shortfall = unwrap_unsatisfied(for_exactly(2, &vec![1, 9, 8], be_less_than(5)));
    assert_eq!(
        shortfall.to_string(),
        "for_exactly(2) failed, because only 1 of the 3 examined elements satisfied the assertion:\n  at index 1, 9 was not less than 5\n  at index 2, 8 was not less than 5\nin [1, 9, 8]"
    );

    let surplus = unwrap_unsatisfied(for_exactly(2, &vec![1, 2, 3], be_less_than(5)));
    assert_eq!(
        surplus.to_string(),
        "for_exactly(2) failed, because 3 elements satisfied the assertion, at indexes 0, 1, 2, in [1, 2, 3]"
    );
}

#[test]
fn for_between_bounds_are_inclusive() {
    assert!(for_between(1, 2, &vec![1, 9, 8], be_less_than(5)).is_ok());
    assert!(for_between(1, 2, &vec![1, 2, 9], be_less_than(5)).is_ok());

    let surplus = unwrap_unsatisfied(for_between(1, 2, &vec![1, 2, 3], be_less_than(5)));
    assert_eq!(surplus.stats.passed, 3);

    let shortfall = unwrap_unsatisfied(for_between(1, 2, &vec![9, 8, 7], be_less_than(5)));
    assert_eq!(shortfall.stats.passed, 0);
}

#[test]
fn degenerate_bounds_are_rejected_not_panicked() {
    let err = for_at_least(0, &vec![1], be_less_than(5));
    match err {
        Err(InspectionError::BadArgument(message)) => {
            assert_eq!(message, "for_at_least requires n >= 1, but n was 0");
        }
        other => panic!("expected BadArgument, got {other:?}"),
    }
    assert!(matches!(
        for_exactly(0, &vec![1], be_less_than(5)),
        Err(InspectionError::BadArgument(_))
    ));
    assert!(matches!(
        for_between(3, 1, &vec![1], be_less_than(5)),
        Err(InspectionError::BadArgument(_))
    ));
}

#[test]
fn empty_collections() {
    let empty: Vec<i32> = Vec::new();
    // Universal policies pass vacuously.
    assert!(for_all(&empty, be_less_than(5)).is_ok());
    assert!(for_every(&empty, be_less_than(5)).is_ok());
    assert!(for_at_most(1, &empty, be_less_than(5)).is_ok());
    assert!(for_between(0, 2, &empty, be_less_than(5)).is_ok());
    // Existential policies fail.
    let err = unwrap_unsatisfied(for_at_least(1, &empty, be_less_than(5)));
    assert_eq!(err.stats.examined, 0);
    assert!(for_exactly(1, &empty, be_less_than(5)).is_err());
}

#[test]
fn composed_matchers_flow_through() {
    let err = unwrap_unsatisfied(for_all(
        &vec![3, 4],
        be_greater_than(2).and(be_less_than(4)),
    ));
    assert_eq!(
        err.to_string(),
        "for_all failed, because:\n  at index 1, 4 was greater than 2, but 4 was not less than 4\nin [3, 4]"
    );
}

#[test]
fn inspections_nest_through_the_closure_form() {
    let matrix = vec![vec![1, 2], vec![9, 1]];
    let err = unwrap_unsatisfied(for_all_with(&matrix, |row: &Vec<i32>| {
        for_all(row, be_less_than(5)).map_err(|e| e.to_string())
    }));
    assert_eq!(err.failures.len(), 1);
    assert_eq!(err.failures[0].index, 1);
    assert_eq!(
        err.failures[0].message,
        "for_all failed, because:\n  at index 0, 9 was not less than 5\nin [9, 1]"
    );
}

#[test]
fn works_over_slices() {
    let slice: &[i32] = &[1, 2, 3];
    assert!(for_all(slice, be_less_than(5)).is_ok());
}

#[test]
fn counting_rule_holds_in_every_report() {
    for quantifier_err in [
        for_all(&vec![9, 1], be_less_than(5)),
        for_every(&vec![9, 1], be_less_than(5)),
        for_at_least(2, &vec![9, 1], be_less_than(5)),
        for_at_most(0, &vec![1, 9], be_less_than(5)),
        for_exactly(2, &vec![9, 8], be_less_than(5)),
        for_between(2, 3, &vec![9, 8], be_less_than(5)),
    ] {
        let unsatisfied = unwrap_unsatisfied(quantifier_err);
        assert_eq!(
            unsatisfied.stats.examined,
            unsatisfied.stats.passed + unsatisfied.stats.failed
        );
    }
}
