#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::collections::HashSet;

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn a_run_starts_at_zero() {
    let first = Ordinal::new(3);
    assert_eq!(first.run_stamp(), 3);
    assert_eq!(first.to_vec(), vec![3, 0]);
}

#[test]
fn next_increments_the_last_stamp() {
    let first = Ordinal::new(0);
    assert_eq!(first.next().to_vec(), vec![0, 1]);
    assert_eq!(first.next().next().to_vec(), vec![0, 2]);
}

#[test]
fn successive_ordinals_are_strictly_increasing() {
    let mut current = Ordinal::new(0);
    for _ in 0..100 {
        let following = current.next();
        assert!(current < following);
        current = following;
    }
}

#[test]
fn run_stamp_dominates_the_order() {
    let late_in_run_zero = {
        let mut o = Ordinal::new(0);
        for _ in 0..50 {
            o = o.next();
        }
        o
    };
    assert!(late_in_run_zero < Ordinal::new(1));
}

#[test]
fn fork_point_precedes_both_branches() {
    let fork_point = Ordinal::new(0).next();
    let (new, old) = fork_point.next_new_old_pair();
    assert!(fork_point < new);
    assert!(fork_point < old);
}

#[test]
fn new_branch_sorts_entirely_before_the_old_branch() {
    let (new, old) = Ordinal::new(0).next().next_new_old_pair();
    assert_eq!(new.to_vec(), vec![0, 1, 0]);
    assert_eq!(old.to_vec(), vec![0, 2]);

    // Walk both branches a while, forking again along the way; every
    // descendant of `new` stays below every descendant of `old`.
    let mut new_side = vec![new.clone()];
    let mut cursor = new;
    for step in 0..20 {
        cursor = if step % 5 == 0 {
            cursor.next_new_old_pair().1
        } else {
            cursor.next()
        };
        new_side.push(cursor.clone());
    }

    let mut old_side = vec![old.clone()];
    let mut cursor = old;
    for _ in 0..20 {
        cursor = cursor.next();
        old_side.push(cursor.clone());
    }

    for below in &new_side {
        for above in &old_side {
            assert!(below < above, "{below} should sort before {above}");
        }
    }
}

#[test]
fn a_prefix_tie_goes_to_the_shallower_ordinal() {
    let shallow = Ordinal::new(0);
    let (deep, _) = shallow.next_new_old_pair();
    assert_eq!(shallow.to_vec(), vec![0, 0]);
    assert_eq!(deep.to_vec(), vec![0, 0, 0]);
    assert!(shallow < deep);
}

#[test]
fn equal_ordinals_hash_identically() {
    let a = Ordinal::new(0).next();
    let b = Ordinal::new(0).next();
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(Ordinal::new(0));
    assert_eq!(set.len(), 2);
}

#[test]
fn display_joins_stamps_with_dots() {
    let (new, old) = Ordinal::new(7).next().next_new_old_pair();
    assert_eq!(new.to_string(), "7.1.0");
    assert_eq!(old.to_string(), "7.2");
}

#[test]
fn serialization_round_trips_and_preserves_order() {
    let (new, old) = Ordinal::new(0).next().next_new_old_pair();

    let new_bytes = bincode::serialize(&new).unwrap();
    let old_bytes = bincode::serialize(&old).unwrap();
    let new_back: Ordinal = bincode::deserialize(&new_bytes).unwrap();
    let old_back: Ordinal = bincode::deserialize(&old_bytes).unwrap();

    assert_eq!(new_back, new);
    assert_eq!(old_back, old);
    assert!(new_back < old_back);
}
