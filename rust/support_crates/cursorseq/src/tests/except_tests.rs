use std::collections::HashSet;

use crate::{Cursor, ExceptStrategy, Execution, SequenceExt, Tier, except, forward};

fn run(primary: &[i32], secondary: &[i32]) -> (Vec<i32>, Option<ExceptStrategy>) {
    let excluded = except(primary, secondary);
    let items = excluded.iter().copied().collect();
    (items, excluded.strategy())
}

#[test]
fn test_except_sorted_secondary_uses_merge() {
    let (items, strategy) = run(&[1, 2, 3, 4, 5], &[2, 4]);
    assert_eq!(items, [1, 3, 5]);
    assert_eq!(strategy, Some(ExceptStrategy::Merge));
}

#[test]
fn test_except_unsorted_secondary_uses_lookup() {
    let (items, strategy) = run(&[1, 2, 3, 4, 5], &[4, 2]);
    assert_eq!(items, [1, 3, 5]);
    assert_eq!(strategy, Some(ExceptStrategy::Lookup));
}

#[test]
fn test_except_strategy_selected_once() {
    let primary = [5, 1, 4];
    let secondary = [4, 1];
    let excluded = except(&primary, &secondary);
    assert_eq!(excluded.strategy(), None);
    assert_eq!(excluded.tier(), Tier::Forward);

    let first = excluded.begin();
    assert_eq!(excluded.strategy(), Some(ExceptStrategy::Lookup));
    let second = excluded.begin();
    assert!(first.equals(&second));
    assert_eq!(excluded.strategy(), Some(ExceptStrategy::Lookup));

    // Preparing after the fact does not replace the selected strategy.
    assert_eq!(
        excluded.prepare_with(Execution::Parallel),
        ExceptStrategy::Lookup
    );
    assert_eq!(excluded.iter().copied().collect::<Vec<_>>(), [5]);
}

#[test]
fn test_except_begin_skips_excluded_prefix() {
    let (items, _) = run(&[1, 1, 2, 3], &[1, 2]);
    assert_eq!(items, [3]);
    let (items, _) = run(&[1, 2], &[1, 2]);
    assert!(items.is_empty());

    let primary = [1, 2];
    let secondary = [1, 2];
    let excluded = except(&primary, &secondary);
    assert!(excluded.begin().equals(&excluded.end()));
}

#[test]
fn test_except_empty_inputs() {
    let (items, strategy) = run(&[3, 1, 2], &[]);
    assert_eq!(items, [3, 1, 2]);
    assert_eq!(strategy, Some(ExceptStrategy::Merge));

    let (items, _) = run(&[], &[1, 2]);
    assert!(items.is_empty());
}

#[test]
fn test_except_duplicates_excluded_as_set() {
    let (items, _) = run(&[1, 2, 2, 3, 2, 4], &[2]);
    assert_eq!(items, [1, 3, 4]);
    let (items, _) = run(&[1, 2, 2, 3, 2, 4], &[2, 2, 2, 2]);
    assert_eq!(items, [1, 3, 4]);
    let (items, _) = run(&[7, 7, 8], &[9]);
    assert_eq!(items, [7, 7, 8]);
}

#[test]
fn test_except_merge_with_unsorted_primary() {
    let (items, strategy) = run(&[5, 3, 9, 1, 3, 7], &[1, 3, 7]);
    assert_eq!(strategy, Some(ExceptStrategy::Merge));
    assert_eq!(items, [5, 9]);
}

#[test]
fn test_except_independent_cursors() {
    let primary = [1, 2, 3, 4, 5, 6];
    let secondary = [2, 5];
    let excluded = except(&primary, &secondary);
    let mut a = excluded.begin();
    let mut b = a.clone();
    a.advance();
    a.advance();
    assert_eq!(*a.current(), 4);
    assert_eq!(*b.current(), 1);
    b.advance();
    assert_eq!(*b.current(), 3);
    b.advance();
    assert!(a.equals(&b));
}

#[test]
fn test_except_forward_sources() {
    let excluded = except(forward(1..=10), forward([9, 3, 6].into_iter()));
    assert_eq!(excluded.iter().collect::<Vec<_>>(), [1, 2, 4, 5, 7, 8, 10]);
    assert_eq!(excluded.strategy(), Some(ExceptStrategy::Lookup));

    let words = ["b", "a", "c", "a"];
    let excluded = (&words[..]).excepting(&["a"]);
    assert_eq!(excluded.iter().copied().collect::<Vec<_>>(), ["b", "c"]);
}

#[test]
fn test_except_prepare_with_parallel() {
    let primary: Vec<u64> = (0..1000).collect();
    let sorted: Vec<u64> = (0..1000).step_by(3).collect();
    let excluded = except(&primary, &sorted);
    assert_eq!(
        excluded.prepare_with(Execution::Parallel),
        ExceptStrategy::Merge
    );
    assert_eq!(excluded.iter().count(), 1000 - sorted.len());

    let unsorted: Vec<u64> = sorted.iter().rev().copied().collect();
    let excluded = except(&primary, &unsorted);
    assert_eq!(
        excluded.prepare_with(Execution::Parallel),
        ExceptStrategy::Lookup
    );
    assert!(excluded.iter().all(|x| x % 3 != 0));
}

#[test]
fn test_except_strategies_agree() {
    fastrand::seed(58120374);
    for _ in 0..300 {
        let primary: Vec<i32> = (0..fastrand::usize(0..60))
            .map(|_| fastrand::i32(0..30))
            .collect();
        let mut secondary: Vec<i32> = (0..fastrand::usize(0..20))
            .map(|_| fastrand::i32(0..30))
            .collect();
        let members: HashSet<i32> = secondary.iter().copied().collect();
        let expected: Vec<i32> = primary
            .iter()
            .copied()
            .filter(|x| !members.contains(x))
            .collect();

        let (lookup, _) = run(&primary, &secondary);
        assert_eq!(lookup, expected);

        secondary.sort_unstable();
        let (merge, strategy) = run(&primary, &secondary);
        assert_eq!(strategy, Some(ExceptStrategy::Merge));
        assert_eq!(merge, expected);

        let mut sorted_primary = primary.clone();
        sorted_primary.sort_unstable();
        let (merge, _) = run(&sorted_primary, &secondary);
        let mut sorted_expected = expected.clone();
        sorted_expected.sort_unstable();
        assert_eq!(merge, sorted_expected);
    }
}
