use itertools::Itertools;

use crate::{
    BidirectionalCursor, Cursor, Execution, SequenceExt, Tier, forward, group_by,
    group_by_descending, group_by_with,
};

#[test]
fn test_group_by_length() {
    let words = ["a", "bb", "cc", "ddd"];
    let grouped = group_by(&words, |w| w.len());
    assert_eq!(grouped.tier(), Tier::Bidirectional);
    let groups: Vec<(usize, Vec<&str>)> = grouped
        .iter()
        .map(|group| (group.key, group.items.copied().collect()))
        .collect();
    assert_eq!(
        groups,
        [(1, vec!["a"]), (2, vec!["bb", "cc"]), (3, vec!["ddd"])]
    );
}

#[test]
fn test_group_by_reverse() {
    let data = [1, 1, 2, 3, 3, 3];
    let grouped = group_by(&data, |x| **x);
    let back: Vec<(i32, usize)> = grouped
        .iter()
        .rev()
        .map(|group| (group.key, group.items.count()))
        .collect();
    assert_eq!(back, [(3, 3), (2, 1), (1, 2)]);

    let mut cursor = grouped.end();
    cursor.retreat();
    cursor.retreat();
    assert_eq!(cursor.current().key, 2);
    cursor.retreat();
    assert!(cursor.equals(&grouped.begin()));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current().key, 3);
    cursor.advance();
    assert!(cursor.equals(&grouped.end()));
}

#[test]
fn test_group_by_live_cursors_are_independent() {
    let data = [1, 1, 2, 2, 2, 5];
    let grouped = group_by(&data, |x| **x);
    let first = grouped.begin();
    let mut second = first.clone();
    second.advance();
    assert_eq!(first.current().key, 1);
    assert_eq!(second.current().key, 2);
    assert_eq!(second.current().items.count(), 3);
    assert!(!first.equals(&second));
}

#[test]
fn test_group_by_empty_and_single() {
    let empty: [u8; 0] = [];
    let grouped = group_by(&empty, |x| **x);
    assert!(grouped.begin().equals(&grouped.end()));
    assert_eq!(grouped.iter().count(), 0);
    assert!(grouped.is_ordered());

    let single = [9u8];
    let groups: Vec<_> = group_by(&single, |x| **x).into_iter().collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, 9);
    assert_eq!(groups[0].items.clone().copied().collect::<Vec<_>>(), [9]);
}

#[test]
fn test_group_by_non_adjacent_keys_split() {
    let data = [1, 1, 2, 1];
    let grouped = group_by(&data, |x| **x);
    assert!(!grouped.is_ordered());
    let keys: Vec<i32> = grouped.iter().map(|group| group.key).collect();
    assert_eq!(keys, [1, 2, 1]);
}

#[test]
fn test_group_by_descending() {
    let data = [5, 5, 3, 1, 1];
    let grouped = group_by_descending(&data, |x| **x);
    assert!(grouped.is_ordered());
    let keys: Vec<i32> = grouped.iter().map(|group| group.key).collect();
    assert_eq!(keys, [5, 3, 1]);

    assert!(!group_by(&data, |x| **x).is_ordered());
    assert!(!(&data[..]).grouped_by_descending(|x| -**x).is_ordered());
}

#[test]
fn test_group_by_custom_order() {
    let grouped = group_by_with("aAbBBc", |c: &char| *c, |a: &char, b: &char| {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    });
    let groups: Vec<(char, String)> = grouped
        .iter()
        .map(|group| (group.key, group.items.collect()))
        .collect();
    assert_eq!(
        groups,
        [
            ('a', "aA".to_string()),
            ('b', "bBB".to_string()),
            ('c', "c".to_string())
        ]
    );
    assert_eq!(grouped.iter().rev().map(|group| group.key).collect::<String>(), "cba");
}

#[test]
fn test_group_by_forward_source() {
    let grouped = forward((0..20).map(|x| x / 7)).grouped_by(|x| *x);
    assert_eq!(grouped.tier(), Tier::Forward);
    let sizes: Vec<(i32, usize)> = grouped
        .iter()
        .map(|group| (group.key, group.items.count()))
        .collect();
    assert_eq!(sizes, [(0, 7), (1, 7), (2, 6)]);
}

#[test]
fn test_group_by_is_ordered_parallel() {
    let data: Vec<u32> = (0..5000).map(|x| x / 13).collect();
    let grouped = group_by(&data, |x| **x);
    assert!(grouped.is_ordered_with(Execution::Parallel));
    assert!(grouped.is_ordered_with(Execution::Sequential));

    let mut shuffled = data.clone();
    shuffled.swap(10, 4000);
    let grouped = group_by(&shuffled, |x| **x);
    assert!(!grouped.is_ordered_with(Execution::Parallel));
    assert!(!grouped.is_ordered());
}

#[test]
fn test_group_by_matches_chunk_by() {
    fastrand::seed(90217731);
    for _ in 0..200 {
        let mut data: Vec<u16> = (0..fastrand::usize(0..80))
            .map(|_| fastrand::u16(0..500))
            .collect();
        if fastrand::bool() {
            data.sort_unstable();
        }
        let key = |x: &u16| x / 50;

        let chunks = data.iter().chunk_by(|x| key(*x));
        let expected: Vec<(u16, Vec<u16>)> = (&chunks)
            .into_iter()
            .map(|(k, chunk)| (k, chunk.copied().collect()))
            .collect();

        let grouped = group_by(&data, |x| key(*x));
        let actual: Vec<(u16, Vec<u16>)> = grouped
            .iter()
            .map(|group| (group.key, group.items.copied().collect()))
            .collect();
        assert_eq!(actual, expected);

        let mut reversed: Vec<(u16, Vec<u16>)> = grouped
            .iter()
            .rev()
            .map(|group| (group.key, group.items.copied().collect()))
            .collect();
        reversed.reverse();
        assert_eq!(reversed, expected);
    }
}
