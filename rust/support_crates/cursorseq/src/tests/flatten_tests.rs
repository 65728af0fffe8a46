use crate::{
    BidirectionalCursor, Cursor, SequenceExt, Tier, chunks, flatten, forward, group_by, zip,
};

#[test]
fn test_flatten_skips_empty_inner() {
    let nested = vec![vec![1, 2], vec![], vec![3], vec![], vec![]];
    let flat = flatten(&nested);
    assert_eq!(flat.tier(), Tier::Bidirectional);
    let items: Vec<i32> = flat.iter().copied().collect();
    assert_eq!(items, [1, 2, 3]);
    let back: Vec<i32> = flat.iter().rev().copied().collect();
    assert_eq!(back, [3, 2, 1]);
}

#[test]
fn test_flatten_leading_empty_inner() {
    let nested = vec![vec![], vec![], vec![4, 5], vec![6]];
    let flat = flatten(&nested);
    assert_eq!(*flat.begin().current(), 4);
    let back: Vec<i32> = flat.iter().rev().copied().collect();
    assert_eq!(back, [6, 5, 4]);
}

#[test]
fn test_flatten_empty() {
    let all_empty: Vec<Vec<i32>> = vec![vec![], vec![]];
    let flat = flatten(&all_empty);
    assert!(flat.begin().equals(&flat.end()));
    assert_eq!(flat.iter().count(), 0);

    let no_outer: Vec<Vec<i32>> = Vec::new();
    let flat = flatten(&no_outer);
    assert!(flat.begin().equals(&flat.end()));
    assert_eq!(flat.iter().rev().count(), 0);
}

#[test]
fn test_flatten_two_levels() {
    let cube = vec![
        vec![vec![1, 2], vec![]],
        vec![],
        vec![vec![3], vec![4, 5]],
    ];
    let flat = flatten(flatten(&cube));
    assert_eq!(flat.tier(), Tier::Bidirectional);
    let items: Vec<i32> = flat.iter().copied().collect();
    assert_eq!(items, [1, 2, 3, 4, 5]);
    let back: Vec<i32> = flat.iter().rev().copied().collect();
    assert_eq!(back, [5, 4, 3, 2, 1]);
}

#[test]
fn test_flatten_forward_outer() {
    let nested = vec![vec![1], vec![2, 3]];
    let flat = flatten(forward(nested.iter()));
    assert_eq!(flat.tier(), Tier::Forward);
    let items: Vec<i32> = flat.into_iter().copied().collect();
    assert_eq!(items, [1, 2, 3]);
}

#[test]
fn test_flatten_strings() {
    let words = ["ab", "", "c", "dé"];
    let flat = flatten(forward(words.iter().copied()));
    assert_eq!(flat.tier(), Tier::Forward);
    let text: String = flat.into_iter().collect();
    assert_eq!(text, "abcdé");
}

#[test]
fn test_flatten_undoes_chunks() {
    let data: Vec<i32> = (1..=10).collect();
    let flat = flatten(chunks(&data, 3).unwrap());
    assert_eq!(flat.tier(), Tier::Bidirectional);
    let items: Vec<i32> = flat.iter().copied().collect();
    assert_eq!(items, data);
    let back: Vec<i32> = flat.iter().rev().copied().collect();
    assert_eq!(back, data.iter().rev().copied().collect::<Vec<_>>());
}

#[test]
fn test_flatten_undoes_group_by() {
    let data = [1, 2, 11, 12, 13, 30, 31, 40];
    let flat = flatten(group_by(&data, |x| **x / 10));
    assert_eq!(flat.tier(), Tier::Bidirectional);
    let items: Vec<i32> = flat.iter().copied().collect();
    assert_eq!(items, data);
    let back: Vec<i32> = flat.iter().rev().copied().collect();
    assert_eq!(back, [40, 31, 30, 13, 12, 11, 2, 1]);
}

#[test]
fn test_flatten_zipped() {
    let nested = vec![vec![1], vec![], vec![2, 3]];
    let letters = ['a', 'b', 'c', 'd'];
    let pairs: Vec<(i32, char)> = zip((flatten(&nested), &letters))
        .into_iter()
        .map(|(n, c)| (*n, *c))
        .collect();
    assert_eq!(pairs, [(1, 'a'), (2, 'b'), (3, 'c')]);
}

#[test]
fn test_flatten_cursor_walk() {
    let nested = vec![vec![1, 2], vec![], vec![3, 4]];
    let flat = (&nested).flattened();
    let mut cursor = flat.begin();
    cursor.advance();
    cursor.advance();
    assert_eq!(*cursor.current(), 3);
    cursor.retreat();
    assert_eq!(*cursor.current(), 2);
    cursor.advance();
    cursor.advance();
    assert_eq!(*cursor.current(), 4);

    let mut other = flat.begin();
    other.advance_n(3);
    assert!(cursor.equals(&other));
    cursor.advance();
    assert!(cursor.equals(&flat.end()));
    cursor.retreat();
    assert!(cursor.equals(&other));
    assert_eq!(flat.begin().steps_to(&flat.end()), 4);
}

#[test]
fn test_flatten_random_against_std() {
    fastrand::seed(7340521);
    for _ in 0..200 {
        let nested: Vec<Vec<u8>> = (0..fastrand::usize(0..12))
            .map(|_| {
                let len = if fastrand::bool() { 0 } else { fastrand::usize(1..6) };
                (0..len).map(|_| fastrand::u8(..)).collect()
            })
            .collect();
        let expected: Vec<u8> = nested.iter().flatten().copied().collect();
        let flat = flatten(&nested);
        let items: Vec<u8> = flat.iter().copied().collect();
        assert_eq!(items, expected);
        let mut back: Vec<u8> = flat.iter().rev().copied().collect();
        back.reverse();
        assert_eq!(back, expected);
    }
}
