//! Method-call syntax for the adaptors.

use std::{cmp::Ordering, fmt, hash::Hash, ops::Range};

use cursorseq_common::Result;

use crate::{
    chunks::{Chunks, chunks},
    cursor::{Cursor, IntoCursors},
    except::{Except, except},
    exclude::{Exclude, exclude},
    flatten::{Flatten, flatten},
    group_by::{GroupBy, KeyOrder, group_by, group_by_descending, group_by_with},
    join::{DisplayCursor, Join, join, join_display},
    zip::{Zip, zip},
};

type ItemOf<S> = <<S as IntoCursors>::Cursor as Cursor>::Item;

/// Extension trait building adaptors from anything convertible into a cursor
/// pair, so that pipelines read left to right:
///
/// ```
/// use cursorseq::SequenceExt;
///
/// let words = ["a", "bb", "cc", "ddd"];
/// let lengths: Vec<usize> = words
///     .grouped_by(|w| w.len())
///     .into_iter()
///     .map(|group| group.key)
///     .collect();
/// assert_eq!(lengths, [1, 2, 3]);
/// ```
pub trait SequenceExt: IntoCursors + Sized {
    /// Lockstep traversal with `other`; see [`zip`].
    fn zipped_with<O: IntoCursors>(self, other: O) -> Zip<(Self::Cursor, O::Cursor)> {
        zip((self, other))
    }

    /// Elements not occurring in `secondary`; see [`except`].
    fn excepting<S>(self, secondary: S) -> Except<Self::Cursor, S::Cursor>
    where
        S: IntoCursors,
        S::Cursor: Cursor<Item = ItemOf<Self>>,
        ItemOf<Self>: Ord + Hash + Clone,
    {
        except(self, secondary)
    }

    /// Runs of an ascending key; see [`group_by`].
    fn grouped_by<F, K>(self, key: F) -> GroupBy<Self::Cursor, F, KeyOrder<K>>
    where
        F: Fn(&ItemOf<Self>) -> K,
        K: Ord,
    {
        group_by(self, key)
    }

    /// Runs of a descending key; see [`group_by_descending`].
    fn grouped_by_descending<F, K>(self, key: F) -> GroupBy<Self::Cursor, F, KeyOrder<K>>
    where
        F: Fn(&ItemOf<Self>) -> K,
        K: Ord,
    {
        group_by_descending(self, key)
    }

    /// Runs of a key ordered by `order`; see [`group_by_with`].
    fn grouped_by_with<F, O, K>(self, key: F, order: O) -> GroupBy<Self::Cursor, F, O>
    where
        F: Fn(&ItemOf<Self>) -> K,
        O: Fn(&K, &K) -> Ordering,
    {
        group_by_with(self, key, order)
    }

    /// `separator` between consecutive elements; see [`join`].
    fn joined_with(self, separator: ItemOf<Self>) -> Join<Self::Cursor>
    where
        ItemOf<Self>: Clone,
    {
        join(self, separator)
    }

    /// Elements rendered as strings, `separator` between them; see
    /// [`join_display`].
    fn joined_display(self, separator: impl Into<String>) -> Join<DisplayCursor<Self::Cursor>>
    where
        ItemOf<Self>: fmt::Display,
    {
        join_display(self, separator)
    }

    /// Elements whose index is outside `range`; see [`exclude`].
    fn excluding(self, range: Range<usize>) -> Result<Exclude<Self::Cursor>> {
        exclude(self, range)
    }

    /// Consecutive views of `size` elements; see [`chunks`].
    fn chunked(self, size: usize) -> Result<Chunks<Self::Cursor>> {
        chunks(self, size)
    }

    /// One level of nesting removed; see [`flatten`].
    fn flattened(self) -> Flatten<Self::Cursor>
    where
        ItemOf<Self>: IntoCursors,
    {
        flatten(self)
    }
}

impl<S: IntoCursors> SequenceExt for S {}
