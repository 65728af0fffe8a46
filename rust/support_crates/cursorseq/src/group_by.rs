//! Adjacency-based grouping of a sequence into runs sharing a derived key.
//!
//! The source is expected to be ordered by the key under the supplied
//! comparator (a strict weak ordering, expressed as a function returning
//! [`Ordering`]). Each element of the grouped sequence is a [`Group`]: the key of
//! a maximal run of equivalent elements and a [`View`] over that run.
//!
//! Run boundaries are found by scanning, forward from the run start on
//! `advance` and backward from it on `retreat`. Nothing is cached between
//! cursors, so several cursors can be live at different runs. Because
//! boundaries cannot be located by offset arithmetic, a group cursor is at most
//! bidirectional.
//!
//! If the source is not ordered by the key, equal keys that are not adjacent
//! produce separate groups. This is a precondition, checked only on request by
//! [`GroupBy::is_ordered`].

use std::{cmp::Ordering, rc::Rc};

use rayon::prelude::*;

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors},
    execution::Execution,
    view::View,
};

/// Comparator type used by [`group_by`] and [`group_by_descending`].
pub type KeyOrder<K> = fn(&K, &K) -> Ordering;

/// Groups a sequence sorted in ascending key order.
pub fn group_by<I, F, K>(source: I, key: F) -> GroupBy<I::Cursor, F, KeyOrder<K>>
where
    I: IntoCursors,
    F: Fn(&<I::Cursor as Cursor>::Item) -> K,
    K: Ord,
{
    group_by_with(source, key, K::cmp as KeyOrder<K>)
}

/// Groups a sequence sorted in descending key order.
pub fn group_by_descending<I, F, K>(source: I, key: F) -> GroupBy<I::Cursor, F, KeyOrder<K>>
where
    I: IntoCursors,
    F: Fn(&<I::Cursor as Cursor>::Item) -> K,
    K: Ord,
{
    group_by_with(source, key, (|a: &K, b: &K| b.cmp(a)) as KeyOrder<K>)
}

/// Groups a sequence ordered by `key` under the comparator `order`.
pub fn group_by_with<I, F, O, K>(source: I, key: F, order: O) -> GroupBy<I::Cursor, F, O>
where
    I: IntoCursors,
    F: Fn(&<I::Cursor as Cursor>::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    let (begin, end) = source.into_cursors();
    GroupBy::new(begin, end, key, order)
}

/// One run of the grouped sequence.
#[derive(Debug, Clone)]
pub struct Group<K, C> {
    pub key: K,
    pub items: View<C>,
}

impl<K, C> Group<K, C> {
    pub fn into_parts(self) -> (K, View<C>) {
        (self.key, self.items)
    }
}

/// A group is traversed as its run of source elements.
impl<K, C: Cursor> IntoCursors for Group<K, C> {
    type Cursor = C;

    fn into_cursors(self) -> (C, C) {
        self.items.into_parts()
    }
}

struct Grouping<F, O> {
    key: F,
    order: O,
}

impl<F, O> Grouping<F, O> {
    fn key_of<T, K>(&self, item: &T) -> K
    where
        F: Fn(&T) -> K,
    {
        (self.key)(item)
    }

    fn equivalent<K>(&self, a: &K, b: &K) -> bool
    where
        O: Fn(&K, &K) -> Ordering,
    {
        (self.order)(a, b) == Ordering::Equal
    }
}

/// Grouping adaptor. See the [module documentation](self).
pub struct GroupBy<C, F, O> {
    begin: C,
    end: C,
    grouping: Rc<Grouping<F, O>>,
}

impl<C, F, O, K> GroupBy<C, F, O>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    pub fn new(begin: C, end: C, key: F, order: O) -> Self {
        GroupBy {
            begin,
            end,
            grouping: Rc::new(Grouping { key, order }),
        }
    }

    pub fn begin(&self) -> GroupCursor<C, F, O> {
        GroupCursor::new(
            self.begin.clone(),
            self.begin.clone(),
            self.end.clone(),
            Rc::clone(&self.grouping),
        )
    }

    pub fn end(&self) -> GroupCursor<C, F, O> {
        GroupCursor {
            start: self.end.clone(),
            stop: self.end.clone(),
            first: self.begin.clone(),
            end: self.end.clone(),
            grouping: Rc::clone(&self.grouping),
        }
    }

    pub fn iter(&self) -> View<GroupCursor<C, F, O>> {
        View::new(self.begin(), self.end())
    }

    pub fn tier(&self) -> Tier {
        <GroupCursor<C, F, O> as Cursor>::TIER
    }

    /// Checks the ordering precondition: no element's key orders after the key
    /// of the element following it.
    pub fn is_ordered(&self) -> bool {
        if self.begin.equals(&self.end) {
            return true;
        }
        let mut cursor = self.begin.clone();
        let mut prev = self.grouping.key_of(&cursor.current());
        cursor.advance();
        let mut index = 1usize;
        while !cursor.equals(&self.end) {
            let key = self.grouping.key_of(&cursor.current());
            if (self.grouping.order)(&prev, &key) == Ordering::Greater {
                log::trace!("group_by: key at position {index} is out of order");
                return false;
            }
            prev = key;
            cursor.advance();
            index += 1;
        }
        true
    }
}

impl<C, F, O, K> GroupBy<C, F, O>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering + Sync,
    K: Send + Sync,
{
    /// [`is_ordered`](Self::is_ordered) with an execution hint. Keys are
    /// extracted sequentially; with [`Execution::Parallel`] the pairwise
    /// comparisons run on the rayon pool.
    pub fn is_ordered_with(&self, execution: Execution) -> bool {
        if !execution.is_parallel() {
            return self.is_ordered();
        }
        let keys: Vec<K> = View::new(self.begin.clone(), self.end.clone())
            .map(|item| self.grouping.key_of(&item))
            .collect();
        let order = &self.grouping.order;
        let ordered = keys
            .par_windows(2)
            .all(|pair| order(&pair[0], &pair[1]) != Ordering::Greater);
        if !ordered {
            log::trace!("group_by: {} keys are not ordered", keys.len());
        }
        ordered
    }
}

impl<C, F, O, K> IntoCursors for GroupBy<C, F, O>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    type Cursor = GroupCursor<C, F, O>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<C, F, O, K> IntoIterator for GroupBy<C, F, O>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    type Item = Group<K, C>;
    type IntoIter = View<GroupCursor<C, F, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor of a [`GroupBy`], positioned on the run `[start, stop)`.
pub struct GroupCursor<C, F, O> {
    start: C,
    stop: C,
    /// Source begin, the lower bound of backward scans.
    first: C,
    end: C,
    grouping: Rc<Grouping<F, O>>,
}

impl<C: Clone, F, O> Clone for GroupCursor<C, F, O> {
    fn clone(&self) -> Self {
        GroupCursor {
            start: self.start.clone(),
            stop: self.stop.clone(),
            first: self.first.clone(),
            end: self.end.clone(),
            grouping: Rc::clone(&self.grouping),
        }
    }
}

impl<C, F, O, K> GroupCursor<C, F, O>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    fn new(start: C, first: C, end: C, grouping: Rc<Grouping<F, O>>) -> Self {
        let stop = Self::scan_forward(&start, &end, &grouping);
        GroupCursor {
            start,
            stop,
            first,
            end,
            grouping,
        }
    }

    /// End of the run beginning at `start`.
    fn scan_forward(start: &C, end: &C, grouping: &Grouping<F, O>) -> C {
        let mut cursor = start.clone();
        if cursor.equals(end) {
            return cursor;
        }
        let key = grouping.key_of(&cursor.current());
        cursor.advance();
        while !cursor.equals(end) {
            if !grouping.equivalent(&key, &grouping.key_of(&cursor.current())) {
                break;
            }
            cursor.advance();
        }
        cursor
    }
}

impl<C, F, O, K> GroupCursor<C, F, O>
where
    C: BidirectionalCursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    /// Start of the run that ends at `stop`.
    fn scan_backward(stop: &C, first: &C, grouping: &Grouping<F, O>) -> C {
        let mut cursor = stop.clone();
        cursor.retreat();
        let key = grouping.key_of(&cursor.current());
        while !cursor.equals(first) {
            let mut prev = cursor.clone();
            prev.retreat();
            if !grouping.equivalent(&key, &grouping.key_of(&prev.current())) {
                break;
            }
            cursor = prev;
        }
        cursor
    }
}

impl<C, F, O, K> Cursor for GroupCursor<C, F, O>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    type Item = Group<K, C>;

    const TIER: Tier = Tier::composite(&[C::TIER], Tier::Bidirectional);

    fn current(&self) -> Group<K, C> {
        Group {
            key: self.grouping.key_of(&self.start.current()),
            items: View::new(self.start.clone(), self.stop.clone()),
        }
    }

    fn advance(&mut self) {
        self.start = self.stop.clone();
        self.stop = Self::scan_forward(&self.start, &self.end, &self.grouping);
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.start.equals(&other.start)
    }
}

impl<C, F, O, K> BidirectionalCursor for GroupCursor<C, F, O>
where
    C: BidirectionalCursor,
    F: Fn(&C::Item) -> K,
    O: Fn(&K, &K) -> Ordering,
{
    fn retreat(&mut self) {
        self.stop = self.start.clone();
        self.start = Self::scan_backward(&self.stop, &self.first, &self.grouping);
    }
}
