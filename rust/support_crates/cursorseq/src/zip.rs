//! Lockstep traversal of several sequences ("zip").
//!
//! [`Zip`] walks one to eight sources together and yields a tuple of their
//! elements. The zipped sequence is as long as its shortest source; the end
//! sentinel is normalized to exactly that position, so a cursor advanced from
//! `begin` compares equal to `end` once the shortest source is exhausted.
//!
//! Composite arithmetic follows the members:
//!
//! - equality is the conjunction of member equality,
//! - `distance_to` is the minimum member distance,
//! - `precedes` holds when any member lies behind its counterpart,
//! - the tier is the weakest member tier.

use std::cell::OnceCell;

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor},
    tuple::{BidirectionalTuple, CursorTuple, IntoCursorTuple, RandomAccessTuple},
    view::View,
};

/// Zips the sequences of a tuple, e.g. `zip((&a, &b))`.
pub fn zip<S: IntoCursorTuple>(sources: S) -> Zip<S::Cursors> {
    let (begin, end) = sources.into_cursor_tuples();
    Zip::new(begin, end)
}

/// Zip adaptor over a tuple of source cursor pairs.
pub struct Zip<T: CursorTuple> {
    begin: T,
    /// Raw source ends, before truncation to the common length.
    ends: T,
    sentinel: OnceCell<T>,
}

impl<T: CursorTuple> Zip<T> {
    /// Builds the adaptor from the begin cursors and the raw end cursors of
    /// its sources. The ends may differ in length; `end()` truncates them.
    pub fn new(begin: T, ends: T) -> Self {
        Zip {
            begin,
            ends,
            sentinel: OnceCell::new(),
        }
    }

    /// Cursor on the first tuple.
    pub fn begin(&self) -> ZipCursor<T> {
        ZipCursor {
            cursors: self.begin.clone(),
        }
    }

    /// The end sentinel: every member advanced by the length of the shortest
    /// source. Computed once per adaptor.
    pub fn end(&self) -> ZipCursor<T> {
        let cursors = self.sentinel.get_or_init(|| {
            let len = self.begin.common_len(&self.ends);
            log::trace!("zip: sources truncated to common length {len}");
            let mut sentinel = self.begin.clone();
            sentinel.advance_all_n(len);
            sentinel
        });
        ZipCursor {
            cursors: cursors.clone(),
        }
    }

    /// The zipped tuples as a std iterator.
    pub fn iter(&self) -> View<ZipCursor<T>> {
        View::new(self.begin(), self.end())
    }

    /// Length of the zipped sequence, the minimum of the source lengths.
    pub fn len(&self) -> usize {
        self.begin.common_len(&self.ends)
    }

    /// Whether any source is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Traversal tier, the weakest tier among the sources.
    pub fn tier(&self) -> Tier {
        T::TIER
    }
}

impl<T: CursorTuple> IntoCursors for Zip<T> {
    type Cursor = ZipCursor<T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<T: CursorTuple> IntoIterator for Zip<T> {
    type Item = T::Items;
    type IntoIter = View<ZipCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor of a [`Zip`]: one position per source.
#[derive(Debug, Clone)]
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T: CursorTuple> ZipCursor<T> {
    /// Wraps one cursor per source. The cursors should be at the same index.
    pub fn new(cursors: T) -> Self {
        ZipCursor { cursors }
    }

    /// The member cursors, in source order.
    pub fn members(&self) -> &T {
        &self.cursors
    }
}

impl<T: CursorTuple> Cursor for ZipCursor<T> {
    type Item = T::Items;

    const TIER: Tier = T::TIER;

    #[inline]
    fn current(&self) -> T::Items {
        self.cursors.current_all()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursors.advance_all();
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.cursors.all_equal(&other.cursors)
    }

    fn measured_distance(&self, other: &Self) -> Option<usize> {
        self.cursors.min_measured_distance(&other.cursors)
    }

    fn advance_n(&mut self, n: usize) {
        self.cursors.advance_all_n(n);
    }
}

impl<T: BidirectionalTuple> BidirectionalCursor for ZipCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.cursors.retreat_all();
    }
}

impl<T: RandomAccessTuple> RandomAccessCursor for ZipCursor<T> {
    fn advance_by(&mut self, offset: isize) {
        self.cursors.advance_all_by(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.cursors.min_distance(&other.cursors)
    }

    fn precedes(&self, other: &Self) -> bool {
        self.cursors.any_precedes(&other.cursors)
    }
}
