//! Positional exclusion: drops the elements whose index falls in a range.

use std::ops::Range;

use cursorseq_common::{Result, verify_arg};

use crate::{
    capability::Tier,
    cursor::{Cursor, IntoCursors},
    view::View,
};

/// Yields the elements of `source` whose index is outside `range`.
///
/// A range reaching past the end of the source is clamped to it. Fails with
/// `InvalidArgument` when `range.start > range.end`.
pub fn exclude<I>(source: I, range: Range<usize>) -> Result<Exclude<I::Cursor>>
where
    I: IntoCursors,
{
    verify_arg!(range, range.start <= range.end);
    let (begin, end) = source.into_cursors();
    Ok(Exclude { begin, end, range })
}

/// Positional exclusion adaptor, built by [`exclude`].
///
/// Forward-only: the source is walked and indices are counted along the way.
pub struct Exclude<C> {
    begin: C,
    end: C,
    range: Range<usize>,
}

impl<C: Cursor> Exclude<C> {
    /// Cursor on the first element outside the excluded range.
    pub fn begin(&self) -> ExcludeCursor<C> {
        let mut cursor = ExcludeCursor {
            inner: self.begin.clone(),
            end: self.end.clone(),
            index: 0,
            range: self.range.clone(),
        };
        cursor.skip_range();
        cursor
    }

    /// The end sentinel, on the source end.
    pub fn end(&self) -> ExcludeCursor<C> {
        ExcludeCursor {
            inner: self.end.clone(),
            end: self.end.clone(),
            index: usize::MAX,
            range: self.range.clone(),
        }
    }

    /// The kept elements as a std iterator.
    pub fn iter(&self) -> View<ExcludeCursor<C>> {
        View::new(self.begin(), self.end())
    }

    /// The excluded index range, as given.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Always [`Tier::Forward`].
    pub fn tier(&self) -> Tier {
        Tier::Forward
    }
}

impl<C: Cursor> IntoCursors for Exclude<C> {
    type Cursor = ExcludeCursor<C>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<C: Cursor> IntoIterator for Exclude<C> {
    type Item = C::Item;
    type IntoIter = View<ExcludeCursor<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor of an [`Exclude`]; `index` is the source index of `inner`.
#[derive(Debug, Clone)]
pub struct ExcludeCursor<C> {
    inner: C,
    end: C,
    index: usize,
    range: Range<usize>,
}

impl<C: Cursor> ExcludeCursor<C> {
    /// Source index of the current element.
    pub fn index(&self) -> usize {
        self.index
    }

    fn skip_range(&mut self) {
        if self.index != self.range.start {
            return;
        }
        while self.index < self.range.end && !self.inner.equals(&self.end) {
            self.inner.advance();
            self.index += 1;
        }
    }
}

impl<C: Cursor> Cursor for ExcludeCursor<C> {
    type Item = C::Item;

    const TIER: Tier = Tier::Forward;

    #[inline]
    fn current(&self) -> C::Item {
        self.inner.current()
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.index += 1;
        self.skip_range();
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.inner.equals(&other.inner)
    }
}
