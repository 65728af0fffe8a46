//! Delimiter interleaving ("join").
//!
//! [`Join`] yields the source elements with a separator between consecutive
//! elements and none after the last one: `[1, 2, 3]` joined with `0` is
//! `[1, 0, 2, 0, 3]`. A source of `n > 0` elements yields `2n - 1` items, an
//! empty source yields nothing.
//!
//! A cursor is a source position plus a turn flag. On an element turn it yields
//! the source element; on a separator turn it yields the separator that
//! precedes the source element. The logical index of `(i, Element)` is `2i`, the
//! logical index of `(i, Separator)` is `2i - 1`. The end sentinel of a
//! non-empty source is `(n, Separator)`, at logical index `2n - 1`, which is
//! exactly where a cursor lands after stepping past the last element; this is
//! how the trailing separator is suppressed.
//!
//! Interleaving adds no scanning, so the cursor has the tier of its source.

use std::fmt;

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor},
    view::View,
};

/// Interleaves `separator` between the elements of `source`.
pub fn join<I>(source: I, separator: <I::Cursor as Cursor>::Item) -> Join<I::Cursor>
where
    I: IntoCursors,
    <I::Cursor as Cursor>::Item: Clone,
{
    let (begin, end) = source.into_cursors();
    Join::new(begin, end, separator)
}

/// Renders each element of `source` through `Display` and interleaves the
/// string `separator`. The items are owned `String`s.
pub fn join_display<I>(source: I, separator: impl Into<String>) -> Join<DisplayCursor<I::Cursor>>
where
    I: IntoCursors,
    <I::Cursor as Cursor>::Item: fmt::Display,
{
    let (begin, end) = source.into_cursors();
    Join::new(
        DisplayCursor::new(begin),
        DisplayCursor::new(end),
        separator.into(),
    )
}

/// Whether a [`JoinCursor`] points at a source element or at the separator
/// preceding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// On a source element.
    Element,
    /// On the separator emitted before the source element.
    Separator,
}

impl Turn {
    /// Offset of this turn from the element's logical index `2i`.
    #[inline]
    fn phase(self) -> isize {
        match self {
            Turn::Element => 0,
            Turn::Separator => -1,
        }
    }
}

/// Interleaving adaptor. See the [module documentation](self).
pub struct Join<C: Cursor> {
    begin: C,
    end: C,
    separator: C::Item,
}

impl<C> Join<C>
where
    C: Cursor,
    C::Item: Clone,
{
    /// Builds the adaptor over `[begin, end)`, emitting `separator` between
    /// consecutive elements.
    pub fn new(begin: C, end: C, separator: C::Item) -> Self {
        Join {
            begin,
            end,
            separator,
        }
    }

    /// Cursor on the first source element.
    pub fn begin(&self) -> JoinCursor<C> {
        JoinCursor {
            inner: self.begin.clone(),
            separator: self.separator.clone(),
            turn: Turn::Element,
        }
    }

    /// The end sentinel.
    ///
    /// Sits on the source end in the separator turn, so that no separator
    /// follows the last element. An empty source ends in the element turn and
    /// `begin() == end()`.
    pub fn end(&self) -> JoinCursor<C> {
        let turn = if self.begin.equals(&self.end) {
            Turn::Element
        } else {
            Turn::Separator
        };
        JoinCursor {
            inner: self.end.clone(),
            separator: self.separator.clone(),
            turn,
        }
    }

    /// The interleaved sequence as a std iterator.
    pub fn iter(&self) -> View<JoinCursor<C>> {
        View::new(self.begin(), self.end())
    }

    /// The element emitted between source elements.
    pub fn separator(&self) -> &C::Item {
        &self.separator
    }

    /// Traversal tier, the tier of the source.
    pub fn tier(&self) -> Tier {
        C::TIER
    }
}

impl<C> IntoCursors for Join<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Cursor = JoinCursor<C>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<C> IntoIterator for Join<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;
    type IntoIter = View<JoinCursor<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> fmt::Display for Join<C>
where
    C: Cursor,
    C::Item: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Cursor of a [`Join`].
#[derive(Debug, Clone)]
pub struct JoinCursor<C: Cursor> {
    inner: C,
    separator: C::Item,
    turn: Turn,
}

impl<C: Cursor> JoinCursor<C> {
    /// Whether the cursor is on an element or on a separator.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Splits a logical offset relative to this cursor's element index into a
    /// source offset and the resulting turn.
    #[inline]
    fn decode(&self, offset: isize) -> (isize, Turn) {
        let target = self.turn.phase() + offset;
        let elements = (target + 1).div_euclid(2);
        let turn = if target - 2 * elements == 0 {
            Turn::Element
        } else {
            Turn::Separator
        };
        (elements, turn)
    }
}

impl<C> Cursor for JoinCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    const TIER: Tier = C::TIER;

    #[inline]
    fn current(&self) -> C::Item {
        match self.turn {
            Turn::Element => self.inner.current(),
            Turn::Separator => self.separator.clone(),
        }
    }

    #[inline]
    fn advance(&mut self) {
        match self.turn {
            Turn::Element => {
                self.inner.advance();
                self.turn = Turn::Separator;
            }
            Turn::Separator => self.turn = Turn::Element,
        }
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.turn == other.turn && self.inner.equals(&other.inner)
    }

    fn measured_distance(&self, other: &Self) -> Option<usize> {
        let elements = self.inner.measured_distance(&other.inner)? as isize;
        usize::try_from(2 * elements + other.turn.phase() - self.turn.phase()).ok()
    }

    fn advance_n(&mut self, n: usize) {
        let (elements, turn) = self.decode(n as isize);
        self.inner.advance_n(elements as usize);
        self.turn = turn;
    }
}

impl<C> BidirectionalCursor for JoinCursor<C>
where
    C: BidirectionalCursor,
    C::Item: Clone,
{
    #[inline]
    fn retreat(&mut self) {
        match self.turn {
            Turn::Element => self.turn = Turn::Separator,
            Turn::Separator => {
                self.inner.retreat();
                self.turn = Turn::Element;
            }
        }
    }
}

impl<C> RandomAccessCursor for JoinCursor<C>
where
    C: RandomAccessCursor,
    C::Item: Clone,
{
    fn advance_by(&mut self, offset: isize) {
        let (elements, turn) = self.decode(offset);
        self.inner.advance_by(elements);
        self.turn = turn;
    }

    /// `2 * (source distance) + (phase difference)`; between `begin` and `end`
    /// of a non-empty source this is `2n - 1`.
    fn distance_to(&self, other: &Self) -> isize {
        2 * self.inner.distance_to(&other.inner) + other.turn.phase() - self.turn.phase()
    }
}

/// Cursor that renders the elements of its source through `Display`.
#[derive(Debug, Clone)]
pub struct DisplayCursor<C>(C);

impl<C: Cursor> DisplayCursor<C> {
    /// Wraps a cursor whose items implement `Display`.
    pub fn new(inner: C) -> Self {
        DisplayCursor(inner)
    }
}

impl<C> Cursor for DisplayCursor<C>
where
    C: Cursor,
    C::Item: fmt::Display,
{
    type Item = String;

    const TIER: Tier = C::TIER;

    fn current(&self) -> String {
        self.0.current().to_string()
    }

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }

    fn measured_distance(&self, other: &Self) -> Option<usize> {
        self.0.measured_distance(&other.0)
    }

    fn advance_n(&mut self, n: usize) {
        self.0.advance_n(n);
    }
}

impl<C> BidirectionalCursor for DisplayCursor<C>
where
    C: BidirectionalCursor,
    C::Item: fmt::Display,
{
    #[inline]
    fn retreat(&mut self) {
        self.0.retreat();
    }
}

impl<C> RandomAccessCursor for DisplayCursor<C>
where
    C: RandomAccessCursor,
    C::Item: fmt::Display,
{
    fn advance_by(&mut self, offset: isize) {
        self.0.advance_by(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.0.distance_to(&other.0)
    }
}
