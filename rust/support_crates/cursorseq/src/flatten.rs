//! Concatenation of nested sequences ("flatten").
//!
//! [`Flatten`] walks an outer sequence whose elements are themselves sequences
//! (anything [`IntoCursors`]) and yields the inner elements in order, skipping
//! empty inner sequences. One application removes one level of nesting; a
//! deeper structure is flattened by applying the adaptor once per level, so the
//! depth is spelled out at the call site:
//!
//! ```
//! use cursorseq::flatten;
//!
//! let cube = vec![vec![vec![1, 2], vec![]], vec![vec![3]]];
//! let items: Vec<i32> = flatten(flatten(&cube)).into_iter().copied().collect();
//! assert_eq!(items, [1, 2, 3]);
//! ```
//!
//! The cursor is at most bidirectional: it is bidirectional when both the outer
//! and the inner cursors are, forward-only otherwise.

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors},
    view::View,
};

type InnerCursor<C> = <<C as Cursor>::Item as IntoCursors>::Cursor;

/// Concatenates the inner sequences of `source`.
pub fn flatten<I>(source: I) -> Flatten<I::Cursor>
where
    I: IntoCursors,
    <I::Cursor as Cursor>::Item: IntoCursors,
{
    let (begin, end) = source.into_cursors();
    Flatten::new(begin, end)
}

/// Flattening adaptor. See the [module documentation](self).
pub struct Flatten<C> {
    begin: C,
    end: C,
}

impl<C> Flatten<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    /// Builds the adaptor over the outer span `[begin, end)`.
    pub fn new(begin: C, end: C) -> Self {
        Flatten { begin, end }
    }

    /// Cursor on the first element of the first non-empty inner sequence.
    pub fn begin(&self) -> FlattenCursor<C> {
        let mut cursor = FlattenCursor {
            outer: self.begin.clone(),
            outer_end: self.end.clone(),
            inner: None,
        };
        cursor.settle_forward();
        cursor
    }

    /// The end sentinel, positioned on the outer end.
    pub fn end(&self) -> FlattenCursor<C> {
        FlattenCursor {
            outer: self.end.clone(),
            outer_end: self.end.clone(),
            inner: None,
        }
    }

    /// The inner elements as a std iterator.
    pub fn iter(&self) -> View<FlattenCursor<C>> {
        View::new(self.begin(), self.end())
    }

    /// Traversal tier: bidirectional when both levels are, forward otherwise.
    pub fn tier(&self) -> Tier {
        <FlattenCursor<C> as Cursor>::TIER
    }
}

impl<C> IntoCursors for Flatten<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    type Cursor = FlattenCursor<C>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<C> IntoIterator for Flatten<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    type Item = <InnerCursor<C> as Cursor>::Item;
    type IntoIter = View<FlattenCursor<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The inner sequence a [`FlattenCursor`] is positioned in.
#[derive(Debug, Clone)]
struct Inner<I> {
    first: I,
    pos: I,
    last: I,
}

/// Cursor of a [`Flatten`].
pub struct FlattenCursor<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    outer: C,
    outer_end: C,
    /// `None` exactly when `outer` is at `outer_end`; otherwise `pos` is on an
    /// element.
    inner: Option<Inner<InnerCursor<C>>>,
}

impl<C> Clone for FlattenCursor<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    fn clone(&self) -> Self {
        FlattenCursor {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<C> FlattenCursor<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    /// Moves `outer` forward to the first non-empty inner sequence, starting
    /// with the current one.
    fn settle_forward(&mut self) {
        while !self.outer.equals(&self.outer_end) {
            let (first, last) = self.outer.current().into_cursors();
            if !first.equals(&last) {
                self.inner = Some(Inner {
                    pos: first.clone(),
                    first,
                    last,
                });
                return;
            }
            self.outer.advance();
        }
        self.inner = None;
    }
}

impl<C> Cursor for FlattenCursor<C>
where
    C: Cursor,
    C::Item: IntoCursors,
{
    type Item = <InnerCursor<C> as Cursor>::Item;

    const TIER: Tier = Tier::composite(
        &[C::TIER, <InnerCursor<C> as Cursor>::TIER],
        Tier::Bidirectional,
    );

    fn current(&self) -> Self::Item {
        match &self.inner {
            Some(inner) => inner.pos.current(),
            None => panic!("flatten cursor dereferenced at the end"),
        }
    }

    fn advance(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        inner.pos.advance();
        if inner.pos.equals(&inner.last) {
            self.outer.advance();
            self.settle_forward();
        }
    }

    fn equals(&self, other: &Self) -> bool {
        if !self.outer.equals(&other.outer) {
            return false;
        }
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => a.pos.equals(&b.pos),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<C> BidirectionalCursor for FlattenCursor<C>
where
    C: BidirectionalCursor,
    C::Item: IntoCursors,
    InnerCursor<C>: BidirectionalCursor,
{
    fn retreat(&mut self) {
        if let Some(inner) = self.inner.as_mut()
            && !inner.pos.equals(&inner.first)
        {
            inner.pos.retreat();
            return;
        }
        loop {
            self.outer.retreat();
            let (first, last) = self.outer.current().into_cursors();
            if !first.equals(&last) {
                let mut pos = last.clone();
                pos.retreat();
                self.inner = Some(Inner { first, pos, last });
                return;
            }
        }
    }
}
