//! Wrappers that deliberately weaken a cursor's traversal tier.
//!
//! Useful to feed a strong source into code paths written for weaker cursors,
//! or to check how an adaptor behaves when one of its inputs can only move
//! forward.

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor},
};

/// Exposes only forward traversal of the wrapped cursor.
#[derive(Debug, Clone)]
pub struct ForwardOnly<C>(C);

impl<C: Cursor> ForwardOnly<C> {
    pub fn new(inner: C) -> Self {
        ForwardOnly(inner)
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C: Cursor> Cursor for ForwardOnly<C> {
    type Item = C::Item;

    const TIER: Tier = C::TIER.min(Tier::Forward);

    #[inline]
    fn current(&self) -> C::Item {
        self.0.current()
    }

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

/// Exposes at most bidirectional traversal of the wrapped cursor.
#[derive(Debug, Clone)]
pub struct BidirectionalOnly<C>(C);

impl<C: BidirectionalCursor> BidirectionalOnly<C> {
    pub fn new(inner: C) -> Self {
        BidirectionalOnly(inner)
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C: BidirectionalCursor> Cursor for BidirectionalOnly<C> {
    type Item = C::Item;

    const TIER: Tier = Tier::composite(&[C::TIER], Tier::Bidirectional);

    #[inline]
    fn current(&self) -> C::Item {
        self.0.current()
    }

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for BidirectionalOnly<C> {
    #[inline]
    fn retreat(&mut self) {
        self.0.retreat();
    }
}
