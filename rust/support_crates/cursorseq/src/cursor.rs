//! The cursor contract shared by every source and adaptor.
//!
//! A cursor is a cheap-to-clone position within a sequence. Sequences are
//! described by a pair of cursors, `begin` and the end sentinel; traversal
//! advances a copy of `begin` until it [`equals`](Cursor::equals) the sentinel.
//!
//! Movement capabilities are layered as traits:
//!
//! - [`Cursor`]: dereference, `advance`, equality (forward traversal).
//! - [`BidirectionalCursor`]: adds `retreat`.
//! - [`RandomAccessCursor`]: adds constant-time offset arithmetic and distance.
//!
//! Each cursor type also states its [`Tier`] as an associated constant, so the
//! tier of a composite adaptor is known at compile time.
//!
//! # Preconditions
//!
//! Dereferencing the end sentinel, retreating before the first position, or
//! comparing cursors that come from different sequences are precondition
//! violations. They are not reported through `Result`; safe implementations
//! panic instead (for example by an out-of-bounds slice index). Checked
//! alternatives live on [`View`](crate::View).

use crate::capability::Tier;

/// A forward-traversable position within a sequence.
pub trait Cursor: Clone {
    /// The logical element produced by [`current`](Cursor::current).
    ///
    /// Source cursors over borrowed data yield references; adaptors that compute
    /// their elements yield owned values.
    type Item;

    /// Traversal capability of this cursor type.
    const TIER: Tier;

    /// Returns the element at the current position.
    ///
    /// # Panics
    ///
    /// May panic if the cursor is at the end sentinel.
    fn current(&self) -> Self::Item;

    /// Moves to the next position.
    fn advance(&mut self);

    /// Whether both cursors denote the same position.
    ///
    /// Only meaningful for cursors obtained from the same sequence.
    fn equals(&self, other: &Self) -> bool;

    /// Number of `advance` calls needed to reach `other`, if the cursor can tell
    /// without walking.
    ///
    /// Random-access cursors return `Some`; the default returns `None`.
    fn measured_distance(&self, _other: &Self) -> Option<usize> {
        None
    }

    /// Number of `advance` calls needed to reach `other`.
    ///
    /// Walks a copy of the cursor unless [`measured_distance`](Cursor::measured_distance)
    /// answers directly. `other` must be reachable from `self`.
    fn steps_to(&self, other: &Self) -> usize {
        if let Some(distance) = self.measured_distance(other) {
            return distance;
        }
        let mut walker = self.clone();
        let mut steps = 0;
        while !walker.equals(other) {
            walker.advance();
            steps += 1;
        }
        steps
    }

    /// Advances `n` positions.
    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

/// A cursor that can also move backwards.
pub trait BidirectionalCursor: Cursor {
    /// Moves to the previous position.
    fn retreat(&mut self);
}

/// A cursor supporting constant-time offset arithmetic.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves by `offset` positions (backwards when negative).
    fn advance_by(&mut self, offset: isize);

    /// Signed number of positions from `self` to `other`.
    ///
    /// Positive when `other` lies ahead of `self`.
    fn distance_to(&self, other: &Self) -> isize;

    /// Whether `self` lies strictly before `other`.
    fn precedes(&self, other: &Self) -> bool {
        self.distance_to(other) > 0
    }
}

/// Conversion into a `(begin, end)` cursor pair.
///
/// This is the entry point of every adaptor: slices, vectors, arrays, string
/// slices, [`View`](crate::View)s, raw cursor pairs and the adaptors themselves
/// all implement it, which is what makes adaptors composable.
pub trait IntoCursors {
    type Cursor: Cursor;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor);
}

impl<C: Cursor> IntoCursors for (C, C) {
    type Cursor = C;

    fn into_cursors(self) -> (C, C) {
        self
    }
}
