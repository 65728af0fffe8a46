//! Cursors over caller-owned sequences.
//!
//! These are the leaves that adaptors are built on. None of them own the
//! elements they traverse: a [`SliceCursor`] borrows a slice, a [`CharCursor`]
//! borrows a string slice, and an [`IterCursor`] holds a clone of an iterator
//! that itself borrows or generates its data.

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor},
    view::View,
};

/// Random-access cursor over a borrowed slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= slice.len());
        SliceCursor { slice, pos }
    }

    /// Returns the `(begin, end)` pair covering the whole slice.
    pub fn pair(slice: &'a [T]) -> (Self, Self) {
        (Self::new(slice, 0), Self::new(slice, slice.len()))
    }

    /// Index of the cursor within its slice.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    const TIER: Tier = Tier::RandomAccess;

    #[inline]
    fn current(&self) -> &'a T {
        &self.slice[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.slice, other.slice));
        self.pos == other.pos
    }

    fn measured_distance(&self, other: &Self) -> Option<usize> {
        other.pos.checked_sub(self.pos)
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.pos = self
            .pos
            .checked_sub(1)
            .unwrap_or_else(|| panic!("cannot retreat a slice cursor before position 0"));
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    fn advance_by(&mut self, offset: isize) {
        self.pos = self.pos.checked_add_signed(offset).unwrap_or_else(|| {
            panic!(
                "cannot move slice cursor at position {} by {}",
                self.pos, offset
            )
        });
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl<'a, T> IntoCursors for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        SliceCursor::pair(self)
    }
}

impl<'a, T> IntoCursors for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        SliceCursor::pair(self.as_slice())
    }
}

impl<'a, T, const N: usize> IntoCursors for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        SliceCursor::pair(self.as_slice())
    }
}

/// Bidirectional cursor over the `char`s of a string slice.
///
/// Positions are byte offsets on character boundaries, so the cursor can step in
/// both directions but cannot jump by a character count in constant time.
#[derive(Debug, Clone, Copy)]
pub struct CharCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> CharCursor<'a> {
    pub fn pair(text: &'a str) -> (Self, Self) {
        (
            CharCursor { text, pos: 0 },
            CharCursor {
                text,
                pos: text.len(),
            },
        )
    }

    /// Byte offset of the cursor within its string.
    pub fn byte_offset(&self) -> usize {
        self.pos
    }
}

impl Cursor for CharCursor<'_> {
    type Item = char;

    const TIER: Tier = Tier::Bidirectional;

    fn current(&self) -> char {
        self.text[self.pos..]
            .chars()
            .next()
            .unwrap_or_else(|| panic!("char cursor dereferenced at the end of the string"))
    }

    fn advance(&mut self) {
        self.pos += self.current().len_utf8();
    }

    fn equals(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl BidirectionalCursor for CharCursor<'_> {
    fn retreat(&mut self) {
        let prev = self.text[..self.pos]
            .chars()
            .next_back()
            .unwrap_or_else(|| panic!("cannot retreat a char cursor before the start"));
        self.pos -= prev.len_utf8();
    }
}

impl<'a> IntoCursors for &'a str {
    type Cursor = CharCursor<'a>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        CharCursor::pair(self)
    }
}

/// Forward cursor over a cloneable iterator.
///
/// The cursor buffers the element it points at. Equality compares the number of
/// elements consumed, except that every exhausted cursor equals the sentinel,
/// whose length is not known up front.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    rest: I,
    head: Option<I::Item>,
    index: usize,
}

impl<I> IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    pub fn pair(iter: I) -> (Self, Self) {
        let mut rest = iter.clone();
        let head = rest.next();
        let begin = IterCursor {
            rest,
            head,
            index: 0,
        };
        let end = IterCursor {
            rest: iter,
            head: None,
            index: usize::MAX,
        };
        (begin, end)
    }

    fn is_exhausted(&self) -> bool {
        self.head.is_none()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    const TIER: Tier = Tier::Forward;

    fn current(&self) -> I::Item {
        match &self.head {
            Some(item) => item.clone(),
            None => panic!("iterator cursor dereferenced past the end"),
        }
    }

    fn advance(&mut self) {
        if self.head.is_some() {
            self.head = self.rest.next();
            self.index += 1;
        }
    }

    fn equals(&self, other: &Self) -> bool {
        match (self.is_exhausted(), other.is_exhausted()) {
            (true, true) => true,
            (false, false) => self.index == other.index,
            _ => false,
        }
    }
}

/// Wraps a cloneable iterator as a forward-only sequence.
pub fn forward<I>(iter: I) -> View<IterCursor<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    let (begin, end) = IterCursor::pair(iter.into_iter());
    View::new(begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_cursor_arithmetic() {
        let data = [10, 20, 30, 40];
        let (mut begin, end) = (&data).into_cursors();
        assert_eq!(begin.distance_to(&end), 4);
        assert_eq!(end.distance_to(&begin), -4);
        assert_eq!(begin.measured_distance(&end), Some(4));
        assert_eq!(end.measured_distance(&begin), None);
        assert!(begin.precedes(&end));

        begin.advance_by(3);
        assert_eq!(*begin.current(), 40);
        begin.retreat();
        assert_eq!(*begin.current(), 30);
        begin.advance_by(-2);
        assert_eq!(*begin.current(), 10);
    }

    #[test]
    #[should_panic(expected = "cannot retreat a slice cursor before position 0")]
    fn test_slice_cursor_retreat_before_start() {
        let data = [1];
        let (mut begin, _) = (&data).into_cursors();
        begin.retreat();
    }

    #[test]
    fn test_char_cursor_multibyte() {
        let text = "añb€";
        let (mut cursor, end) = text.into_cursors();
        let mut seen = Vec::new();
        while !cursor.equals(&end) {
            seen.push(cursor.current());
            cursor.advance();
        }
        assert_eq!(seen, vec!['a', 'ñ', 'b', '€']);
        cursor.retreat();
        assert_eq!(cursor.current(), '€');
        cursor.retreat();
        cursor.retreat();
        assert_eq!(cursor.current(), 'ñ');
        assert_eq!(cursor.byte_offset(), 1);
    }

    #[test]
    fn test_iter_cursor_sentinel() {
        let (mut cursor, end) = IterCursor::pair(1..4);
        assert!(!cursor.equals(&end));
        assert_eq!(cursor.steps_to(&end), 3);
        let snapshot = cursor.clone();
        cursor.advance();
        assert!(!cursor.equals(&snapshot));
        cursor.advance_n(2);
        assert!(cursor.equals(&end));
        assert!(end.equals(&cursor));

        let (begin, end) = IterCursor::pair(std::iter::empty::<u8>());
        assert!(begin.equals(&end));
    }
}
