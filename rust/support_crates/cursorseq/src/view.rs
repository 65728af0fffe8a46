//! A `(begin, end)` cursor pair usable as a standard iterator.

use cursorseq_common::{Error, Result};

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor},
    degrade::{BidirectionalOnly, ForwardOnly},
};

/// The half-open span `[begin, end)` of a sequence.
///
/// `View` is how collaborators consume adaptors: it implements [`Iterator`]
/// (plus [`DoubleEndedIterator`] for bidirectional cursors and
/// [`ExactSizeIterator`] for random-access ones), so a span can be drained with
/// `collect` or fed to any std iterator method. Iterating consumes the view's
/// own copies of the cursors; the underlying sequence is never touched.
#[derive(Debug, Clone)]
pub struct View<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> View<C> {
    pub fn new(begin: C, end: C) -> Self {
        View { begin, end }
    }

    pub fn begin(&self) -> C {
        self.begin.clone()
    }

    pub fn end(&self) -> C {
        self.end.clone()
    }

    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }

    /// Traversal tier of the underlying cursors.
    pub fn tier(&self) -> Tier {
        C::TIER
    }

    pub fn is_empty(&self) -> bool {
        self.begin.equals(&self.end)
    }

    /// Number of remaining elements.
    ///
    /// Constant time for random-access cursors, a walk otherwise.
    pub fn count_remaining(&self) -> usize {
        self.begin.steps_to(&self.end)
    }

    /// Checked dereference of the first element.
    pub fn try_first(&self) -> Result<C::Item> {
        if self.is_empty() {
            return Err(Error::end_of_sequence("View::try_first"));
        }
        Ok(self.begin.current())
    }

    /// Caps the traversal tier at forward-only.
    pub fn forward_only(self) -> View<ForwardOnly<C>> {
        View::new(ForwardOnly::new(self.begin), ForwardOnly::new(self.end))
    }
}

impl<C: BidirectionalCursor> View<C> {
    /// Checked dereference of the last element.
    pub fn try_last(&self) -> Result<C::Item> {
        if self.is_empty() {
            return Err(Error::end_of_sequence("View::try_last"));
        }
        let mut last = self.end.clone();
        last.retreat();
        Ok(last.current())
    }

    /// Caps the traversal tier at bidirectional.
    pub fn bidirectional_only(self) -> View<BidirectionalOnly<C>> {
        View::new(
            BidirectionalOnly::new(self.begin),
            BidirectionalOnly::new(self.end),
        )
    }
}

impl<C: RandomAccessCursor> View<C> {
    /// Checked random access to the element `offset` positions after `begin`.
    pub fn get(&self, offset: usize) -> Result<C::Item> {
        let len = self.len();
        if offset >= len {
            return Err(Error::out_of_bounds(offset, len));
        }
        let mut cursor = self.begin.clone();
        cursor.advance_by(offset as isize);
        Ok(cursor.current())
    }
}

impl<C: Cursor> Iterator for View<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.begin.equals(&self.end) {
            return None;
        }
        let item = self.begin.current();
        self.begin.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.begin.measured_distance(&self.end) {
            Some(len) => (len, Some(len)),
            None if self.begin.equals(&self.end) => (0, Some(0)),
            None => (0, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<C::Item> {
        match self.begin.measured_distance(&self.end) {
            Some(len) if n >= len => {
                self.begin = self.end.clone();
                None
            }
            Some(_) => {
                self.begin.advance_n(n);
                self.next()
            }
            None => {
                for _ in 0..n {
                    self.next()?;
                }
                self.next()
            }
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for View<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.begin.equals(&self.end) {
            return None;
        }
        self.end.retreat();
        Some(self.end.current())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for View<C> {
    fn len(&self) -> usize {
        self.begin.distance_to(&self.end).max(0) as usize
    }
}

impl<C: Cursor> IntoCursors for View<C> {
    type Cursor = C;

    fn into_cursors(self) -> (C, C) {
        (self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::forward;
    use cursorseq_common::ErrorKind;

    #[test]
    fn test_slice_view_iteration() {
        let data = vec![1, 2, 3, 4, 5];
        let (begin, end) = (&data).into_cursors();
        let view = View::new(begin, end);
        assert_eq!(view.len(), 5);
        assert_eq!(view.tier(), Tier::RandomAccess);
        assert_eq!(view.clone().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);

        let mut it = view.clone();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.len(), 3);
        assert_eq!(it.nth(1), Some(&3));
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_checked_access() {
        let data = [7, 8, 9];
        let (begin, end) = (&data).into_cursors();
        let view = View::new(begin, end);
        assert_eq!(*view.try_first().unwrap(), 7);
        assert_eq!(*view.try_last().unwrap(), 9);
        assert_eq!(*view.get(2).unwrap(), 9);
        assert!(matches!(
            view.get(3).unwrap_err().kind(),
            ErrorKind::OutOfBounds { offset: 3, len: 3 }
        ));

        let empty = View::new(end, end);
        assert!(empty.is_empty());
        assert!(matches!(
            empty.try_first().unwrap_err().kind(),
            ErrorKind::EndOfSequence { .. }
        ));
        assert!(empty.try_last().is_err());
    }

    #[test]
    fn test_forward_view_size_hint() {
        let view = forward(vec![1, 2, 3]);
        assert_eq!(view.size_hint(), (0, None));
        assert_eq!(view.count_remaining(), 3);
        assert_eq!(view.clone().nth(2), Some(3));
        assert_eq!(view.collect::<Vec<_>>(), [1, 2, 3]);

        let empty = forward(Vec::<i32>::new());
        assert_eq!(empty.size_hint(), (0, Some(0)));
    }
}
