//! Fixed-size chunking of a sequence.
//!
//! [`Chunks`] yields consecutive, non-overlapping [`View`]s of `size` source
//! elements; the last chunk holds the remainder and may be shorter. Chunk
//! boundaries are aligned to the start of the source in both directions, so
//! retreating from the end yields the short chunk first.
//!
//! The cursor keeps the tier of its source. Offsets and distances count whole
//! chunks: the distance from `begin` to `end` is `ceil(n / size)`.

use std::cell::OnceCell;

use cursorseq_common::{Result, verify_arg};

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor},
    view::View,
};

/// Splits `source` into chunks of `size` elements.
///
/// Fails with `InvalidArgument` when `size` is zero.
pub fn chunks<I: IntoCursors>(source: I, size: usize) -> Result<Chunks<I::Cursor>> {
    verify_arg!(size, size > 0);
    let (begin, end) = source.into_cursors();
    Ok(Chunks {
        begin,
        end,
        size,
        len: OnceCell::new(),
    })
}

/// Chunking adaptor. See the [module documentation](self).
pub struct Chunks<C> {
    begin: C,
    end: C,
    /// Maximum number of elements per chunk, never zero.
    size: usize,
    /// Source length, measured once for sources that can move backwards.
    len: OnceCell<usize>,
}

impl<C: Cursor> Chunks<C> {
    /// Cursor on the first chunk.
    pub fn begin(&self) -> ChunkCursor<C> {
        let (stop, count) = ChunkCursor::scan(&self.begin, &self.end, self.size);
        ChunkCursor {
            start: self.begin.clone(),
            stop,
            end: self.end.clone(),
            size: self.size,
            offset: 0,
            count,
            len: self.source_len(),
        }
    }

    /// The end sentinel: an empty chunk at the end of the source.
    pub fn end(&self) -> ChunkCursor<C> {
        let len = self.source_len();
        ChunkCursor {
            start: self.end.clone(),
            stop: self.end.clone(),
            end: self.end.clone(),
            size: self.size,
            offset: len,
            count: 0,
            len,
        }
    }

    /// The chunks as a std iterator.
    pub fn iter(&self) -> View<ChunkCursor<C>> {
        View::new(self.begin(), self.end())
    }

    /// Number of elements per chunk, except possibly the last one.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Traversal tier of the chunk cursor, the tier of the source.
    pub fn tier(&self) -> Tier {
        C::TIER
    }

    /// Backward and offset movement need the source length to align the last
    /// chunk. Forward-only sources are never measured, so they may be unbounded.
    fn source_len(&self) -> usize {
        if !C::TIER.supports(Tier::Bidirectional) {
            return usize::MAX;
        }
        *self.len.get_or_init(|| self.begin.steps_to(&self.end))
    }
}

impl<C: Cursor> IntoCursors for Chunks<C> {
    type Cursor = ChunkCursor<C>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<C: Cursor> IntoIterator for Chunks<C> {
    type Item = View<C>;
    type IntoIter = View<ChunkCursor<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor of a [`Chunks`], positioned on the chunk `[start, stop)`.
#[derive(Debug, Clone)]
pub struct ChunkCursor<C> {
    start: C,
    stop: C,
    /// Source end, the bound of forward scans.
    end: C,
    size: usize,
    /// Source index of `start`.
    offset: usize,
    /// Number of elements in `[start, stop)`.
    count: usize,
    /// Source length; `usize::MAX` for forward-only sources.
    len: usize,
}

impl<C: Cursor> ChunkCursor<C> {
    /// Source index of the first element of the current chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Position `size` elements past `start`, or `end` if that comes first,
    /// along with the number of elements in between.
    fn scan(start: &C, end: &C, size: usize) -> (C, usize) {
        let mut stop = start.clone();
        if let Some(remaining) = start.measured_distance(end) {
            let count = remaining.min(size);
            stop.advance_n(count);
            return (stop, count);
        }
        let mut count = 0;
        while count < size && !stop.equals(end) {
            stop.advance();
            count += 1;
        }
        (stop, count)
    }

    /// Index of the current chunk. The end sentinel's index is the number of
    /// chunks.
    #[inline]
    fn chunk_index(&self) -> usize {
        self.offset.div_ceil(self.size)
    }
}

impl<C: Cursor> Cursor for ChunkCursor<C> {
    type Item = View<C>;

    const TIER: Tier = C::TIER;

    fn current(&self) -> View<C> {
        View::new(self.start.clone(), self.stop.clone())
    }

    fn advance(&mut self) {
        self.start = self.stop.clone();
        self.offset += self.count;
        (self.stop, self.count) = Self::scan(&self.start, &self.end, self.size);
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.start.equals(&other.start)
    }

    fn measured_distance(&self, other: &Self) -> Option<usize> {
        let elements = self.start.measured_distance(&other.start)?;
        Some(elements.div_ceil(self.size))
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for ChunkCursor<C> {
    fn retreat(&mut self) {
        let index = self.chunk_index();
        assert!(index > 0, "cannot retreat a chunk cursor before the first chunk");
        let prev = (index - 1) * self.size;
        let count = self.offset - prev;
        self.stop = self.start.clone();
        for _ in 0..count {
            self.start.retreat();
        }
        self.offset = prev;
        self.count = count;
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for ChunkCursor<C> {
    fn advance_by(&mut self, chunks: isize) {
        let index = self.chunk_index() as isize + chunks;
        let total = self.len.div_ceil(self.size) as isize;
        assert!(
            (0..=total).contains(&index),
            "cannot move chunk cursor at chunk {} by {chunks}",
            self.chunk_index()
        );
        let target = (index as usize * self.size).min(self.len);
        self.start.advance_by(target as isize - self.offset as isize);
        self.offset = target;
        self.count = self.size.min(self.len - target);
        self.stop = self.start.clone();
        self.stop.advance_by(self.count as isize);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.chunk_index() as isize - self.chunk_index() as isize
    }
}
