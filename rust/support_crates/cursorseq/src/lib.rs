//! Lazy sequence adaptors built on a cursor abstraction.
//!
//! A sequence is a pair of cursors, `begin` and an end sentinel. Adaptors
//! wrap the cursors of their sources and compute elements on demand; nothing is
//! materialized unless an algorithm needs it (the lookup set of [`Except`]).
//!
//! - **Cursors**: [`Cursor`], [`BidirectionalCursor`] and [`RandomAccessCursor`],
//!   each advertising its [`Tier`] at compile time.
//! - **Sources**: slices, vectors, arrays, string slices ([`CharCursor`]) and
//!   cloneable iterators ([`forward`]).
//! - **Adaptors**: [`zip`], [`except`], [`group_by`], [`join`], [`chunks`],
//!   [`flatten`] and [`exclude`], also available as methods through
//!   [`SequenceExt`].
//! - **Consumption**: every adaptor converts into a [`View`], which is a std
//!   [`Iterator`].
//!
//! An adaptor's tier is the weakest of its sources' tiers, capped by what its
//! own algorithm supports: zip, join and chunks preserve it, group-by and
//! flatten stop at bidirectional, except and exclude are forward-only.
//!
//! ```
//! use cursorseq::{Tier, except, join, zip};
//!
//! let pairs: Vec<_> = zip((&[1, 2, 3], &[10, 20])).into_iter().collect();
//! assert_eq!(pairs, [(&1, &10), (&2, &20)]);
//!
//! let kept: Vec<_> = except(&[1, 2, 3, 4, 5], &[4, 2]).into_iter().copied().collect();
//! assert_eq!(kept, [1, 3, 5]);
//!
//! let joined = join(&[1, 2, 3], &0);
//! assert_eq!(joined.tier(), Tier::RandomAccess);
//! assert_eq!(joined.iter().len(), 5);
//! ```

pub mod capability;
pub mod chunks;
pub mod cursor;
pub mod degrade;
pub mod except;
pub mod exclude;
pub mod execution;
pub mod ext;
pub mod flatten;
pub mod group_by;
pub mod join;
pub mod sources;
pub mod tuple;
pub mod view;
pub mod zip;

#[cfg(test)]
mod tests;

pub use capability::Tier;
pub use chunks::{ChunkCursor, Chunks, chunks};
pub use cursorseq_common::{Error, ErrorKind, Result};
pub use cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor};
pub use degrade::{BidirectionalOnly, ForwardOnly};
pub use except::{Except, ExceptCursor, ExceptStrategy, except};
pub use exclude::{Exclude, ExcludeCursor, exclude};
pub use execution::Execution;
pub use ext::SequenceExt;
pub use flatten::{Flatten, FlattenCursor, flatten};
pub use group_by::{
    Group, GroupBy, GroupCursor, KeyOrder, group_by, group_by_descending, group_by_with,
};
pub use join::{DisplayCursor, Join, JoinCursor, Turn, join, join_display};
pub use sources::{CharCursor, IterCursor, SliceCursor, forward};
pub use view::View;
pub use zip::{Zip, ZipCursor, zip};
