//! Lockstep traversal over tuples of heterogeneous cursors.
//!
//! The traits here are implemented for tuples of one to eight cursors. They are
//! the building blocks of [`Zip`](crate::zip::Zip): each operation is applied to
//! every member of the tuple, and the composite tier is the minimum of the
//! member tiers.

use crate::{
    capability::Tier,
    cursor::{BidirectionalCursor, Cursor, IntoCursors, RandomAccessCursor},
};

/// A tuple of cursors moved in lockstep.
pub trait CursorTuple: Clone {
    /// Tuple of the members' items.
    type Items;

    const TIER: Tier;

    /// Dereferences every member.
    fn current_all(&self) -> Self::Items;

    fn advance_all(&mut self);

    fn advance_all_n(&mut self, n: usize);

    /// Conjunction of the members' equality.
    fn all_equal(&self, other: &Self) -> bool;

    /// Smallest measured distance over the members, if every member can measure.
    fn min_measured_distance(&self, other: &Self) -> Option<usize>;

    /// Number of lockstep advances from `self` until the first member reaches
    /// its counterpart in `ends`.
    ///
    /// Members that can measure their distance are answered in constant time;
    /// the remaining members are walked together, stopping as soon as one of
    /// them is exhausted or the measured minimum is reached.
    fn common_len(&self, ends: &Self) -> usize;
}

pub trait BidirectionalTuple: CursorTuple {
    fn retreat_all(&mut self);
}

pub trait RandomAccessTuple: BidirectionalTuple {
    fn advance_all_by(&mut self, offset: isize);

    /// Minimum over the members of the signed member-to-member distance.
    fn min_distance(&self, other: &Self) -> isize;

    /// Whether any member lies strictly before its counterpart.
    fn any_precedes(&self, other: &Self) -> bool;
}

/// Conversion of a tuple of sequences into a pair of cursor tuples.
pub trait IntoCursorTuple {
    type Cursors: CursorTuple;

    fn into_cursor_tuples(self) -> (Self::Cursors, Self::Cursors);
}

macro_rules! impl_cursor_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Cursor),+> CursorTuple for ($($name,)+) {
            type Items = ($($name::Item,)+);

            const TIER: Tier = Tier::min_of(&[$($name::TIER),+]);

            #[inline]
            fn current_all(&self) -> Self::Items {
                ($(self.$idx.current(),)+)
            }

            #[inline]
            fn advance_all(&mut self) {
                $(self.$idx.advance();)+
            }

            fn advance_all_n(&mut self, n: usize) {
                $(self.$idx.advance_n(n);)+
            }

            #[inline]
            fn all_equal(&self, other: &Self) -> bool {
                $(self.$idx.equals(&other.$idx))&&+
            }

            fn min_measured_distance(&self, other: &Self) -> Option<usize> {
                let mut min = usize::MAX;
                $(min = min.min(self.$idx.measured_distance(&other.$idx)?);)+
                Some(min)
            }

            fn common_len(&self, ends: &Self) -> usize {
                let measured = [$(self.$idx.measured_distance(&ends.$idx)),+];
                let mut len = measured.iter().flatten().copied().min().unwrap_or(usize::MAX);
                if measured.iter().all(Option::is_some) {
                    return len;
                }
                let mut walker = self.clone();
                let mut steps = 0;
                while steps < len {
                    $(
                        if measured[$idx].is_none() && walker.$idx.equals(&ends.$idx) {
                            len = steps;
                        }
                    )+
                    if steps == len {
                        break;
                    }
                    $(
                        if measured[$idx].is_none() {
                            walker.$idx.advance();
                        }
                    )+
                    steps += 1;
                }
                len
            }
        }

        impl<$($name: BidirectionalCursor),+> BidirectionalTuple for ($($name,)+) {
            #[inline]
            fn retreat_all(&mut self) {
                $(self.$idx.retreat();)+
            }
        }

        impl<$($name: RandomAccessCursor),+> RandomAccessTuple for ($($name,)+) {
            fn advance_all_by(&mut self, offset: isize) {
                $(self.$idx.advance_by(offset);)+
            }

            fn min_distance(&self, other: &Self) -> isize {
                let mut min = isize::MAX;
                $(min = min.min(self.$idx.distance_to(&other.$idx));)+
                min
            }

            fn any_precedes(&self, other: &Self) -> bool {
                $(self.$idx.precedes(&other.$idx))||+
            }
        }

        impl<$($name: IntoCursors),+> IntoCursorTuple for ($($name,)+) {
            type Cursors = ($($name::Cursor,)+);

            fn into_cursor_tuples(self) -> (Self::Cursors, Self::Cursors) {
                let pairs = ($(self.$idx.into_cursors(),)+);
                (($(pairs.$idx.0,)+), ($(pairs.$idx.1,)+))
            }
        }
    };
}

impl_cursor_tuple!(A.0);
impl_cursor_tuple!(A.0, B.1);
impl_cursor_tuple!(A.0, B.1, C.2);
impl_cursor_tuple!(A.0, B.1, C.2, D.3);
impl_cursor_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_cursor_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_cursor_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_cursor_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
