//! Set-style exclusion: the elements of a primary sequence that do not occur in
//! a secondary sequence.
//!
//! The strategy is chosen once per [`Except`] instance, the first time a cursor
//! is created (or eagerly through [`Except::prepare_with`]):
//!
//! - **Merge**: the secondary sequence is already sorted. Every cursor keeps its
//!   own seek cursor into the secondary sequence and moves it monotonically; a primary
//!   element is excluded when the seek cursor lands on an equal element. Linear in
//!   both lengths when the primary sequence is ascending too.
//! - **Lookup**: the secondary sequence is unsorted. Its elements are collected
//!   once into a hash set shared by all cursors of the instance.
//!
//! Both strategies treat the secondary sequence as a set: every occurrence of an
//! excluded value in the primary sequence is dropped, and the relative order of
//! the remaining elements is preserved.
//!
//! Exclusion has to scan forward to find the next surviving element, so the
//! cursor is forward-only whatever the tiers of its sources.

use std::{cell::OnceCell, collections::HashSet, hash::Hash, rc::Rc};

use rayon::prelude::*;

use crate::{
    capability::Tier,
    cursor::{Cursor, IntoCursors},
    execution::Execution,
    view::View,
};

/// Hash set used by the lookup strategy.
pub type LookupSet<K> = HashSet<K, ahash::RandomState>;

/// The exclusion algorithm selected for an [`Except`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptStrategy {
    /// Sorted secondary sequence, monotonic seek cursor.
    Merge,
    /// Unsorted secondary sequence, hash-set membership.
    Lookup,
}

enum Plan<K> {
    Merge,
    Lookup(LookupSet<K>),
}

impl<K> Plan<K> {
    fn strategy(&self) -> ExceptStrategy {
        match self {
            Plan::Merge => ExceptStrategy::Merge,
            Plan::Lookup(_) => ExceptStrategy::Lookup,
        }
    }
}

/// State shared by every cursor of one [`Except`] instance.
struct Secondary<S: Cursor> {
    begin: S,
    end: S,
    plan: OnceCell<Plan<S::Item>>,
}

impl<S> Secondary<S>
where
    S: Cursor,
    S::Item: Ord + Hash,
{
    fn plan(&self) -> &Plan<S::Item> {
        self.plan.get_or_init(|| self.build_sequential())
    }

    fn build_sequential(&self) -> Plan<S::Item> {
        let plan = if is_sorted(&self.begin, &self.end) {
            Plan::Merge
        } else {
            Plan::Lookup(View::new(self.begin.clone(), self.end.clone()).collect())
        };
        log::debug!(
            "except: selected {:?} strategy (sequential)",
            plan.strategy()
        );
        plan
    }
}

impl<S> Secondary<S>
where
    S: Cursor,
    S::Item: Ord + Hash + Send + Sync,
{
    fn build_parallel(&self) -> Plan<S::Item> {
        let items: Vec<S::Item> = View::new(self.begin.clone(), self.end.clone()).collect();
        let len = items.len();
        let plan = if items.par_windows(2).all(|pair| pair[0] <= pair[1]) {
            Plan::Merge
        } else {
            Plan::Lookup(items.into_par_iter().collect())
        };
        log::debug!(
            "except: selected {:?} strategy for {len} secondary elements (parallel)",
            plan.strategy()
        );
        plan
    }
}

/// Whether `[begin, end)` is in non-descending order.
fn is_sorted<C>(begin: &C, end: &C) -> bool
where
    C: Cursor,
    C::Item: Ord,
{
    if begin.equals(end) {
        return true;
    }
    let mut cursor = begin.clone();
    let mut prev = cursor.current();
    cursor.advance();
    while !cursor.equals(end) {
        let item = cursor.current();
        if item < prev {
            return false;
        }
        prev = item;
        cursor.advance();
    }
    true
}

/// Yields the elements of `primary` that do not occur in `secondary`.
///
/// The element type must be `Ord + Hash + Clone` for cursors to be created:
/// which strategy runs depends on whether `secondary` turns out to be sorted,
/// so both the ordering and the hashing are needed up front. Add `Send + Sync`
/// to use [`Except::prepare_with`] with [`Execution::Parallel`].
///
/// ```
/// use cursorseq::{ExceptStrategy, except};
///
/// let kept = except(&[5, 1, 4, 2], &[2, 4]);
/// assert_eq!(kept.iter().copied().collect::<Vec<_>>(), [5, 1]);
/// assert_eq!(kept.strategy(), Some(ExceptStrategy::Merge));
/// ```
pub fn except<P, S>(primary: P, secondary: S) -> Except<P::Cursor, S::Cursor>
where
    P: IntoCursors,
    S: IntoCursors,
    S::Cursor: Cursor<Item = <P::Cursor as Cursor>::Item>,
{
    let (begin, end) = primary.into_cursors();
    let (secondary_begin, secondary_end) = secondary.into_cursors();
    Except::new(begin, end, secondary_begin, secondary_end)
}

/// Exclusion adaptor. See the [module documentation](self).
///
/// Cursors exist only for `Ord + Hash + Clone` elements; see [`except`].
pub struct Except<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
{
    begin: P,
    end: P,
    secondary: Rc<Secondary<S>>,
}

impl<P, S> Except<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
{
    /// Builds the adaptor over the primary span `[begin, end)` and the
    /// secondary span `[secondary_begin, secondary_end)`. Nothing is scanned
    /// until the first cursor is created.
    pub fn new(begin: P, end: P, secondary_begin: S, secondary_end: S) -> Self {
        Except {
            begin,
            end,
            secondary: Rc::new(Secondary {
                begin: secondary_begin,
                end: secondary_end,
                plan: OnceCell::new(),
            }),
        }
    }

    /// The strategy in use, or `None` if no cursor has been created yet.
    pub fn strategy(&self) -> Option<ExceptStrategy> {
        self.secondary.plan.get().map(Plan::strategy)
    }

    /// Always [`Tier::Forward`].
    pub fn tier(&self) -> Tier {
        Tier::Forward
    }
}

impl<P, S> Except<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Ord + Hash + Clone,
{
    /// First surviving element of the primary sequence.
    ///
    /// The first call selects the strategy for the lifetime of the instance.
    pub fn begin(&self) -> ExceptCursor<P, S> {
        self.secondary.plan();
        let mut cursor = ExceptCursor {
            primary: self.begin.clone(),
            end: self.end.clone(),
            seek: self.secondary.begin.clone(),
            last: None,
            secondary: Rc::clone(&self.secondary),
        };
        cursor.skip_excluded();
        cursor
    }

    /// The end sentinel, on the primary end.
    pub fn end(&self) -> ExceptCursor<P, S> {
        ExceptCursor {
            primary: self.end.clone(),
            end: self.end.clone(),
            seek: self.secondary.end.clone(),
            last: None,
            secondary: Rc::clone(&self.secondary),
        }
    }

    /// The surviving elements as a std iterator.
    pub fn iter(&self) -> View<ExceptCursor<P, S>> {
        View::new(self.begin(), self.end())
    }
}

impl<P, S> Except<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Ord + Hash + Clone + Send + Sync,
{
    /// Selects the strategy now, running the sortedness check and the lookup-set
    /// build under `execution`.
    ///
    /// Has no effect beyond returning the strategy if one was already selected.
    pub fn prepare_with(&self, execution: Execution) -> ExceptStrategy {
        let secondary = &*self.secondary;
        secondary
            .plan
            .get_or_init(|| match execution {
                Execution::Sequential => secondary.build_sequential(),
                Execution::Parallel => secondary.build_parallel(),
            })
            .strategy()
    }
}

impl<P, S> IntoCursors for Except<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Ord + Hash + Clone,
{
    type Cursor = ExceptCursor<P, S>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (self.begin(), self.end())
    }
}

impl<P, S> IntoIterator for Except<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Ord + Hash + Clone,
{
    type Item = P::Item;
    type IntoIter = View<ExceptCursor<P, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor of an [`Except`]. Always positioned on a surviving element or on the
/// end sentinel.
pub struct ExceptCursor<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
{
    primary: P,
    end: P,
    /// Merge strategy only: first secondary element not less than `last`.
    seek: S,
    /// Merge strategy only: the last primary element tested.
    last: Option<P::Item>,
    secondary: Rc<Secondary<S>>,
}

impl<P, S> Clone for ExceptCursor<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        ExceptCursor {
            primary: self.primary.clone(),
            end: self.end.clone(),
            seek: self.seek.clone(),
            last: self.last.clone(),
            secondary: Rc::clone(&self.secondary),
        }
    }
}

impl<P, S> ExceptCursor<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Ord + Hash + Clone,
{
    fn skip_excluded(&mut self) {
        while !self.primary.equals(&self.end) {
            let item = self.primary.current();
            if !self.is_excluded(&item) {
                break;
            }
            self.primary.advance();
        }
    }

    fn is_excluded(&mut self, item: &P::Item) -> bool {
        let secondary = &*self.secondary;
        match secondary.plan() {
            Plan::Lookup(set) => set.contains(item),
            Plan::Merge => {
                // A descending step in the primary sequence invalidates the seek cursor.
                if self.last.as_ref().is_some_and(|last| item < last) {
                    self.seek = secondary.begin.clone();
                }
                while !self.seek.equals(&secondary.end) && self.seek.current() < *item {
                    self.seek.advance();
                }
                self.last = Some(item.clone());
                !self.seek.equals(&secondary.end) && self.seek.current() == *item
            }
        }
    }
}

impl<P, S> Cursor for ExceptCursor<P, S>
where
    P: Cursor,
    S: Cursor<Item = P::Item>,
    P::Item: Ord + Hash + Clone,
{
    type Item = P::Item;

    const TIER: Tier = Tier::Forward;

    #[inline]
    fn current(&self) -> P::Item {
        self.primary.current()
    }

    fn advance(&mut self) {
        self.primary.advance();
        self.skip_excluded();
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.primary.equals(&other.primary)
    }
}
