//! Traversal capability tiers.
//!
//! Every cursor advertises the strongest kind of movement it supports as a
//! compile-time [`Tier`]. A composite cursor is only as capable as its weakest
//! source, so the tier of an adaptor is the minimum over its sources, further
//! capped by whatever the adaptor's own algorithm can support.

/// The strongest category of movement a cursor supports.
///
/// Tiers are totally ordered: `Forward < Bidirectional < RandomAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// `advance` only.
    Forward,
    /// `advance` and `retreat`.
    Bidirectional,
    /// Constant-time `advance_by` and `distance_to` on top of bidirectional movement.
    RandomAccess,
}

impl Tier {
    /// Returns the weaker of the two tiers.
    pub const fn min(self, other: Tier) -> Tier {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns the weakest tier in `tiers`.
    ///
    /// An empty list yields `RandomAccess`, the identity of `min`.
    pub const fn min_of(tiers: &[Tier]) -> Tier {
        let mut result = Tier::RandomAccess;
        let mut i = 0;
        while i < tiers.len() {
            result = result.min(tiers[i]);
            i += 1;
        }
        result
    }

    /// Tier of an adaptor built over `sources` whose own algorithm supports at
    /// most `ceiling`.
    pub const fn composite(sources: &[Tier], ceiling: Tier) -> Tier {
        Tier::min_of(sources).min(ceiling)
    }

    /// Whether a cursor of this tier can perform the movements of `required`.
    pub const fn supports(self, required: Tier) -> bool {
        (self as u8) >= (required as u8)
    }
}
