//! The `Region` trait — the engine's opaque spatial capability.

use std::fmt;
use std::hash::Hash;

use crate::path;

/// An atomic spatial cell.
///
/// Regions are value-like: cheap to clone, immutable once constructed, with
/// equality and hashing consistent with each other.  The permit book keys
/// its per-tick buckets by region, so `Eq`/`Hash` are load-bearing — two
/// regions that compare equal name the same cell of airspace.
///
/// # Required method
///
/// Only [`adjacent`][Self::adjacent] is required.  The metric helpers
/// default to breadth-first search over the adjacency relation and assume a
/// finite reachable component; implementations with cheap exact metrics
/// (lattices, hex grids) should override them.
///
/// # Manoeuvre predicates
///
/// [`requires_turn`][Self::requires_turn] and
/// [`requires_climb`][Self::requires_climb] let cost-aware agents tell
/// whether a transition needs a manoeuvre.  They default to `false`, which
/// is correct for geometries without headings or altitude.
pub trait Region: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Enumerate the regions directly reachable from `self`.
    fn adjacent(&self) -> Vec<Self>;

    /// Minimum number of hops from `self` to `other`, or `None` when `other`
    /// is unreachable.
    fn distance(&self, other: &Self) -> Option<u64> {
        path::hop_distance(self, other)
    }

    /// An admissible estimate of [`distance`][Self::distance] as a real
    /// number.  Unreachable pairs report infinity.
    fn heuristic_distance(&self, other: &Self) -> f64 {
        self.distance(other).map_or(f64::INFINITY, |d| d as f64)
    }

    /// A minimum-hop path from `self` to `other`, inclusive of both ends.
    ///
    /// When several paths tie, the choice among them is randomised by
    /// `seed` — the same seed always yields the same path.  Returns an
    /// empty vector when `other` is unreachable.
    fn shortest_path(&self, other: &Self, seed: u64) -> Vec<Self> {
        path::shortest_path(self, other, seed)
    }

    /// Does moving `before → self → to` change heading?
    fn requires_turn(&self, _before: &Self, _to: &Self) -> bool {
        false
    }

    /// Does moving `self → to` change altitude?
    fn requires_climb(&self, _to: &Self) -> bool {
        false
    }
}
