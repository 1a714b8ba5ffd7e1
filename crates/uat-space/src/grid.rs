//! A bounded 3-D lattice — the reference `Region` implementation.
//!
//! Cells are addressed by `(x, y, alt)` inside a `cols × rows × levels`
//! box.  Lateral adjacency is 4-connected; vertical adjacency is one level
//! up or down.  The Manhattan metric is exact for this topology, so the
//! BFS defaults are overridden with O(1) closed forms.
//!
//! Every cell carries a copy of its bounds: a cell is only meaningful
//! relative to the box it lives in, and keeping the bounds inline makes
//! `adjacent()` total without a back-reference to any airspace object.

use std::fmt;

use crate::{Airspace, Region, SpaceError, SpaceResult};

// ── GridBounds ────────────────────────────────────────────────────────────────

/// Dimensions of the lattice: `cols × rows` cells per level, `levels` levels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub cols: u32,
    pub rows: u32,
    pub levels: u32,
}

impl GridBounds {
    /// Validate and build.  Every dimension must be non-zero.
    pub fn new(cols: u32, rows: u32, levels: u32) -> SpaceResult<Self> {
        if cols == 0 {
            return Err(SpaceError::EmptyDimension { what: "cols" });
        }
        if rows == 0 {
            return Err(SpaceError::EmptyDimension { what: "rows" });
        }
        if levels == 0 {
            return Err(SpaceError::EmptyDimension { what: "levels" });
        }
        Ok(Self { cols, rows, levels })
    }

    /// The cell at `(x, y, alt)`, or `None` when out of bounds.
    pub fn cell(&self, x: u32, y: u32, alt: u32) -> Option<GridCell> {
        (x < self.cols && y < self.rows && alt < self.levels)
            .then_some(GridCell { x, y, alt, bounds: *self })
    }

    /// Total number of cells in the box.
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize * self.levels as usize
    }

    /// Enumerate every cell into an [`Airspace`], level-major then row-major.
    pub fn airspace(&self) -> Airspace<GridCell> {
        let bounds = *self;
        (0..self.levels)
            .flat_map(move |alt| {
                (0..bounds.rows).flat_map(move |y| {
                    (0..bounds.cols).map(move |x| GridCell { x, y, alt, bounds })
                })
            })
            .collect()
    }
}

// ── GridCell ──────────────────────────────────────────────────────────────────

/// One cell of the lattice.  Construct via [`GridBounds::cell`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    x: u32,
    y: u32,
    alt: u32,
    bounds: GridBounds,
}

impl GridCell {
    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn alt(&self) -> u32 {
        self.alt
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Lateral displacement of `to` relative to `self`, as a unit-ish vector.
    /// `(0, 0)` for vertical moves and for non-adjacent cells on the same spot.
    fn heading_to(&self, to: &GridCell) -> (i64, i64) {
        (
            to.x as i64 - self.x as i64,
            to.y as i64 - self.y as i64,
        )
    }
}

impl Region for GridCell {
    fn adjacent(&self) -> Vec<GridCell> {
        let b = self.bounds;
        let mut out = Vec::with_capacity(6);
        if self.x > 0 {
            out.push(GridCell { x: self.x - 1, ..*self });
        }
        if self.x + 1 < b.cols {
            out.push(GridCell { x: self.x + 1, ..*self });
        }
        if self.y > 0 {
            out.push(GridCell { y: self.y - 1, ..*self });
        }
        if self.y + 1 < b.rows {
            out.push(GridCell { y: self.y + 1, ..*self });
        }
        if self.alt > 0 {
            out.push(GridCell { alt: self.alt - 1, ..*self });
        }
        if self.alt + 1 < b.levels {
            out.push(GridCell { alt: self.alt + 1, ..*self });
        }
        out
    }

    /// Manhattan distance — exact for a 6-connected lattice.
    fn distance(&self, other: &Self) -> Option<u64> {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        let dalt = self.alt.abs_diff(other.alt) as u64;
        Some(dx + dy + dalt)
    }

    fn heuristic_distance(&self, other: &Self) -> f64 {
        self.distance(other).map_or(f64::INFINITY, |d| d as f64)
    }

    fn requires_turn(&self, before: &Self, to: &Self) -> bool {
        let inbound = before.heading_to(self);
        let outbound = self.heading_to(to);
        // Vertical legs impose no heading.
        if inbound == (0, 0) || outbound == (0, 0) {
            return false;
        }
        inbound != outbound
    }

    fn requires_climb(&self, to: &Self) -> bool {
        self.alt != to.alt
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.alt)
    }
}
