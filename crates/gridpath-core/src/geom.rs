//! Grid coordinates: [`Cell`].
//!
//! A cell is addressed by `(row, col)`. Rows grow downwards and columns grow
//! to the right, matching how the grid is laid out on screen.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Identity is structural: two cells with equal
/// coordinates are the same cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Like [`offset`](Cell::offset), but `None` if either coordinate would
    /// overflow.
    #[inline]
    pub const fn checked_offset(self, dr: i32, dc: i32) -> Option<Self> {
        match (self.row.checked_add(dr), self.col.checked_add(dc)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Whether the cell lies inside a `size × size` grid.
    #[inline]
    pub const fn in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < size && self.col < size
    }

    /// Packed row-major key of this cell in a `size × size` grid.
    ///
    /// Returns `None` if the cell is out of bounds.
    #[inline]
    pub fn index(self, size: i32) -> Option<usize> {
        if !self.in_bounds(size) {
            return None;
        }
        Some(self.row as usize * size as usize + self.col as usize)
    }

    /// Inverse of [`index`](Cell::index).
    #[inline]
    pub fn from_index(idx: usize, size: i32) -> Self {
        let size = size.max(1) as usize;
        Self::new((idx / size) as i32, (idx % size) as i32)
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
