use gridpath_core::{Cell, Grid};

use crate::distance::manhattan;
use crate::neighbors::cardinal;

/// Minimal pathfinding interface — a square search space with neighbour
/// enumeration. Every step costs 1.
pub trait Pather {
    /// Side length of the square search space.
    fn size(&self) -> i32;

    /// Append neighbours of `c` into `buf`. The caller clears `buf` before
    /// calling. Order must be deterministic for reproducible searches.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with an admissible heuristic, required by A*.
pub trait AstarPather: Pather {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

impl Pather for Grid {
    #[inline]
    fn size(&self) -> i32 {
        Grid::size(self)
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(cardinal(Grid::size(self), c));
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}
