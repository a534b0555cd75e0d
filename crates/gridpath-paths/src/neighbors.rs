use gridpath_core::Cell;

/// The four cardinal steps as `(dr, dc)`, in iteration order: up, down,
/// left, right.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Iterator over the in-bounds cardinal neighbours of a cell.
///
/// Produced by [`cardinal`].
#[derive(Debug, Clone)]
pub struct CardinalNeighbors {
    center: Cell,
    size: i32,
    next: usize,
}

impl Iterator for CardinalNeighbors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while let Some(&(dr, dc)) = DIRECTIONS.get(self.next) {
            self.next += 1;
            match self.center.checked_offset(dr, dc) {
                Some(n) if n.in_bounds(self.size) => return Some(n),
                _ => {}
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DIRECTIONS.len() - self.next))
    }
}

/// Cardinal (4-way) neighbours of `c` inside a `size × size` grid, in the
/// fixed order up, down, left, right.
#[inline]
pub fn cardinal(size: i32, c: Cell) -> CardinalNeighbors {
    CardinalNeighbors {
        center: c,
        size,
        next: 0,
    }
}
