//! The [`Grid`] type — a square grid of [`CellState`] annotations.
//!
//! A `Grid` is a plain owned snapshot. The search engine only reads its
//! dimension; the states are rendering annotations maintained by whoever
//! drives the engine (placing markers, painting routes, resetting).

use std::fmt;

use crate::geom::Cell;

// ---------------------------------------------------------------------------
// CellState
// ---------------------------------------------------------------------------

/// What a cell currently displays. Never consulted by the search algorithms,
/// which treat every in-bounds cell as traversable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u8", try_from = "u8")
)]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Path,
}

impl CellState {
    /// Integer code of the state (0 = empty, 1 = start, 2 = end, 3 = path).
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Start => 1,
            Self::End => 2,
            Self::Path => 3,
        }
    }

    /// Whether the state marks one of the two route endpoints.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

impl From<CellState> for u8 {
    fn from(s: CellState) -> Self {
        s.code()
    }
}

/// Error returned when converting an unknown integer code into a
/// [`CellState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCellState(pub u8);

impl fmt::Display for UnknownCellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cell state code {}", self.0)
    }
}

impl std::error::Error for UnknownCellState {}

impl TryFrom<u8> for CellState {
    type Error = UnknownCellState;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Start),
            2 => Ok(Self::End),
            3 => Ok(Self::Path),
            other => Err(UnknownCellState(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `size × size` grid of [`CellState`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    size: i32,
}

impl Grid {
    /// Create a new grid of the given dimension, filled with
    /// [`CellState::Empty`].
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            cells: vec![CellState::Empty; size as usize * size as usize],
            size,
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells (`size * size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.in_bounds(self.size)
    }

    /// Read the state at `c`. Returns `None` if `c` is outside the grid.
    pub fn at(&self, c: Cell) -> Option<CellState> {
        c.index(self.size).map(|i| self.cells[i])
    }

    /// Set the state at `c`. Returns `false` (and does nothing) if `c` is
    /// outside the grid.
    pub fn set(&mut self, c: Cell, state: CellState) -> bool {
        match c.index(self.size) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Turn every [`CellState::Path`] cell back into [`CellState::Empty`].
    pub fn clear_paths(&mut self) {
        for s in self.cells.iter_mut() {
            if *s == CellState::Path {
                *s = CellState::Empty;
            }
        }
    }

    /// Count cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major iterator over `(Cell, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Cell::from_index(i, size), s))
    }

    /// Iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size.max(1) as usize)
    }
}

impl Default for Grid {
    /// A 20 × 20 empty grid.
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<CellState>>::deserialize(deserializer)?;
        let size = rows.len();
        if let Some(bad) = rows.iter().position(|r| r.len() != size) {
            return Err(serde::de::Error::custom(format!(
                "grid is not square: row {bad} has {} cells, expected {size}",
                rows[bad].len()
            )));
        }
        let size = i32::try_from(size).map_err(serde::de::Error::custom)?;
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            size,
        })
    }
}
