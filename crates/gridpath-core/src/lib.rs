//! **gridpath-core** — the grid model shared by the gridpath crates.
//!
//! This crate provides the coordinate type [`Cell`], the per-cell rendering
//! annotation [`CellState`] and the square [`Grid`] snapshot that the search
//! engine in `gridpath-paths` runs on.

pub mod geom;
pub mod grid;

pub use geom::Cell;
pub use grid::{CellState, Grid};
