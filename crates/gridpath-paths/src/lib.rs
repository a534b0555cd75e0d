//! Grid pathfinding engine.
//!
//! This crate searches a square, unweighted, four-connected grid and turns the
//! result into a renderable route:
//!
//! - **A\*** best-first search guided by the Manhattan heuristic ([`astar`])
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **Path reconstruction** from the predecessor map ([`reconstruct_path`])
//!
//! Most callers only need [`search`] (or [`find_path`]) with an
//! [`Algorithm`]. Each call allocates its own frontier, cost map and
//! predecessor map; nothing is shared between calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`Grid`](gridpath_core::Grid) implements both.

mod astar;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod search;
mod traits;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use error::{Endpoint, PathError, UnknownAlgorithm};
pub use neighbors::{CardinalNeighbors, DIRECTIONS, cardinal};
pub use path::{find_path, reconstruct_path};
pub use search::{Algorithm, CameFrom, CostMap, Parent, SearchResult, UNREACHABLE, search};
pub use traits::{AstarPather, Pather};
