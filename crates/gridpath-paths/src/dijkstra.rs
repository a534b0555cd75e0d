use gridpath_core::Cell;

use crate::error::PathError;
use crate::search::{Algorithm, SearchResult, best_first};
use crate::traits::Pather;

/// Uniform-cost (Dijkstra) search from `start` to `goal`.
///
/// Frontier priority is the accumulated cost alone. Stops as soon as the
/// goal is dequeued, or when the frontier is exhausted.
pub fn dijkstra<P: Pather>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Result<SearchResult, PathError> {
    best_first(pather, start, goal, Algorithm::Dijkstra, |_| 0)
}
