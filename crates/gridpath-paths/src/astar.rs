use gridpath_core::Cell;

use crate::error::PathError;
use crate::search::{Algorithm, SearchResult, best_first};
use crate::traits::AstarPather;

/// Best-first (A*) search from `start` to `goal`.
///
/// Frontier priority is the cost so far plus
/// [`estimate`](AstarPather::estimate) to the goal. With an admissible,
/// consistent estimate the predecessor chain is a shortest path as soon as
/// the goal is dequeued.
pub fn astar<P: AstarPather>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Result<SearchResult, PathError> {
    best_first(pather, start, goal, Algorithm::AStar, |c| {
        pather.estimate(c, goal)
    })
}
