use std::fmt;
use std::str::FromStr;

use gridpath_core::{Cell, Grid};

use crate::error::{Endpoint, PathError, UnknownAlgorithm};
use crate::frontier::Frontier;
use crate::path::reconstruct_path;
use crate::traits::Pather;

/// Sentinel value meaning "no cost recorded" in a [`CostMap`].
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The interchangeable search strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Best-first search ordered by cost so far plus Manhattan estimate.
    #[default]
    AStar,
    /// Uniform-cost search ordered by cost so far alone.
    Dijkstra,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::Dijkstra];

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "AStar",
            Self::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("astar") || t.eq_ignore_ascii_case("a*") {
            Ok(Self::AStar)
        } else if t.eq_ignore_ascii_case("dijkstra") {
            Ok(Self::Dijkstra)
        } else {
            Err(UnknownAlgorithm(s.to_owned()))
        }
    }
}

// ---------------------------------------------------------------------------
// Predecessor map
// ---------------------------------------------------------------------------

/// Where a visited cell was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent {
    /// The search root; it has no predecessor.
    Root,
    /// Reached by one step from this cell.
    Cell(Cell),
}

/// Predecessor map of one search, keyed by the packed cell index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CameFrom {
    size: i32,
    links: Vec<Option<Parent>>,
}

impl CameFrom {
    /// An empty map for a `size × size` grid.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            size,
            links: vec![None; size as usize * size as usize],
        }
    }

    /// Side length of the grid the map covers.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Maximum number of entries (`size * size`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.links.len()
    }

    /// Number of cells with a recorded predecessor (the root included).
    pub fn len(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    /// Whether no cell has been recorded.
    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }

    /// The predecessor of `c`, or `None` if `c` was never reached.
    pub fn get(&self, c: Cell) -> Option<Parent> {
        c.index(self.size).and_then(|i| self.links[i])
    }

    /// Whether `c` was reached.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.get(c).is_some()
    }

    /// Record `c` as the search root. Returns `false` if `c` is out of bounds.
    pub fn set_root(&mut self, c: Cell) -> bool {
        self.put(c, Parent::Root)
    }

    /// Record that `c` was reached from `from`. Returns `false` if `c` is out
    /// of bounds.
    pub fn insert(&mut self, c: Cell, from: Cell) -> bool {
        self.put(c, Parent::Cell(from))
    }

    fn put(&mut self, c: Cell, parent: Parent) -> bool {
        match c.index(self.size) {
            Some(i) => {
                self.links[i] = Some(parent);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, parent: Parent) {
        self.links[idx] = Some(parent);
    }

    /// Row-major iterator over every reached cell and its predecessor.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Parent)> + '_ {
        let size = self.size;
        self.links
            .iter()
            .enumerate()
            .filter_map(move |(i, l)| l.map(|p| (Cell::from_index(i, size), p)))
    }
}

// ---------------------------------------------------------------------------
// Cost map
// ---------------------------------------------------------------------------

/// Best known accumulated cost per cell, keyed by the packed cell index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CostMap {
    size: i32,
    costs: Vec<i32>,
}

impl CostMap {
    pub(crate) fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            size,
            costs: vec![UNREACHABLE; size as usize * size as usize],
        }
    }

    /// The cost recorded for `c`, or [`UNREACHABLE`] if none was (or `c` is
    /// out of bounds).
    pub fn at(&self, c: Cell) -> i32 {
        match c.index(self.size) {
            Some(i) => self.costs[i],
            None => UNREACHABLE,
        }
    }

    /// The cost recorded for `c`, if any.
    pub fn get(&self, c: Cell) -> Option<i32> {
        Some(self.at(c)).filter(|&v| v != UNREACHABLE)
    }

    /// Number of cells with a recorded cost.
    pub fn len(&self) -> usize {
        self.costs.iter().filter(|&&v| v != UNREACHABLE).count()
    }

    /// Whether no cost has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub(crate) fn at_index(&self, idx: usize) -> i32 {
        self.costs[idx]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, cost: i32) {
        self.costs[idx] = cost;
    }
}

/// Reject a deserialized map whose storage does not cover a `size × size`
/// grid exactly.
#[cfg(feature = "serde")]
fn check_len<E: serde::de::Error>(what: &str, size: i32, len: usize) -> Result<(), E> {
    if size < 0 {
        return Err(E::custom(format!("{what} has negative size {size}")));
    }
    let expected = size as usize * size as usize;
    if len != expected {
        return Err(E::custom(format!(
            "{what} holds {len} entries, expected {expected} for size {size}"
        )));
    }
    Ok(())
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CameFrom {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            size: i32,
            links: Vec<Option<Parent>>,
        }
        let raw = Raw::deserialize(deserializer)?;
        check_len("predecessor map", raw.size, raw.links.len())?;
        Ok(Self {
            size: raw.size,
            links: raw.links,
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            size: i32,
            costs: Vec<i32>,
        }
        let raw = Raw::deserialize(deserializer)?;
        check_len("cost map", raw.size, raw.costs.len())?;
        Ok(Self {
            size: raw.size,
            costs: raw.costs,
        })
    }
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// Everything one search invocation produced. Read-only once returned.
#[derive(Debug, Clone)]
pub struct SearchResult {
    algorithm: Algorithm,
    start: Cell,
    goal: Cell,
    came_from: CameFrom,
    costs: CostMap,
    expanded: usize,
    reached: bool,
}

impl SearchResult {
    /// The algorithm that produced this result.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The predecessor map.
    #[inline]
    pub fn came_from(&self) -> &CameFrom {
        &self.came_from
    }

    /// The cost map.
    #[inline]
    pub fn costs(&self) -> &CostMap {
        &self.costs
    }

    /// Number of nodes taken off the frontier and expanded (the goal
    /// included when it was reached).
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Whether the goal was dequeued before the frontier ran dry.
    #[inline]
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// Reconstruct the route from start to goal.
    pub fn path(&self) -> Result<Vec<Cell>, PathError> {
        reconstruct_path(&self.came_from, self.start, self.goal)
    }

    /// Split into the predecessor map and the cost map.
    pub fn into_parts(self) -> (CameFrom, CostMap) {
        (self.came_from, self.costs)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Search `grid` from `start` to `goal` with the chosen algorithm.
///
/// Fails with [`PathError::InvalidEndpoint`] if either cell lies outside the
/// grid. An unreachable goal is not an error here: the returned predecessor
/// map simply lacks the goal, and [`SearchResult::path`] reports it.
pub fn search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
) -> Result<SearchResult, PathError> {
    match algorithm {
        Algorithm::AStar => crate::astar(grid, start, goal),
        Algorithm::Dijkstra => crate::dijkstra(grid, start, goal),
    }
}

fn endpoint_index(endpoint: Endpoint, cell: Cell, size: i32) -> Result<usize, PathError> {
    cell.index(size).ok_or(PathError::InvalidEndpoint {
        endpoint,
        cell,
        size,
    })
}

/// The loop shared by A* and Dijkstra. Frontier priority is the cost so far
/// plus `estimate(cell)`.
pub(crate) fn best_first<P: Pather>(
    pather: &P,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
    estimate: impl Fn(Cell) -> i32,
) -> Result<SearchResult, PathError> {
    let size = pather.size();
    let start_idx = endpoint_index(Endpoint::Start, start, size)?;
    let goal_idx = endpoint_index(Endpoint::Goal, goal, size)?;

    log::trace!("{algorithm}: searching {start} -> {goal} on a {size}x{size} grid");

    let mut came_from = CameFrom::new(size);
    let mut costs = CostMap::new(size);
    came_from.set_index(start_idx, Parent::Root);
    costs.set_index(start_idx, 0);

    let mut frontier = Frontier::new();
    frontier.push(start_idx, 0, estimate(start));

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0;

    let reached = loop {
        let Some(current) = frontier.pop() else {
            break false;
        };

        // Skip entries superseded by a cheaper route.
        if current.cost > costs.at_index(current.idx) {
            continue;
        }
        expanded += 1;

        if current.idx == goal_idx {
            break true;
        }

        let cp = Cell::from_index(current.idx, size);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = np.index(size) else {
                continue;
            };
            let new_cost = current.cost + 1;
            if new_cost >= costs.at_index(ni) {
                continue;
            }
            costs.set_index(ni, new_cost);
            came_from.set_index(ni, Parent::Cell(cp));
            frontier.push(ni, new_cost, new_cost + estimate(np));
        }
    };

    log::debug!(
        "{algorithm}: {} after expanding {expanded} nodes ({} left on the frontier)",
        if reached { "goal reached" } else { "goal unreachable" },
        frontier.len(),
    );

    Ok(SearchResult {
        algorithm,
        start,
        goal,
        came_from,
        costs,
        expanded,
        reached,
    })
}
