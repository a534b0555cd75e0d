use gridpath_core::{Cell, Grid};

use crate::error::PathError;
use crate::search::{Algorithm, CameFrom, Parent, search};

/// Walk `came_from` backwards from `goal` to `start` and return the route
/// from `start` to `goal`, both included.
///
/// Fails with [`PathError::NoPath`] if the goal was never reached, and with
/// [`PathError::BrokenChain`] if the chain ends anywhere but at `start` or
/// does not get there within `size * size` steps. A partial route is never
/// returned.
pub fn reconstruct_path(
    came_from: &CameFrom,
    start: Cell,
    goal: Cell,
) -> Result<Vec<Cell>, PathError> {
    if !came_from.contains(goal) {
        return Err(PathError::NoPath { start, goal });
    }

    let limit = came_from.capacity();
    let mut path = vec![goal];
    let mut current = goal;
    let mut steps = 0;

    while current != start {
        if steps >= limit {
            return Err(PathError::BrokenChain {
                goal,
                at: current,
                steps,
            });
        }
        match came_from.get(current) {
            Some(Parent::Cell(prev)) => {
                current = prev;
                path.push(prev);
                steps += 1;
            }
            Some(Parent::Root) | None => {
                return Err(PathError::BrokenChain {
                    goal,
                    at: current,
                    steps,
                });
            }
        }
    }

    path.reverse();
    Ok(path)
}

/// Search `grid` and reconstruct the route in one go.
pub fn find_path(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
) -> Result<Vec<Cell>, PathError> {
    search(grid, start, goal, algorithm)?.path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::neighbors::cardinal;
    use crate::traits::{AstarPather, Pather};
    use crate::{astar, dijkstra};

    /// Open grid with a set of blocked cells, for exercising unreachable
    /// goals.
    struct Walled {
        size: i32,
        walls: Vec<Cell>,
    }

    impl Pather for Walled {
        fn size(&self) -> i32 {
            self.size
        }

        fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
            buf.extend(cardinal(self.size, c).filter(|n| !self.walls.contains(n)));
        }
    }

    impl AstarPather for Walled {
        fn estimate(&self, from: Cell, to: Cell) -> i32 {
            manhattan(from, to)
        }
    }

    fn assert_valid_route(route: &[Cell], start: Cell, goal: Cell, size: i32) {
        assert_eq!(route.first(), Some(&start));
        assert_eq!(route.last(), Some(&goal));
        for w in route.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1, "{} -> {} is not a step", w[0], w[1]);
        }
        assert!(route.iter().all(|c| c.in_bounds(size)));
    }

    #[test]
    fn scenario_short_row() {
        for algorithm in Algorithm::ALL {
            let route = find_path(&Grid::new(20), Cell::new(0, 0), Cell::new(0, 3), algorithm)
                .unwrap();
            assert_eq!(
                route,
                vec![
                    Cell::new(0, 0),
                    Cell::new(0, 1),
                    Cell::new(0, 2),
                    Cell::new(0, 3),
                ]
            );
        }
    }

    #[test]
    fn scenario_start_is_goal() {
        for algorithm in Algorithm::ALL {
            let route = find_path(&Grid::new(20), Cell::new(5, 5), Cell::new(5, 5), algorithm)
                .unwrap();
            assert_eq!(route, vec![Cell::new(5, 5)]);
        }
    }

    #[test]
    fn scenario_corner_to_corner() {
        let grid = Grid::new(20);
        for algorithm in Algorithm::ALL {
            let route = find_path(&grid, Cell::new(0, 0), Cell::new(19, 19), algorithm).unwrap();
            assert_eq!(route.len(), 39);
            assert_valid_route(&route, Cell::new(0, 0), Cell::new(19, 19), 20);
        }
    }

    #[test]
    fn every_pair_gets_a_shortest_route() {
        let size = 6;
        let grid = Grid::new(size);
        let cells: Vec<Cell> = grid.iter().map(|(c, _)| c).collect();
        for &start in &cells {
            for &goal in &cells {
                let a = find_path(&grid, start, goal, Algorithm::AStar).unwrap();
                let d = find_path(&grid, start, goal, Algorithm::Dijkstra).unwrap();
                let expected = manhattan(start, goal) as usize + 1;
                assert_eq!(a.len(), expected, "astar {start} -> {goal}");
                assert_eq!(d.len(), expected, "dijkstra {start} -> {goal}");
                assert_valid_route(&a, start, goal, size);
                assert_valid_route(&d, start, goal, size);
            }
        }
    }

    #[test]
    fn reconstruction_is_idempotent() {
        let grid = Grid::new(20);
        for algorithm in Algorithm::ALL {
            let res = search(&grid, Cell::new(3, 4), Cell::new(12, 18), algorithm).unwrap();
            let first = reconstruct_path(res.came_from(), res.start(), res.goal()).unwrap();
            let second = reconstruct_path(res.came_from(), res.start(), res.goal()).unwrap();
            assert_eq!(first, second);
            assert_eq!(first, res.path().unwrap());
        }
    }

    #[test]
    fn walled_off_goal_is_no_path() {
        // Goal in the corner, sealed by its two neighbours.
        let w = Walled {
            size: 5,
            walls: vec![Cell::new(3, 4), Cell::new(4, 3)],
        };
        let start = Cell::new(0, 0);
        let goal = Cell::new(4, 4);
        for res in [astar(&w, start, goal), dijkstra(&w, start, goal)] {
            let res = res.unwrap();
            assert!(!res.reached());
            assert!(!res.came_from().contains(goal));
            // Everything but the goal and the walls was explored.
            assert_eq!(res.came_from().len(), 22);
            let err = res.path().unwrap_err();
            assert_eq!(err, PathError::NoPath { start, goal });
            assert!(err.is_no_path());
        }
    }

    #[test]
    fn detour_around_a_wall_is_still_shortest() {
        // A vertical wall in column 2 with a gap at the bottom row.
        let w = Walled {
            size: 5,
            walls: vec![Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)],
        };
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 4);
        let a = astar(&w, start, goal).unwrap().path().unwrap();
        let d = dijkstra(&w, start, goal).unwrap().path().unwrap();
        // Down 4, across 4, up 4.
        assert_eq!(a.len(), 13);
        assert_eq!(d.len(), 13);
        assert!(a.iter().all(|c| !w.walls.contains(c)));
    }

    #[test]
    fn missing_goal_is_no_path() {
        let mut m = CameFrom::new(4);
        m.set_root(Cell::new(0, 0));
        let err = reconstruct_path(&m, Cell::new(0, 0), Cell::new(3, 3)).unwrap_err();
        assert!(matches!(err, PathError::NoPath { .. }));
    }

    #[test]
    fn cycle_is_detected() {
        let mut m = CameFrom::new(4);
        m.set_root(Cell::new(0, 0));
        m.insert(Cell::new(1, 1), Cell::new(1, 2));
        m.insert(Cell::new(1, 2), Cell::new(1, 1));
        let err = reconstruct_path(&m, Cell::new(0, 0), Cell::new(1, 1)).unwrap_err();
        match err {
            PathError::BrokenChain { goal, steps, .. } => {
                assert_eq!(goal, Cell::new(1, 1));
                assert_eq!(steps, 16);
            }
            other => panic!("expected BrokenChain, got {other:?}"),
        }
    }

    #[test]
    fn self_loop_is_detected() {
        let mut m = CameFrom::new(3);
        m.insert(Cell::new(2, 2), Cell::new(2, 2));
        let err = reconstruct_path(&m, Cell::new(0, 0), Cell::new(2, 2)).unwrap_err();
        assert!(err.is_no_path());
    }

    #[test]
    fn chain_ending_at_foreign_root_is_broken() {
        let mut m = CameFrom::new(4);
        m.set_root(Cell::new(2, 0));
        m.insert(Cell::new(2, 1), Cell::new(2, 0));
        let err = reconstruct_path(&m, Cell::new(0, 0), Cell::new(2, 1)).unwrap_err();
        assert_eq!(
            err,
            PathError::BrokenChain {
                goal: Cell::new(2, 1),
                at: Cell::new(2, 0),
                steps: 1,
            }
        );
    }

    #[test]
    fn dangling_predecessor_is_broken() {
        let mut m = CameFrom::new(4);
        m.set_root(Cell::new(0, 0));
        // (0, 2) was never recorded.
        m.insert(Cell::new(0, 3), Cell::new(0, 2));
        let err = reconstruct_path(&m, Cell::new(0, 0), Cell::new(0, 3)).unwrap_err();
        assert!(matches!(err, PathError::BrokenChain { at, .. } if at == Cell::new(0, 2)));
    }

    #[test]
    fn longest_legal_chain_is_accepted() {
        // A serpentine through every cell of a 3x3 grid: 8 steps.
        let order = [
            (0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0), (2, 0), (2, 1), (2, 2),
        ];
        let cells: Vec<Cell> = order.iter().map(|&rc| Cell::from(rc)).collect();
        let mut m = CameFrom::new(3);
        m.set_root(cells[0]);
        for w in cells.windows(2) {
            m.insert(w[1], w[0]);
        }
        let route = reconstruct_path(&m, cells[0], cells[8]).unwrap();
        assert_eq!(route, cells);
    }

    #[test]
    fn invalid_endpoint_propagates() {
        let err = find_path(&Grid::new(20), Cell::new(0, 0), Cell::new(25, 0), Algorithm::AStar)
            .unwrap_err();
        assert!(err.is_invalid_endpoint());
    }
}
