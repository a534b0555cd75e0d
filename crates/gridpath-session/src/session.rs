use gridpath_core::{Cell, CellState, Grid};
use gridpath_paths::{Algorithm, Endpoint, PathError, find_path};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::record::PathRecord;

/// Outcome of [`Session::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The cell became the start marker.
    Start,
    /// The cell became the end marker.
    End,
    /// Both markers were already set; nothing changed.
    Ignored,
}

/// Grid, markers and algorithm selection of one visualiser session.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    start: Option<Cell>,
    end: Option<Cell>,
    algorithm: Algorithm,
}

impl Default for Session {
    fn default() -> Self {
        let config = SessionConfig::default();
        Self {
            grid: Grid::new(config.grid_size),
            start: None,
            end: None,
            algorithm: config.algorithm,
            config,
        }
    }
}

impl Session {
    /// Create a session with an empty grid.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        log::info!(
            "new session: {n}x{n} grid, {}",
            config.algorithm,
            n = config.grid_size
        );
        Ok(Self {
            grid: Grid::new(config.grid_size),
            start: None,
            end: None,
            algorithm: config.algorithm,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current grid snapshot.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Choose the algorithm used by the next [`run`](Session::run).
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        log::info!("algorithm: {} -> {algorithm}", self.algorithm);
        self.algorithm = algorithm;
    }

    /// Handle a click on `cell`: the first click places the start marker,
    /// the second the end marker, later clicks are ignored.
    ///
    /// An end marker on the start cell is accepted; the cell keeps showing
    /// the start marker.
    pub fn place(&mut self, cell: Cell) -> Result<Placement> {
        let endpoint = match (self.start, self.end) {
            (None, _) => Endpoint::Start,
            (Some(_), None) => Endpoint::Goal,
            (Some(_), Some(_)) => {
                log::debug!("ignoring click at {cell}: both markers are set");
                return Ok(Placement::Ignored);
            }
        };
        if !self.grid.contains(cell) {
            return Err(PathError::InvalidEndpoint {
                endpoint,
                cell,
                size: self.grid.size(),
            }
            .into());
        }

        let placement = match endpoint {
            Endpoint::Start => {
                self.start = Some(cell);
                self.grid.set(cell, CellState::Start);
                Placement::Start
            }
            Endpoint::Goal => {
                self.end = Some(cell);
                if self.grid.at(cell) != Some(CellState::Start) {
                    self.grid.set(cell, CellState::End);
                }
                Placement::End
            }
        };
        log::info!("placed {endpoint} marker at {cell}");
        Ok(placement)
    }

    fn endpoints(&self) -> Result<(Cell, Cell)> {
        let start = self.start.ok_or(PathError::MissingEndpoint(Endpoint::Start))?;
        let end = self.end.ok_or(PathError::MissingEndpoint(Endpoint::Goal))?;
        Ok((start, end))
    }

    /// Run the selected algorithm between the markers and paint the route.
    ///
    /// Every route cell other than the two markers is marked
    /// [`CellState::Path`]; marks from an earlier run are cleared first.
    /// On failure the grid is left without any route marks.
    pub fn run(&mut self) -> Result<Vec<Cell>> {
        self.grid.clear_paths();
        let (start, end) = self.endpoints()?;

        let route = match find_path(&self.grid, start, end, self.algorithm) {
            Ok(route) => route,
            Err(e) => {
                log::warn!("{}: no route from {start} to {end}: {e}", self.algorithm);
                return Err(e.into());
            }
        };

        for &c in &route {
            if self.grid.at(c) == Some(CellState::Empty) {
                self.grid.set(c, CellState::Path);
            }
        }
        log::info!(
            "{}: route of {} cells from {start} to {end}",
            self.algorithm,
            route.len()
        );
        Ok(route)
    }

    /// Start over with an empty grid. The algorithm selection is kept.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.grid_size);
        self.start = None;
        self.end = None;
        log::info!("session reset");
    }

    /// Snapshot the session for persistence. Both markers must be set.
    pub fn save_record(&self) -> Result<PathRecord> {
        let (start, end) = self.endpoints()?;
        Ok(PathRecord {
            grid: self.grid.clone(),
            start,
            end,
            algorithm: self.algorithm,
        })
    }
}
