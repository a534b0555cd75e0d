use gridpath_paths::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Session configuration. Missing fields take their defaults when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side length of the square grid.
    pub grid_size: i32,
    /// Algorithm selected when the session starts.
    pub algorithm: Algorithm,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            algorithm: Algorithm::AStar,
        }
    }
}

impl SessionConfig {
    /// Set the grid size (builder).
    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the initial algorithm (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 1 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        Ok(())
    }
}
