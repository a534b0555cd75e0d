//! Error types for the session layer.

use gridpath_paths::PathError;
use thiserror::Error;

/// Invalid [`SessionConfig`](crate::SessionConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 1, got {0}")]
    GridSize(i32),
}

/// Session error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Whether the failure means no route exists between the markers.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::Path(e) if e.is_no_path())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
