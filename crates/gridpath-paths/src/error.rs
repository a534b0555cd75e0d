//! Error types for the search engine.

use std::fmt;

use gridpath_core::Cell;
use thiserror::Error;

/// Which end of a route an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Failure to produce a route.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("{0} cell is not set")]
    MissingEndpoint(Endpoint),

    #[error("{endpoint} cell {cell} is outside the {size}x{size} grid")]
    InvalidEndpoint {
        endpoint: Endpoint,
        cell: Cell,
        size: i32,
    },

    #[error("no path from {start} to {goal}")]
    NoPath { start: Cell, goal: Cell },

    #[error("predecessor chain from {goal} broke at {at} after {steps} steps")]
    BrokenChain { goal: Cell, at: Cell, steps: usize },
}

impl PathError {
    /// Whether the error means "no route exists": the goal was never
    /// reached, or the predecessor chain leading back from it is malformed.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath { .. } | Self::BrokenChain { .. })
    }

    /// Whether the error is about a missing or out-of-bounds endpoint.
    pub fn is_invalid_endpoint(&self) -> bool {
        matches!(
            self,
            Self::MissingEndpoint(_) | Self::InvalidEndpoint { .. }
        )
    }
}

/// Returned when parsing an unrecognised algorithm name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected \"AStar\" or \"Dijkstra\")")]
pub struct UnknownAlgorithm(pub String);
