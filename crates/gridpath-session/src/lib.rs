//! **gridpath-session** — the state a grid pathfinding visualiser keeps
//! between user interactions.
//!
//! A [`Session`] owns the [`Grid`](gridpath_core::Grid) snapshot, the start
//! and end markers and the selected [`Algorithm`](gridpath_paths::Algorithm).
//! Rendering, input capture and persistence stay with the caller: the
//! session turns clicks into marker placements, runs the engine, paints the
//! route back into the grid, and builds the [`PathRecord`] a caller may
//! persist.

mod config;
mod error;
mod record;
mod session;

pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};
pub use record::PathRecord;
pub use session::{Placement, Session};
