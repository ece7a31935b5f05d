//! **maze-core**: core types for the grid maze visualizer.
//!
//! This crate provides the foundational types used across the workspace:
//! geometry primitives, cell states, the bordered maze grid, input values,
//! configuration, errors, and the display/input traits that back-ends
//! implement.

pub mod cell;
pub mod config;
pub mod display;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;

pub use cell::CellState;
pub use config::MazeConfig;
pub use display::{DisplaySink, InputSource, cell_origin, status_anchor};
pub use error::MazeError;
pub use geom::{Point, Range};
pub use grid::{Grid, VertexId};
pub use messages::{CoordinateInput, Key, parse_coordinate_pair};
