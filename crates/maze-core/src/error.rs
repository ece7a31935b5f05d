//! The [`MazeError`] type shared by every crate in the workspace.

use crate::geom::Point;

/// Errors raised by the maze components.
///
/// An unreachable destination is not an error: it is reported through the
/// `UNREACHABLE` distance sentinel.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// A prompt answer that is out of range or names a blocked cell.
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: i32, y: i32 },
    #[error("vertex {0} is outside the graph")]
    InvalidVertex(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The input source has no more data.
    #[error("input closed")]
    InputClosed,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Shorthand for [`MazeError::InvalidCoordinate`] at `p`.
    pub fn invalid_coordinate(p: Point) -> Self {
        Self::InvalidCoordinate { x: p.x, y: p.y }
    }
}
