//! Terminal visualizer for single-source shortest paths on random mazes.
//!
//! [`MazeSession`] drives the program: it generates a maze, asks for a
//! source, computes every shortest path from it once, then replays the path
//! to each requested destination with [`Replay`].

pub mod keys;
pub mod replay;
pub mod session;

#[cfg(test)]
mod testing;

pub use keys::{ReplayCommand, ReplayKeys};
pub use replay::Replay;
pub use session::{MazeSession, Phase};
