//! Maze generation for the grid maze visualizer.

pub mod mapgen;

pub use mapgen::MapGen;
