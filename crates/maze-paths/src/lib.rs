//! Shortest paths over grid mazes.
//!
//! This crate turns a [`maze_core::Grid`] into a graph and computes, from one
//! source, the distance *and* the exact shortest walk to every vertex:
//!
//! - **Grid graph builder** ([`Adjacency::build`]): 4-connected, unit-cost
//!   edges between open interior cells
//! - **Dijkstra** ([`PathEngine::run`]): O(V²) linear-scan variant with a
//!   deterministic lowest-id tie-break
//! - **Path store** ([`PathStore`]): one copy-on-extend sequence per vertex
//! - **Report** ([`dump_all_destinations`]): text table of every destination
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | neighbor enumeration |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra |

mod adjacency;
mod engine;
mod report;
mod store;
mod traits;

pub use adjacency::Adjacency;
pub use engine::{PathEngine, UNREACHABLE, shortest_paths};
pub use report::dump_all_destinations;
pub use store::PathStore;
pub use traits::{Graph, WeightedGraph};
