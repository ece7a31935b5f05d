//! Single-source Dijkstra with per-vertex path recording: [`PathEngine`].
//!
//! The engine picks the next vertex with a linear scan instead of a heap,
//! so one run is O(V²). Among equal tentative distances the lowest vertex id
//! wins, which makes distances *and* paths deterministic for a given graph
//! and source.

use log::{debug, trace};
use maze_core::{MazeError, VertexId};

use crate::store::PathStore;
use crate::traits::WeightedGraph;

/// Sentinel distance meaning "unreachable".
pub const UNREACHABLE: i32 = i32::MAX;

/// Owns the distance array and path store of one Dijkstra run.
///
/// The buffers are reused across runs; every run releases the previous
/// run's paths before recording new ones.
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    source: Option<VertexId>,
    dist: Vec<i32>,
    settled: Vec<bool>,
    paths: PathStore,
    // scratch buffer for neighbor queries
    nbuf: Vec<VertexId>,
}

impl PathEngine {
    /// Create an engine sized for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            source: None,
            dist: vec![UNREACHABLE; vertex_count],
            settled: vec![false; vertex_count],
            paths: PathStore::new(vertex_count),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Compute shortest distances and paths from `source` to every vertex.
    pub fn run<G: WeightedGraph>(&mut self, graph: &G, source: VertexId) -> Result<(), MazeError> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(MazeError::InvalidVertex(source));
        }

        self.paths.reset(n);
        self.dist.clear();
        self.dist.resize(n, UNREACHABLE);
        self.settled.clear();
        self.settled.resize(n, false);
        self.source = Some(source);

        for v in 0..n {
            self.paths.set(v, vec![source]);
        }
        self.dist[source] = 0;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(u) = self.min_unsettled() {
            self.settled[u] = true;
            let du = self.dist[u];

            nbuf.clear();
            graph.neighbors(u, &mut nbuf);

            for &v in nbuf.iter() {
                if v >= n || self.settled[v] {
                    continue;
                }
                let alt = du.saturating_add(graph.cost(u, v));
                if alt < self.dist[v] {
                    self.paths.extend_from(u, v);
                    self.dist[v] = alt;
                    trace!("relax {u} -> {v}: {alt}");
                }
            }
        }

        self.nbuf = nbuf;

        let mut reached = 0;
        for v in 0..n {
            if self.dist[v] == UNREACHABLE {
                self.paths.release(v);
            } else {
                reached += 1;
            }
        }
        debug!("dijkstra from {source}: reached {reached} of {n} vertices");
        Ok(())
    }

    /// Unsettled vertex with the smallest finite distance, lowest id first.
    fn min_unsettled(&self) -> Option<VertexId> {
        let mut best = None;
        let mut best_dist = UNREACHABLE;
        for (v, (&d, &done)) in self.dist.iter().zip(self.settled.iter()).enumerate() {
            if !done && d < best_dist {
                best = Some(v);
                best_dist = d;
            }
        }
        best
    }

    /// Drop the paths and distances of the last run.
    pub fn release(&mut self) {
        self.paths.release_all();
        self.dist.fill(UNREACHABLE);
        self.settled.fill(false);
        self.source = None;
    }

    /// Source of the last run, if any.
    #[inline]
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// Distance of every vertex from the last run's source.
    #[inline]
    pub fn distances(&self) -> &[i32] {
        &self.dist
    }

    /// Distance of `v`, or [`UNREACHABLE`] if unknown.
    pub fn distance(&self, v: VertexId) -> i32 {
        self.dist.get(v).copied().unwrap_or(UNREACHABLE)
    }

    #[inline]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v) != UNREACHABLE
    }

    /// Shortest path to `v`, source first.
    #[inline]
    pub fn path(&self, v: VertexId) -> Option<&[VertexId]> {
        self.paths.get(v)
    }

    #[inline]
    pub fn paths(&self) -> &PathStore {
        &self.paths
    }

    /// Hand over the distance array and path store.
    pub fn into_parts(self) -> (Vec<i32>, PathStore) {
        (self.dist, self.paths)
    }
}

/// Run Dijkstra once and return `(distances, paths)`.
pub fn shortest_paths<G: WeightedGraph>(
    graph: &G,
    source: VertexId,
) -> Result<(Vec<i32>, PathStore), MazeError> {
    let mut engine = PathEngine::new(graph.vertex_count());
    engine.run(graph, source)?;
    Ok(engine.into_parts())
}
