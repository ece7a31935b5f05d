use maze_core::VertexId;

/// Minimal graph interface: vertex domain and neighbor enumeration.
pub trait Graph {
    /// Number of vertices; ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Append neighbors of `v` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>);
}

/// Graph with weighted (positive-cost) edges.
pub trait WeightedGraph: Graph {
    /// Cost of the edge from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: VertexId, to: VertexId) -> i32;
}
