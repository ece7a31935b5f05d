//! Grid graph builder: [`Adjacency`].
//!
//! Instead of a `V × V` matrix, every vertex keeps a 4-bit mask of its open
//! cardinal neighbors. `has_edge(u, v)` answers exactly what `adj[u][v]`
//! would.

use maze_core::{Grid, Point, VertexId};

use crate::traits::{Graph, WeightedGraph};

const UP: u8 = 1 << 0;
const RIGHT: u8 = 1 << 1;
const DOWN: u8 = 1 << 2;
const LEFT: u8 = 1 << 3;

/// Direction bits in [`Point::neighbors_4`] order.
const DIRS: [u8; 4] = [UP, RIGHT, DOWN, LEFT];

/// Unit-weight, 4-connected adjacency over the interior cells of a [`Grid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjacency {
    side: usize,
    links: Vec<u8>,
}

impl Adjacency {
    /// Build the adjacency of `grid`.
    pub fn build(grid: &Grid) -> Self {
        let mut adj = Self::default();
        adj.rebuild(grid);
        adj
    }

    /// Rebuild in place from `grid`. Every mask is reset first, so nothing
    /// from a previous maze survives.
    pub fn rebuild(&mut self, grid: &Grid) {
        self.side = grid.side() as usize;
        self.links.clear();
        self.links.resize(grid.vertex_count(), 0);

        for p in grid.interior() {
            if !grid.is_passable(p) {
                continue;
            }
            let Some(v) = grid.vertex_of(p) else {
                continue;
            };
            let mut mask = 0;
            for (bit, n) in DIRS.into_iter().zip(p.neighbors_4()) {
                // The border is blocked, so edge cells never link across it.
                if grid.is_passable(n) {
                    mask |= bit;
                }
            }
            self.links[v] = mask;
        }
    }

    /// Whether `u` and `v` are joined by an edge.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        let n = self.links.len();
        if u >= n || v >= n {
            return false;
        }
        match self.direction(u, v) {
            Some(bit) => self.links[u] & bit != 0,
            None => false,
        }
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let ends: u32 = self.links.iter().map(|m| m.count_ones()).sum();
        (ends / 2) as usize
    }

    /// Number of vertices with at least one edge.
    pub fn linked_vertices(&self) -> usize {
        self.links.iter().filter(|&&m| m != 0).count()
    }

    fn direction(&self, u: VertexId, v: VertexId) -> Option<u8> {
        let side = self.side;
        let (ur, uc) = (u / side, u % side);
        let (vr, vc) = (v / side, v % side);
        let d = Point::new(vc as i32 - uc as i32, vr as i32 - ur as i32);
        match (d.x, d.y) {
            (0, -1) => Some(UP),
            (1, 0) => Some(RIGHT),
            (0, 1) => Some(DOWN),
            (-1, 0) => Some(LEFT),
            _ => None,
        }
    }
}

impl Graph for Adjacency {
    fn vertex_count(&self) -> usize {
        self.links.len()
    }

    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>) {
        let Some(&mask) = self.links.get(v) else {
            return;
        };
        if mask & UP != 0 {
            buf.push(v - self.side);
        }
        if mask & RIGHT != 0 {
            buf.push(v + 1);
        }
        if mask & DOWN != 0 {
            buf.push(v + self.side);
        }
        if mask & LEFT != 0 {
            buf.push(v - 1);
        }
    }
}

impl WeightedGraph for Adjacency {
    #[inline]
    fn cost(&self, _from: VertexId, _to: VertexId) -> i32 {
        1
    }
}
