//! The [`PathStore`]: one ordered vertex sequence per destination.

use maze_core::VertexId;

/// Per-vertex shortest walks, source first and destination last.
///
/// Sequences are never edited after being attached: a vertex's path is
/// replaced wholesale by [`extend_from`](PathStore::extend_from), which
/// copies the predecessor's path and appends one vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStore {
    paths: Vec<Option<Vec<VertexId>>>,
}

impl PathStore {
    /// Create a store for vertex ids `0..len`, all absent.
    pub fn new(len: usize) -> Self {
        Self {
            paths: vec![None; len],
        }
    }

    /// Size of the vertex domain.
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Release everything and resize the domain to `len`.
    pub fn reset(&mut self, len: usize) {
        self.release_all();
        self.paths.resize(len, None);
    }

    /// Attach `seq` to `v`, dropping whatever was there. No-op outside the
    /// domain.
    pub fn set(&mut self, v: VertexId, seq: Vec<VertexId>) {
        if let Some(slot) = self.paths.get_mut(v) {
            *slot = Some(seq);
        }
    }

    /// The path stored for `v`, if any.
    pub fn get(&self, v: VertexId) -> Option<&[VertexId]> {
        self.paths.get(v)?.as_deref()
    }

    /// Replace `v`'s path with a copy of `u`'s path plus `v`.
    ///
    /// The new sequence is fully built before the old one is dropped.
    /// Returns `false`, leaving `v` untouched, if `u` has no path.
    pub fn extend_from(&mut self, u: VertexId, v: VertexId) -> bool {
        let Some(prefix) = self.get(u) else {
            return false;
        };
        let mut seq = Vec::with_capacity(prefix.len() + 1);
        seq.extend_from_slice(prefix);
        seq.push(v);
        self.set(v, seq);
        true
    }

    /// Drop the path stored for `v`.
    pub fn release(&mut self, v: VertexId) {
        if let Some(slot) = self.paths.get_mut(v) {
            *slot = None;
        }
    }

    /// Drop every stored path. Safe on a store that was never filled.
    pub fn release_all(&mut self) {
        for slot in self.paths.iter_mut() {
            *slot = None;
        }
    }

    /// Number of vertices that currently have a path.
    pub fn assigned(&self) -> usize {
        self.paths.iter().filter(|p| p.is_some()).count()
    }

    /// Iterate over `(vertex, path)` for every vertex, absent ones as `None`.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<&[VertexId]>)> + '_ {
        self.paths.iter().enumerate().map(|(v, p)| (v, p.as_deref()))
    }
}
