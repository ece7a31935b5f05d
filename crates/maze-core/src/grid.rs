//! The [`Grid`] type is a square maze of [`CellState`]s with a blocked border.
//!
//! A grid of side `n` stores `(n+2)²` cells. Row 0, column 0, row `n+1` and
//! column `n+1` form the border and are always [`CellState::Blocked`]; writes
//! to them are ignored. Interior cells map one-to-one onto vertex ids in
//! `[0, n²)`, row-major.

use crate::cell::CellState;
use crate::geom::{Point, Range};

/// Vertex id of an interior cell: `row * side + col` in 0-based interior
/// coordinates.
pub type VertexId = usize;

/// A square maze grid with a one-cell blocked border.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    side: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with `side × side` interior cells, all blocked.
    pub fn new(side: i32) -> Self {
        let side = side.max(0);
        let w = (side + 2) as usize;
        Self {
            side,
            cells: vec![CellState::Blocked; w * w],
        }
    }

    /// Build a grid from ASCII rows: `#` is blocked, anything else open.
    ///
    /// Rows describe the interior only; the border is added. Returns `None`
    /// unless there are exactly as many rows as columns.
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let side = rows.len();
        if rows.iter().any(|r| r.chars().count() != side) {
            return None;
        }
        let mut grid = Self::new(side as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '#' {
                    grid.set(Point::new(x as i32 + 1, y as i32 + 1), CellState::Open);
                }
            }
        }
        Some(grid)
    }

    /// Interior side length.
    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Number of interior cells (= number of graph vertices).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// Full range including the border.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.side + 2, self.side + 2)
    }

    /// Interior range, `[1, side+1)` on both axes.
    #[inline]
    pub fn interior(&self) -> Range {
        Range::new(1, 1, self.side + 1, self.side + 1)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * ((self.side + 2) as usize) + (p.x as usize)
    }

    /// Get the cell at a point, or `None` if outside the bounds.
    pub fn at(&self, p: Point) -> Option<CellState> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set an interior cell. Does nothing for border or out-of-range points.
    pub fn set(&mut self, p: Point, state: CellState) {
        if !self.interior().contains(p) {
            return;
        }
        let i = self.index(p);
        self.cells[i] = state;
    }

    /// Whether a path may cross the cell at `p`. False outside the grid.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellState::is_passable)
    }

    /// Reset every cell to [`CellState::Blocked`].
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Blocked);
    }

    /// Fill the interior using a function of each point.
    pub fn fill_interior(&mut self, mut f: impl FnMut(Point) -> CellState) {
        for p in self.interior() {
            let i = self.index(p);
            self.cells[i] = f(p);
        }
    }

    /// Count how many cells equal `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Vertex id of an interior point.
    pub fn vertex_of(&self, p: Point) -> Option<VertexId> {
        if !self.interior().contains(p) {
            return None;
        }
        Some(((p.y - 1) * self.side + (p.x - 1)) as usize)
    }

    /// Interior point of a vertex id.
    pub fn point_of(&self, v: VertexId) -> Option<Point> {
        if v >= self.vertex_count() {
            return None;
        }
        let side = self.side as usize;
        Some(Point::new((v % side) as i32 + 1, (v / side) as i32 + 1))
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order, border
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.bounds().iter().map(move |p| (p, self.cells[self.index(p)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_blocked() {
        let g = Grid::new(4);
        assert_eq!(g.side(), 4);
        assert_eq!(g.vertex_count(), 16);
        assert_eq!(g.count(CellState::Blocked), 36);
    }

    #[test]
    fn border_writes_are_ignored() {
        let mut g = Grid::new(3);
        g.set(Point::new(0, 2), CellState::Open);
        g.set(Point::new(4, 4), CellState::Open);
        g.set(Point::new(9, 9), CellState::Open);
        assert_eq!(g.count(CellState::Open), 0);
        g.set(Point::new(3, 3), CellState::Open);
        assert_eq!(g.at(Point::new(3, 3)), Some(CellState::Open));
        assert_eq!(g.at(Point::new(9, 9)), None);
    }

    #[test]
    fn vertex_point_bijection() {
        let g = Grid::new(5);
        for v in 0..g.vertex_count() {
            let p = g.point_of(v).unwrap();
            assert_eq!(g.vertex_of(p), Some(v));
        }
        assert_eq!(g.vertex_of(Point::new(1, 1)), Some(0));
        assert_eq!(g.vertex_of(Point::new(5, 1)), Some(4));
        assert_eq!(g.vertex_of(Point::new(1, 2)), Some(5));
        assert_eq!(g.vertex_of(Point::new(0, 1)), None);
        assert_eq!(g.point_of(25), None);
    }

    #[test]
    fn from_ascii_layout() {
        let g = Grid::from_ascii(&["..#", "#..", "..."]).unwrap();
        assert!(g.is_passable(Point::new(1, 1)));
        assert!(!g.is_passable(Point::new(3, 1)));
        assert!(!g.is_passable(Point::new(1, 2)));
        assert!(!g.is_passable(Point::new(0, 0)));
        assert_eq!(g.count(CellState::Open), 7);
        assert!(Grid::from_ascii(&["..", "."]).is_none());
    }

    #[test]
    fn clear_resets_interior() {
        let mut g = Grid::from_ascii(&["..", ".."]).unwrap();
        g.clear();
        assert_eq!(g.count(CellState::Open), 0);
    }

    #[test]
    fn iter_covers_border() {
        let g = Grid::new(2);
        assert_eq!(g.iter().count(), 16);
    }
}
