//! The seams between the maze logic and the outside world: [`DisplaySink`]
//! and [`InputSource`].
//!
//! Screen coordinates used by [`DisplaySink::set_cursor`] are 0-based
//! terminal columns and rows. A maze cell at grid point `p` is drawn two
//! columns wide at [`cell_origin`]`(p)`, below a one-row header.

use crate::cell::CellState;
use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::Grid;
use crate::messages::{CoordinateInput, Key};

/// Back-end that draws the maze (terminal, recorder, ...).
pub trait DisplaySink {
    /// Redraw the whole screen from `grid`.
    fn render(&mut self, grid: &Grid) -> Result<(), MazeError>;

    /// Redraw the single cell at grid point `p`.
    fn render_cell(&mut self, p: Point, state: CellState) -> Result<(), MazeError>;

    /// Move the text cursor to screen position `pos`.
    fn set_cursor(&mut self, pos: Point) -> Result<(), MazeError>;

    /// Write `text` at the cursor.
    fn write_status(&mut self, text: &str) -> Result<(), MazeError>;

    /// Replace the screen with a multi-line text report.
    fn show_report(&mut self, report: &str) -> Result<(), MazeError>;
}

/// Blocking user input.
pub trait InputSource {
    /// Read one coordinate answer.
    fn read_coordinate_pair(&mut self) -> Result<CoordinateInput, MazeError>;

    /// Wait for a single key press.
    fn read_key(&mut self) -> Result<Key, MazeError>;
}

/// Screen position of the status text for a maze of the given side.
#[inline]
pub fn status_anchor(side: i32) -> Point {
    Point::new(side * 2 + 11, side / 2 + 1)
}

/// Screen position of the left column of grid cell `p`.
#[inline]
pub fn cell_origin(p: Point) -> Point {
    Point::new(p.x * 2 + 1, p.y + 1)
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn render(&mut self, grid: &Grid) -> Result<(), MazeError> {
        (**self).render(grid)
    }

    fn render_cell(&mut self, p: Point, state: CellState) -> Result<(), MazeError> {
        (**self).render_cell(p, state)
    }

    fn set_cursor(&mut self, pos: Point) -> Result<(), MazeError> {
        (**self).set_cursor(pos)
    }

    fn write_status(&mut self, text: &str) -> Result<(), MazeError> {
        (**self).write_status(text)
    }

    fn show_report(&mut self, report: &str) -> Result<(), MazeError> {
        (**self).show_report(report)
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_coordinate_pair(&mut self) -> Result<CoordinateInput, MazeError> {
        (**self).read_coordinate_pair()
    }

    fn read_key(&mut self) -> Result<Key, MazeError> {
        (**self).read_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_sits_right_of_maze() {
        let side = 32;
        let a = status_anchor(side);
        let right_edge = cell_origin(Point::new(side + 1, 0)).x + 2;
        assert!(a.x > right_edge);
        assert_eq!(a, Point::new(75, 17));
    }

    #[test]
    fn cells_are_two_columns_wide() {
        assert_eq!(cell_origin(Point::new(0, 0)), Point::new(1, 1));
        assert_eq!(cell_origin(Point::new(3, 2)), Point::new(7, 3));
    }
}
