//! Replay controller that animates a stored shortest path.
//!
//! [`Replay::replay`] paints a path cell by cell, reports the outcome on the
//! status line, then erases the path from the grid so the same destination
//! can be replayed again. Nothing is recomputed.

use std::thread;
use std::time::Duration;

use log::debug;
use maze_core::{DisplaySink, Grid, MazeError, VertexId, status_anchor};
use maze_paths::UNREACHABLE;

pub const UNREACHABLE_STATUS: &str = "Destination cannot be reached!";
pub const DONE_STATUS: &str = "DONE!";

/// Paints and erases paths with a fixed pause between steps.
#[derive(Debug, Clone, Copy)]
pub struct Replay {
    delay: Duration,
}

impl Replay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Play `path` (source first) whose length is `distance`.
    ///
    /// 1. Paint: each cell becomes `OnPath`, or `SourceOnPath` for an
    ///    endpoint, and is emitted to `sink`, pausing between emissions.
    /// 2. Status: "cannot be reached" for [`UNREACHABLE`], otherwise "DONE!"
    ///    and the distance on the line below.
    /// 3. Erase: painted cells go back to `Open`, endpoints back to `Source`.
    pub fn replay<S: DisplaySink + ?Sized>(
        &self,
        grid: &mut Grid,
        path: &[VertexId],
        distance: i32,
        sink: &mut S,
    ) -> Result<(), MazeError> {
        for (i, &v) in path.iter().enumerate() {
            let Some(p) = grid.point_of(v) else {
                continue;
            };
            if i > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            let state = grid.at(p).unwrap_or_default().painted();
            grid.set(p, state);
            sink.render_cell(p, state)?;
        }

        let anchor = status_anchor(grid.side());
        sink.set_cursor(anchor)?;
        if distance == UNREACHABLE {
            sink.write_status(UNREACHABLE_STATUS)?;
        } else {
            sink.write_status(DONE_STATUS)?;
            sink.set_cursor(anchor.shift(0, 1))?;
            sink.write_status(&format!("Distance : {distance}"))?;
        }

        for &v in path {
            if let Some(p) = grid.point_of(v) {
                if let Some(state) = grid.at(p) {
                    grid.set(p, state.erased());
                }
            }
        }
        debug!("replayed {} steps, distance {distance}", path.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::testing::RecordingSink;
    use maze_core::{CellState, Point};

    fn open_grid() -> Grid {
        let mut g = Grid::from_ascii(&["...", "...", "..."]).unwrap();
        g.set(Point::new(1, 1), CellState::Source);
        g.set(Point::new(3, 3), CellState::Source);
        g
    }

    #[test]
    fn paints_in_order_then_erases() {
        let mut grid = open_grid();
        let mut sink = RecordingSink::default();
        Replay::new(Duration::ZERO)
            .replay(&mut grid, &[0, 1, 2, 5, 8], 4, &mut sink)
            .unwrap();

        assert_eq!(
            sink.cells(),
            vec![
                (Point::new(1, 1), CellState::SourceOnPath),
                (Point::new(2, 1), CellState::OnPath),
                (Point::new(3, 1), CellState::OnPath),
                (Point::new(3, 2), CellState::OnPath),
                (Point::new(3, 3), CellState::SourceOnPath),
            ]
        );
        assert_eq!(sink.statuses(), vec![DONE_STATUS, "Distance : 4"]);

        // Endpoints survive, everything else is open again.
        assert_eq!(grid.at(Point::new(1, 1)), Some(CellState::Source));
        assert_eq!(grid.at(Point::new(3, 3)), Some(CellState::Source));
        assert_eq!(grid.count(CellState::OnPath), 0);
        assert_eq!(grid.count(CellState::SourceOnPath), 0);
        assert_eq!(grid.count(CellState::Open), 7);
    }

    #[test]
    fn status_goes_to_anchor() {
        use crate::testing::DisplayEvent;

        let mut grid = open_grid();
        let mut sink = RecordingSink::default();
        Replay::new(Duration::ZERO)
            .replay(&mut grid, &[0], 0, &mut sink)
            .unwrap();
        let anchor = status_anchor(3);
        assert!(sink.events.contains(&DisplayEvent::Cursor(anchor)));
        assert!(sink.events.contains(&DisplayEvent::Cursor(anchor.shift(0, 1))));
        assert_eq!(sink.statuses(), vec![DONE_STATUS, "Distance : 0"]);
    }

    #[test]
    fn unreachable_destination() {
        let mut grid = open_grid();
        let mut sink = RecordingSink::default();
        Replay::new(Duration::ZERO)
            .replay(&mut grid, &[], UNREACHABLE, &mut sink)
            .unwrap();
        assert!(sink.cells().is_empty());
        assert_eq!(sink.statuses(), vec![UNREACHABLE_STATUS]);
    }

    #[test]
    fn replay_is_repeatable() {
        let mut grid = open_grid();
        let before = grid.clone();
        let replay = Replay::new(Duration::ZERO);
        let mut first = RecordingSink::default();
        let mut second = RecordingSink::default();
        replay.replay(&mut grid, &[0, 3, 6, 7, 8], 4, &mut first).unwrap();
        replay.replay(&mut grid, &[0, 3, 6, 7, 8], 4, &mut second).unwrap();
        assert_eq!(first.events, second.events);
        assert_eq!(grid, before);
    }

    #[test]
    fn pauses_between_steps() {
        let mut grid = open_grid();
        let mut sink = RecordingSink::default();
        let start = Instant::now();
        Replay::new(Duration::from_millis(3))
            .replay(&mut grid, &[0, 1, 2, 5], 3, &mut sink)
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
