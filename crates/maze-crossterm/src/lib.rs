//! Crossterm terminal back-end for the maze visualizer.
//!
//! Provides a [`CrosstermDisplay`] that implements [`maze_core::DisplaySink`]
//! and a [`CrosstermInput`] that implements [`maze_core::InputSource`].

mod input;

pub use input::CrosstermInput;

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use maze_core::{CellState, DisplaySink, Grid, MazeError, Point, cell_origin};

/// Foreground colour and two-column glyph for a cell state.
fn glyph(state: CellState) -> (Color, bool, &'static str) {
    match state {
        CellState::Blocked => (Color::White, false, "██"),
        CellState::Open => (Color::Reset, false, "  "),
        CellState::OnPath => (Color::Yellow, true, "[]"),
        CellState::Source => (Color::DarkYellow, false, "X0"),
        CellState::SourceOnPath => (Color::Yellow, true, "X0"),
    }
}

/// Label colour for row/column number `i`: odd cyan, even yellow.
fn label_color(i: i32) -> Color {
    if i % 2 == 1 { Color::Cyan } else { Color::Yellow }
}

/// A terminal display sink using crossterm.
pub struct CrosstermDisplay {
    out: Stdout,
    active: bool,
}

impl CrosstermDisplay {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> Result<(), MazeError> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    fn queue_cell(&mut self, p: Point, state: CellState) -> io::Result<()> {
        let origin = cell_origin(p);
        let (fg, bold, text) = glyph(state);
        queue!(
            self.out,
            cursor::MoveTo(origin.x as u16, origin.y as u16),
            SetForegroundColor(fg)
        )?;
        if bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset), ResetColor)
    }

    fn queue_labels(&mut self, side: i32) -> io::Result<()> {
        // Column numbers above the interior, right-aligned on each cell.
        for i in 1..=side {
            let origin = cell_origin(Point::new(i, 0));
            queue!(
                self.out,
                cursor::MoveTo(origin.x as u16, 0),
                SetForegroundColor(label_color(i)),
                SetAttribute(Attribute::Bold),
                Print(format!("{i:02}"))
            )?;
        }
        // Row numbers after the right border.
        for i in 1..=side {
            let origin = cell_origin(Point::new(side + 2, i));
            queue!(
                self.out,
                cursor::MoveTo(origin.x as u16, origin.y as u16),
                SetForegroundColor(label_color(i)),
                SetAttribute(Attribute::Bold),
                Print(format!("{i:02}"))
            )?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)
    }
}

impl Default for CrosstermDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermDisplay {
    fn drop(&mut self) {
        self.close();
    }
}

impl DisplaySink for CrosstermDisplay {
    fn render(&mut self, grid: &Grid) -> Result<(), MazeError> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        self.queue_labels(grid.side())?;
        for (p, state) in grid.iter() {
            self.queue_cell(p, state)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_cell(&mut self, p: Point, state: CellState) -> Result<(), MazeError> {
        self.queue_cell(p, state)?;
        self.out.flush()?;
        Ok(())
    }

    fn set_cursor(&mut self, pos: Point) -> Result<(), MazeError> {
        execute!(self.out, cursor::MoveTo(pos.x as u16, pos.y as u16))?;
        Ok(())
    }

    fn write_status(&mut self, text: &str) -> Result<(), MazeError> {
        queue!(
            self.out,
            terminal::Clear(ClearType::UntilNewLine),
            Print(text)
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn show_report(&mut self, report: &str) -> Result<(), MazeError> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // Raw mode: lines need an explicit carriage return.
        for line in report.lines() {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        queue!(self.out, Print("\r\nPress any key to continue . . ."))?;
        self.out.flush()?;
        Ok(())
    }
}
