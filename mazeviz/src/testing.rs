//! Test doubles: a display sink that records calls and scripted input.

use std::collections::VecDeque;

use maze_core::{
    CellState, CoordinateInput, DisplaySink, Grid, InputSource, Key, MazeError, Point,
    parse_coordinate_pair,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Render,
    Cell(Point, CellState),
    Cursor(Point),
    Status(String),
    Report(String),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<DisplayEvent>,
}

impl RecordingSink {
    pub fn statuses(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Status(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn cells(&self) -> Vec<(Point, CellState)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Cell(p, s) => Some((*p, *s)),
                _ => None,
            })
            .collect()
    }

    pub fn renders(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DisplayEvent::Render))
            .count()
    }

    pub fn reports(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Report(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, _grid: &Grid) -> Result<(), MazeError> {
        self.events.push(DisplayEvent::Render);
        Ok(())
    }

    fn render_cell(&mut self, p: Point, state: CellState) -> Result<(), MazeError> {
        self.events.push(DisplayEvent::Cell(p, state));
        Ok(())
    }

    fn set_cursor(&mut self, pos: Point) -> Result<(), MazeError> {
        self.events.push(DisplayEvent::Cursor(pos));
        Ok(())
    }

    fn write_status(&mut self, text: &str) -> Result<(), MazeError> {
        self.events.push(DisplayEvent::Status(text.to_string()));
        Ok(())
    }

    fn show_report(&mut self, report: &str) -> Result<(), MazeError> {
        self.events.push(DisplayEvent::Report(report.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Scripted {
    Line(&'static str),
    Key(Key),
}

/// Input that replays a fixed script, then reports the input as closed.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Scripted>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_coordinate_pair(&mut self) -> Result<CoordinateInput, MazeError> {
        match self.script.pop_front() {
            Some(Scripted::Line(line)) => Ok(parse_coordinate_pair(line)),
            Some(other) => panic!("expected a coordinate line, script has {other:?}"),
            None => Err(MazeError::InputClosed),
        }
    }

    fn read_key(&mut self) -> Result<Key, MazeError> {
        match self.script.pop_front() {
            Some(Scripted::Key(key)) => Ok(key),
            Some(other) => panic!("expected a key, script has {other:?}"),
            None => Err(MazeError::InputClosed),
        }
    }
}
