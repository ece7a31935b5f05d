use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
};
use log::trace;

use maze_core::{CoordinateInput, InputSource, Key, MazeError, parse_coordinate_pair};

/// Longest accepted coordinate line.
const MAX_LINE: usize = 16;

/// Maps a crossterm key event to a [`Key`]. Ctrl-C maps to Escape.
fn to_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Keyboard input from the terminal. Expects raw mode to be enabled.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn read_key(&mut self) -> Result<Key, MazeError> {
        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                if let Some(key) = to_key(code, modifiers) {
                    trace!("key {key:?}");
                    return Ok(key);
                }
            }
        }
    }

    /// Line editor at the current cursor: echoes typed characters, supports
    /// Backspace, ends on Enter. Escape gives up the prompt.
    fn read_coordinate_pair(&mut self) -> Result<CoordinateInput, MazeError> {
        let mut out = io::stdout();
        execute!(out, cursor::Show)?;
        let mut line = String::new();

        let result = loop {
            match self.read_key()? {
                Key::Enter => break parse_coordinate_pair(&line),
                Key::Escape => break CoordinateInput::Quit,
                Key::Backspace => {
                    if line.pop().is_some() {
                        execute!(out, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
                    }
                }
                Key::Char(c) if line.len() < MAX_LINE && (c.is_ascii_graphic() || c == ' ') => {
                    line.push(c);
                    execute!(out, Print(c))?;
                }
                _ => {}
            }
        };

        execute!(out, cursor::Hide)?;
        out.flush()?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_keys() {
        assert_eq!(
            to_key(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Key::Char('q'))
        );
        assert_eq!(
            to_key(KeyCode::Char(' '), KeyModifiers::NONE),
            Some(Key::Char(' '))
        );
        assert_eq!(to_key(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Enter));
        assert_eq!(to_key(KeyCode::F(5), KeyModifiers::NONE), None);
    }

    #[test]
    fn ctrl_c_escapes() {
        assert_eq!(
            to_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Key::Escape)
        );
    }
}
