//! Input values: [`Key`] and [`CoordinateInput`].

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Backspace,
    /// A printable character. Space arrives as `Char(' ')`.
    Char(char),
}

// ---------------------------------------------------------------------------
// CoordinateInput
// ---------------------------------------------------------------------------

/// Result of reading one coordinate prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateInput {
    /// Two integers were entered, as `(x, y)` = (column, row), 1-based.
    Pair(Point),
    /// The line could not be parsed.
    Invalid,
    /// The user asked to leave.
    Quit,
}

/// Parse a prompt line such as `"3 7"` or `"3,7"`.
///
/// A line consisting of `q` (any case) yields [`CoordinateInput::Quit`].
pub fn parse_coordinate_pair(line: &str) -> CoordinateInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return CoordinateInput::Quit;
    }
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return CoordinateInput::Invalid;
    };
    match (x.parse::<i32>(), y.parse::<i32>()) {
        (Ok(x), Ok(y)) => CoordinateInput::Pair(Point::new(x, y)),
        _ => CoordinateInput::Invalid,
    }
}
