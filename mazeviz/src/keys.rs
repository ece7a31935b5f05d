//! Key bindings for the post-replay decision point.

use maze_core::Key;

/// What to do after a replay finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayCommand {
    /// Leave the program.
    Quit,
    /// Show the table of every destination, then replay again.
    ShowAll,
    /// Generate a new maze.
    Advance,
    /// Replay the same destination again.
    Repeat,
}

/// Key bindings for the replay loop. Keys not listed mean
/// [`ReplayCommand::Repeat`].
#[derive(Debug, Clone)]
pub struct ReplayKeys {
    pub quit: Vec<Key>,
    pub show_all: Vec<Key>,
    pub advance: Vec<Key>,
}

impl Default for ReplayKeys {
    fn default() -> Self {
        Self {
            quit: vec![Key::Char('q'), Key::Char('Q'), Key::Escape],
            show_all: vec![Key::Char(' ')],
            advance: vec![Key::Enter],
        }
    }
}

impl ReplayKeys {
    pub fn command(&self, key: &Key) -> ReplayCommand {
        if self.quit.contains(key) {
            ReplayCommand::Quit
        } else if self.show_all.contains(key) {
            ReplayCommand::ShowAll
        } else if self.advance.contains(key) {
            ReplayCommand::Advance
        } else {
            ReplayCommand::Repeat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = ReplayKeys::default();
        assert_eq!(keys.command(&Key::Char('q')), ReplayCommand::Quit);
        assert_eq!(keys.command(&Key::Escape), ReplayCommand::Quit);
        assert_eq!(keys.command(&Key::Char(' ')), ReplayCommand::ShowAll);
        assert_eq!(keys.command(&Key::Enter), ReplayCommand::Advance);
        assert_eq!(keys.command(&Key::Char('r')), ReplayCommand::Repeat);
        assert_eq!(keys.command(&Key::ArrowUp), ReplayCommand::Repeat);
    }

    #[test]
    fn custom_bindings() {
        let keys = ReplayKeys {
            quit: vec![Key::Char('x')],
            ..ReplayKeys::default()
        };
        assert_eq!(keys.command(&Key::Char('x')), ReplayCommand::Quit);
        assert_eq!(keys.command(&Key::Char('q')), ReplayCommand::Repeat);
    }
}
