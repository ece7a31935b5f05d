//! Runtime configuration: [`MazeConfig`].

use std::time::Duration;

use crate::error::MazeError;

/// Default interior side length.
pub const DEFAULT_SIDE: i32 = 32;
/// Default pause between animated path steps, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 15;
/// Default density parameter. Open probability is `chance / (chance + 2)`.
pub const DEFAULT_CHANCE: u32 = 6;

/// Largest accepted side. The engine is O(V²) in the vertex count.
pub const MAX_SIDE: i32 = 64;
/// Largest accepted density parameter.
pub const MAX_CHANCE: u32 = 1000;

/// Settings for one visualizer process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Interior side length; the graph has `side²` vertices.
    pub side: i32,
    /// Milliseconds between animated path steps.
    pub delay_ms: u64,
    /// Density parameter; lower means more blocked cells.
    pub chance: u32,
    /// RNG seed. `None` draws a fresh seed per process.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            delay_ms: DEFAULT_DELAY_MS,
            chance: DEFAULT_CHANCE,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), MazeError> {
        if !(1..=MAX_SIDE).contains(&self.side) {
            return Err(MazeError::InvalidConfig(format!(
                "side must be in 1..={MAX_SIDE}, got {}",
                self.side
            )));
        }
        if self.chance > MAX_CHANCE {
            return Err(MazeError::InvalidConfig(format!(
                "chance must be at most {MAX_CHANCE}, got {}",
                self.chance
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
