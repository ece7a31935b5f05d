//! mazeviz: watch Dijkstra find its way through a random maze.

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use maze_core::MazeConfig;
use maze_core::config::{DEFAULT_CHANCE, DEFAULT_DELAY_MS, DEFAULT_SIDE};
use maze_crossterm::{CrosstermDisplay, CrosstermInput};
use mazeviz_lib::MazeSession;

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interior side length of the maze
    #[arg(short, long, default_value_t = DEFAULT_SIDE)]
    side: i32,

    /// Milliseconds between animated path steps
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,

    /// Density parameter; a cell is open with probability chance/(chance+2)
    #[arg(short, long, default_value_t = DEFAULT_CHANCE)]
    chance: u32,

    /// Seed for the maze generator
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> MazeConfig {
        MazeConfig {
            side: self.side,
            delay_ms: self.delay,
            chance: self.chance,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr, underneath the alternate screen.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let config = Args::parse().config();
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    info!("starting: {config:?}, seed {seed}");

    let mut display = CrosstermDisplay::new();
    display.init()?;
    let result = MazeSession::new(
        config,
        StdRng::seed_from_u64(seed),
        &mut display,
        CrosstermInput::new(),
    )
    .and_then(|mut session| session.run());
    display.close();

    result?;
    Ok(())
}
