//! The interactive maze session.
//!
//! A session cycles through the [`Phase`] states:
//!
//! ```text
//! GenerateMaze -> PromptSource -> RunEngine -> PromptDestination -> Replay
//!      ^                                                              |
//!      +------------------------ Advance -----------------------------+
//! ```
//!
//! `Replay` loops on itself for Repeat and ShowAll, and every prompt or key
//! wait can end in `Quit`.

use log::{debug, info};
use rand::Rng;

use maze_core::{
    CellState, CoordinateInput, DisplaySink, Grid, InputSource, MazeConfig, MazeError, Point,
    status_anchor,
};
use maze_gen::MapGen;
use maze_paths::{Adjacency, PathEngine, dump_all_destinations};

use crate::keys::{ReplayCommand, ReplayKeys};
use crate::replay::Replay;

pub const SOURCE_PROMPT: &str = "Source (x y): ";
pub const DESTINATION_PROMPT: &str = "Destination (x y): ";
pub const SEARCHING_STATUS: &str = "Finding shortest route ... ";

/// Where the session is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    GenerateMaze,
    PromptSource,
    RunEngine { source: Point },
    PromptDestination,
    Replay { destination: Point },
    Quit,
}

/// Outcome of one prompt.
enum Answer {
    Accepted(Point),
    Rejected,
    Quit,
}

/// Owns the grid, the graph, the engine results and the I/O back-ends for
/// the whole program run.
pub struct MazeSession<S: DisplaySink, I: InputSource, R: Rng> {
    config: MazeConfig,
    grid: Grid,
    adjacency: Adjacency,
    engine: PathEngine,
    mapgen: MapGen<R>,
    replay: Replay,
    keys: ReplayKeys,
    sink: S,
    input: I,
}

impl<S: DisplaySink, I: InputSource, R: Rng> MazeSession<S, I, R> {
    /// Fails with [`MazeError::InvalidConfig`] for an out-of-range config.
    pub fn new(config: MazeConfig, rng: R, sink: S, input: I) -> Result<Self, MazeError> {
        config.validate()?;
        let grid = Grid::new(config.side);
        let adjacency = Adjacency::build(&grid);
        let engine = PathEngine::new(grid.vertex_count());
        Ok(Self {
            replay: Replay::new(config.delay()),
            config,
            grid,
            adjacency,
            engine,
            mapgen: MapGen::new(rng),
            keys: ReplayKeys::default(),
            sink,
            input,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &PathEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Replace the maze with `grid` and rebuild the graph. Previous engine
    /// results are released.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), MazeError> {
        if grid.side() != self.config.side {
            return Err(MazeError::InvalidConfig(format!(
                "grid side {} does not match configured side {}",
                grid.side(),
                self.config.side
            )));
        }
        self.grid = grid;
        self.adjacency.rebuild(&self.grid);
        self.engine.release();
        Ok(())
    }

    /// Run until the user quits or the input closes.
    pub fn run(&mut self) -> Result<(), MazeError> {
        let mut phase = Phase::GenerateMaze;
        while phase != Phase::Quit {
            phase = match self.step(phase) {
                Ok(next) => next,
                Err(MazeError::InputClosed) => {
                    info!("input closed");
                    Phase::Quit
                }
                Err(e) => return Err(e),
            };
        }
        self.engine.release();
        info!("session ended");
        Ok(())
    }

    /// Perform one phase and return the next.
    pub fn step(&mut self, phase: Phase) -> Result<Phase, MazeError> {
        match phase {
            Phase::GenerateMaze => {
                self.generate()?;
                Ok(Phase::PromptSource)
            }
            Phase::PromptSource => {
                Ok(match self.prompt(SOURCE_PROMPT, |s| s == CellState::Open)? {
                    Answer::Accepted(p) => {
                        self.grid.set(p, CellState::Source);
                        Phase::RunEngine { source: p }
                    }
                    Answer::Rejected => Phase::PromptSource,
                    Answer::Quit => Phase::Quit,
                })
            }
            Phase::RunEngine { source } => {
                let v = self
                    .grid
                    .vertex_of(source)
                    .ok_or_else(|| MazeError::invalid_coordinate(source))?;
                self.engine.run(&self.adjacency, v)?;
                info!("shortest paths computed from {source}");
                Ok(Phase::PromptDestination)
            }
            Phase::PromptDestination => {
                Ok(match self.prompt(DESTINATION_PROMPT, CellState::is_passable)? {
                    Answer::Accepted(p) => {
                        self.grid.set(p, CellState::Source);
                        Phase::Replay { destination: p }
                    }
                    Answer::Rejected => Phase::PromptDestination,
                    Answer::Quit => Phase::Quit,
                })
            }
            Phase::Replay { destination } => self.replay_destination(destination),
            Phase::Quit => Ok(Phase::Quit),
        }
    }

    fn generate(&mut self) -> Result<(), MazeError> {
        self.engine.release();
        let open = self.mapgen.random_maze(&mut self.grid, self.config.chance);
        self.adjacency.rebuild(&self.grid);
        info!(
            "new {side}x{side} maze: {open} open cells, {} linked, {} edges",
            self.adjacency.linked_vertices(),
            self.adjacency.edge_count(),
            side = self.config.side
        );
        self.sink.render(&self.grid)
    }

    fn prompt(
        &mut self,
        label: &str,
        accept: impl Fn(CellState) -> bool,
    ) -> Result<Answer, MazeError> {
        self.sink.render(&self.grid)?;
        self.sink.set_cursor(status_anchor(self.grid.side()))?;
        self.sink.write_status(label)?;
        Ok(match self.input.read_coordinate_pair()? {
            CoordinateInput::Quit => Answer::Quit,
            CoordinateInput::Invalid => {
                debug!("unparsable coordinate answer");
                Answer::Rejected
            }
            CoordinateInput::Pair(p) => {
                let ok = self.grid.interior().contains(p)
                    && self.grid.at(p).is_some_and(&accept);
                if ok {
                    Answer::Accepted(p)
                } else {
                    debug!("{}", MazeError::invalid_coordinate(p));
                    Answer::Rejected
                }
            }
        })
    }

    fn replay_destination(&mut self, destination: Point) -> Result<Phase, MazeError> {
        let v = self
            .grid
            .vertex_of(destination)
            .ok_or_else(|| MazeError::invalid_coordinate(destination))?;

        self.sink.render(&self.grid)?;
        self.sink.set_cursor(status_anchor(self.grid.side()))?;
        self.sink.write_status(SEARCHING_STATUS)?;

        let path = self.engine.path(v).unwrap_or_default();
        let distance = self.engine.distance(v);
        self.replay.replay(&mut self.grid, path, distance, &mut self.sink)?;

        let key = self.input.read_key()?;
        Ok(match self.keys.command(&key) {
            ReplayCommand::Quit => Phase::Quit,
            ReplayCommand::Advance => Phase::GenerateMaze,
            ReplayCommand::Repeat => Phase::Replay { destination },
            ReplayCommand::ShowAll => {
                let report = dump_all_destinations(self.engine.distances(), self.engine.paths());
                self.sink.show_report(&report)?;
                self.input.read_key()?;
                Phase::Replay { destination }
            }
        })
    }
}
