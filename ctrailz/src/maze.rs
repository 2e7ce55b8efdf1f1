use std::{fmt, sync::Arc};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{
    algorithms::{default_registry, Algorithm, AlgorithmRegistry, AlgorithmType, Random},
    grid::Grid,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Algorithm '{0}' is not registered")]
    UnknownAlgorithm(AlgorithmType),
    #[error("Unknown algorithm name '{0}'")]
    InvalidAlgorithmName(String),
}

/// Perfect maze, carved into a rectangular grid by one of the registered algorithms.
///
/// The grid is always carved, from construction on. Every [`Maze::resize`] and
/// [`Maze::rebuild`] replaces the passages with a freshly carved set.
///
/// ```
/// use ctrailz::{algorithms::AlgorithmType, maze::Maze};
///
/// let maze = Maze::new(10, 10, AlgorithmType::BinaryTree).unwrap();
/// println!("{}", maze);
/// ```
#[derive(Debug)]
pub struct Maze {
    algorithm: AlgorithmType,
    algorithms: Arc<AlgorithmRegistry>,
    grid: Grid,
    rng: Random,
    seed: u64,
}

impl Maze {
    /// Creates a maze with a random seed, using the built-in algorithms.
    ///
    /// Non-positive dimensions are treated as `1`.
    pub fn new(rows: i32, cols: i32, algorithm: AlgorithmType) -> Result<Self, MazeError> {
        Self::with_registry(rows, cols, algorithm, default_registry(), None)
    }

    /// Same as [`Maze::new`], but deterministic.
    pub fn with_seed(
        rows: i32,
        cols: i32,
        algorithm: AlgorithmType,
        seed: u64,
    ) -> Result<Self, MazeError> {
        Self::with_registry(rows, cols, algorithm, default_registry(), Some(seed))
    }

    /// Creates a maze dispatching to the given set of algorithms.
    pub fn with_registry(
        rows: i32,
        cols: i32,
        algorithm: AlgorithmType,
        algorithms: Arc<AlgorithmRegistry>,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());

        let mut maze = Maze {
            algorithm,
            algorithms,
            grid: Grid::new(0, 0),
            rng: Random::seed_from_u64(seed),
            seed,
        };
        maze.resize(rows, cols, Some(algorithm))?;

        Ok(maze)
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Seed the random generator of this maze was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replaces the grid with a new one of the given size and carves it.
    ///
    /// When `algorithm` is `None`, the current one is used. Non-positive dimensions are treated
    /// as `1`.
    pub fn resize(
        &mut self,
        rows: i32,
        cols: i32,
        algorithm: Option<AlgorithmType>,
    ) -> Result<(), MazeError> {
        let rows = clamp_dimension("rows", rows);
        let cols = clamp_dimension("cols", cols);
        let algorithm = algorithm.unwrap_or(self.algorithm);
        self.carver(algorithm)?;

        self.grid = Grid::new(rows, cols);
        self.rebuild(algorithm)
    }

    /// Removes every passage and carves the grid again with `algorithm`.
    ///
    /// Fails without touching the maze if the algorithm isn't registered.
    pub fn rebuild(&mut self, algorithm: AlgorithmType) -> Result<(), MazeError> {
        let carver = self.carver(algorithm)?;

        log::debug!(
            "Rebuilding {}x{} maze with {}",
            self.grid.rows(),
            self.grid.cols(),
            algorithm
        );

        self.algorithm = algorithm;
        self.grid.reset();
        carver.process(&mut self.grid, &mut self.rng);

        Ok(())
    }

    fn carver(&self, algorithm: AlgorithmType) -> Result<Arc<dyn Algorithm>, MazeError> {
        self.algorithms
            .get(&algorithm)
            .ok_or(MazeError::UnknownAlgorithm(algorithm))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

fn clamp_dimension(name: &str, value: i32) -> usize {
    if value < 1 {
        log::warn!("Invalid value for {} ({}), using 1", name, value);
    }

    value.max(1) as usize
}
