pub mod algorithms;
pub mod array;
pub mod dims;
pub mod grid;
pub mod maze;
pub mod registry;

pub use algorithms::{Algorithm, AlgorithmType};
pub use maze::{Maze, MazeError};
