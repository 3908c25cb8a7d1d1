//! Perfect maze generation.
//!
//! A [`Maze`](maze::Maze) is a rectangular grid of walls. Each of the ten
//! [`generators`] removes walls until the cells form a spanning tree: every cell
//! reachable from every other one along exactly one path.

pub mod generators;
pub mod maze;
pub mod random;

pub use generators::{Generator, UnknownGenerator, generate, generate_maze};
pub use maze::{Direction, Maze, Orientation};
pub use random::RandomSource;
