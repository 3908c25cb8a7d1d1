use crate::{
    maze::{Direction, Maze},
    random::RandomSource,
};

/// Per-cell state of the loop-erased walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trail {
    /// Not part of the maze and not on the current walk.
    Pending,
    /// On the current walk; the direction the walk last left this cell in.
    Exit(Direction),
    /// Part of the maze.
    InMaze,
}

/// Loop-erased random walks from every cell not yet in the maze until they hit it.
///
/// Only the last exit taken from each cell is remembered, so replaying the walk from its
/// start skips every loop it made. Like Aldous-Broder the result is uniformly random.
pub fn wilson(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    let mut trail = maze.matrix(Trail::Pending, Trail::Pending);
    trail.set((0, 0), Trail::InMaze);

    for y in 0..height {
        for x in 0..width {
            if trail.get((x, y)) == Trail::InMaze {
                continue;
            }

            let mut pos = (x, y);
            let mut steps = 0usize;
            while trail.get(pos) != Trail::InMaze {
                let direction =
                    Direction::from_index(rng.select_set_bit(maze.in_bounds_mask(pos)));
                trail.set(pos, Trail::Exit(direction));
                pos = direction.step(pos);
                steps += 1;
            }
            tracing::trace!("[wilson] walk from {:?} took {} steps", (x, y), steps);

            pos = (x, y);
            while let Trail::Exit(direction) = trail.get(pos) {
                trail.set(pos, Trail::InMaze);
                maze.cell(pos).carve(direction);
                pos = direction.step(pos);
            }
        }
    }

    maze
}
