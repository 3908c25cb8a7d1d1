use crate::{
    maze::{Direction, Maze},
    random::RandomSource,
};

/// Random walk over the whole grid, carving only when stepping into a cell for the first
/// time. Produces a uniformly random spanning tree, but may need many steps to finish.
pub fn aldous_broder(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    let mut visited = maze.matrix(false, false);

    let mut pos = (rng.uniform(width), rng.uniform(height));
    visited.set(pos, true);
    let mut remaining = width * height - 1;
    let mut steps = 0usize;

    while remaining > 0 {
        // Any in-bounds neighbor is a candidate, visited or not
        let direction = Direction::from_index(rng.select_set_bit(maze.in_bounds_mask(pos)));
        let next = direction.step(pos);
        if !visited.get(next) {
            maze.cell(pos).carve(direction);
            visited.set(next, true);
            remaining -= 1;
        }
        pos = next;
        steps += 1;
    }

    tracing::trace!("[aldous-broder] walk finished after {} steps", steps);
    maze
}
