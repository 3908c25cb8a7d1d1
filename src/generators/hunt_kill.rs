use crate::{
    maze::{Direction, Matrix, Maze},
    random::RandomSource,
};

/// First visited cell, in row-major order, that still has an unvisited neighbor.
fn hunt(visited: &Matrix<bool>) -> Option<(usize, usize)> {
    (0..visited.height())
        .flat_map(|y| (0..visited.width()).map(move |x| (x, y)))
        .find(|&pos| visited.get(pos) && visited.surrounding(pos) != 0b1111)
}

/// Carves a random walk until it runs into a dead end, then hunts for a visited cell
/// bordering unvisited ones and walks again from there.
pub fn hunt_and_kill(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    // Out-of-bounds neighbors count as visited so the walk never leaves the grid
    let mut visited = maze.matrix(false, true);

    let mut pos = (rng.uniform(width), rng.uniform(height));
    visited.set(pos, true);
    let mut remaining = width * height - 1;
    let mut hunts = 0usize;

    while remaining > 0 {
        let unvisited = !visited.surrounding(pos) & 0b1111;
        if unvisited != 0 {
            let direction = Direction::from_index(rng.select_set_bit(unvisited));
            maze.cell(pos).carve(direction);
            pos = direction.step(pos);
            visited.set(pos, true);
            remaining -= 1;
        } else {
            let Some(found) = hunt(&visited) else {
                break;
            };
            pos = found;
            hunts += 1;
        }
    }

    tracing::trace!("[hunt-and-kill] finished after {} hunts", hunts);
    maze
}
