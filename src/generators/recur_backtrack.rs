use crate::{
    maze::{Direction, Maze},
    random::RandomSource,
};

pub fn recursive_backtrack(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    let mut visited = maze.matrix(false, true);

    // The stack keeps the current path, starting from a random cell
    let mut stack = vec![(rng.uniform(width), rng.uniform(height))];

    while let Some(&cell) = stack.last() {
        let unvisited = !visited.surrounding(cell) & 0b1111;
        visited.set(cell, true);

        if unvisited != 0 {
            let direction = Direction::from_index(rng.select_set_bit(unvisited));
            maze.cell(cell).carve(direction);
            // Keep the cell below the neighbor so we can come back to it later
            stack.push(direction.step(cell));
        } else {
            stack.pop();
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_backtrack_is_perfect() {
        for seed in 0..10 {
            let mut rng = RandomSource::from_seed(seed);
            let maze = recursive_backtrack(13, 6, &mut rng);
            assert!(maze.is_perfect(), "seed {seed}");
        }
    }

    #[test]
    fn test_recursive_backtrack_same_seed_same_maze() {
        let first = recursive_backtrack(8, 8, &mut RandomSource::from_seed(77));
        let second = recursive_backtrack(8, 8, &mut RandomSource::from_seed(77));
        assert_eq!(first, second);
    }
}
