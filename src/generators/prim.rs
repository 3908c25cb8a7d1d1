use crate::{
    generators::Edge,
    maze::{Direction, Maze, Orientation},
    random::RandomSource,
};

/// Grows the maze from a random cell by repeatedly opening a random frontier edge, i.e.
/// an edge with at least one end inside the maze.
pub fn randomized_prim(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    // Out-of-bounds cells read as visited so no edge ever leaves the grid
    let mut visited = maze.matrix(false, true);

    // The starting point is fed in as an edge whose near end is the start cell
    let start = (rng.uniform(width), rng.uniform(height));
    let mut frontiers = vec![Edge::new(Orientation::Horizontal, start.0, start.1)];
    let mut first = true;

    while !frontiers.is_empty() {
        // Randomly select an edge from the frontiers
        let idx = rng.uniform(frontiers.len());
        let edge = frontiers.swap_remove(idx);

        let mut pos = edge.near();
        if visited.get(pos) {
            pos = edge.far();
        }
        if visited.get(pos) {
            // Both ends already belong to the maze
            continue;
        }
        visited.set(pos, true);

        if first {
            first = false;
        } else {
            maze.remove_wall_after(edge.near(), edge.orientation);
        }

        let (x, y) = pos;
        if !visited.get(Direction::Left.step(pos)) {
            frontiers.push(Edge::new(Orientation::Vertical, x - 1, y));
        }
        if !visited.get(Direction::Right.step(pos)) {
            frontiers.push(Edge::new(Orientation::Vertical, x, y));
        }
        if !visited.get(Direction::Up.step(pos)) {
            frontiers.push(Edge::new(Orientation::Horizontal, x, y - 1));
        }
        if !visited.get(Direction::Down.step(pos)) {
            frontiers.push(Edge::new(Orientation::Horizontal, x, y));
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randomized_prim() {
        let mut rng = RandomSource::from_seed(0);
        let maze = randomized_prim(7, 7, &mut rng);
        assert!(maze.is_perfect());
        // Check that there are still some walls in the maze
        assert!(maze.passage_count() < 2 * 7 * 7 - 7 - 7);
    }

    #[test]
    fn test_randomized_prim_two_cells() {
        let mut rng = RandomSource::from_seed(5);
        let maze = randomized_prim(2, 1, &mut rng);
        assert_eq!(maze.render("#", "."), "#####\n#...#\n#####\n");
    }
}
