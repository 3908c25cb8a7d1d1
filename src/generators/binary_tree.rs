use crate::{
    maze::{Direction, Maze},
    random::RandomSource,
};

/// Links every cell except the origin to its upper or left neighbor.
///
/// Cells in the top row can only go left and cells in the left column can only go up,
/// which leaves an open corridor along both of those edges.
pub fn binary_tree(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let direction = match (x, y) {
                (0, 0) => continue,
                (0, _) => Direction::Up,
                (_, 0) => Direction::Left,
                _ => {
                    if rng.coin() {
                        Direction::Up
                    } else {
                        Direction::Left
                    }
                }
            };
            maze.cell((x, y)).carve(direction);
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_tree_single_row_is_corridor() {
        let mut rng = RandomSource::from_seed(0);
        let maze = binary_tree(3, 1, &mut rng);
        assert_eq!(maze.render("#", "."), "#######\n#.....#\n#######\n");
    }

    #[test]
    fn test_binary_tree_top_row_and_left_column_are_open() {
        let mut rng = RandomSource::from_seed(8);
        let maze = binary_tree(6, 5, &mut rng);
        assert!((1..6).all(|x| !maze.wall((x, 0), Direction::Left)));
        assert!((1..5).all(|y| !maze.wall((0, y), Direction::Up)));
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_binary_tree_each_cell_opens_up_or_left() {
        let mut rng = RandomSource::from_seed(21);
        let maze = binary_tree(7, 7, &mut rng);
        for y in 1..7 {
            for x in 1..7 {
                let up = !maze.wall((x, y), Direction::Up);
                let left = !maze.wall((x, y), Direction::Left);
                assert!(up ^ left, "cell ({x}, {y})");
            }
        }
    }
}
