use crate::{
    maze::{Direction, FlatDisjointSet, Maze},
    random::RandomSource,
};

/// Builds the maze one row at a time, only ever tracking the sets of the current row.
///
/// Adjacent cells of different sets are merged at random, then every set drops at least
/// one passage into the next row. The last row joins whatever sets are still apart.
pub fn eller(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    // `next` holds the sets carried into the row below; cells nobody dropped into stay alone
    let mut current = FlatDisjointSet::new(width);
    let mut next = FlatDisjointSet::new(width);
    let mut members = vec![Vec::new(); width];

    for y in 0..height - 1 {
        std::mem::swap(&mut current, &mut next);
        next.reset();

        for x in 0..width - 1 {
            if rng.coin() && current.join(x, x + 1) {
                maze.cell((x, y)).carve(Direction::Right);
            }
        }

        members.iter_mut().for_each(Vec::clear);
        for x in 0..width {
            let root = current.find(x);
            members[root].push(x);
        }

        for set in members.iter().filter(|set| !set.is_empty()) {
            let mut selected = None;
            while selected.is_none() {
                for &x in set {
                    if rng.coin() {
                        let root = *selected.get_or_insert(x);
                        next.attach(x, root);
                        maze.cell((x, y)).carve(Direction::Down);
                    }
                }
            }
        }
    }

    for x in 0..width - 1 {
        if next.join(x, x + 1) {
            maze.cell((x, height - 1)).carve(Direction::Right);
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eller_is_perfect() {
        for seed in 0..20 {
            let mut rng = RandomSource::from_seed(seed);
            let maze = eller(9, 8, &mut rng);
            assert!(maze.is_perfect(), "seed {seed}");
        }
    }

    #[test]
    fn test_eller_single_row_is_corridor() {
        let mut rng = RandomSource::from_seed(1);
        let maze = eller(5, 1, &mut rng);
        assert_eq!(maze.passage_count(), 4);
        assert!((1..5).all(|x| !maze.vertical_wall(x, 0)));
    }

    #[test]
    fn test_eller_every_row_drops_down() {
        let mut rng = RandomSource::from_seed(6);
        let maze = eller(10, 6, &mut rng);
        for y in 1..6 {
            assert!(
                (0..10).any(|x| !maze.horizontal_wall(x, y)),
                "no passage between rows {} and {}",
                y - 1,
                y
            );
        }
    }
}
