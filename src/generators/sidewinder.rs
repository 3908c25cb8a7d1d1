use crate::{
    maze::{Direction, Maze},
    random::RandomSource,
};

/// Works row by row, extending a run of cells to the right and, when a run is closed,
/// opening a passage upwards from one random cell of it.
///
/// The top row has nothing above it, so it becomes a single corridor.
pub fn sidewinder(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    (1..width).for_each(|x| maze.cell((x, 0)).carve(Direction::Left));

    for y in 1..height {
        let mut run = 0;
        for x in 0..width {
            run += 1;
            if run != 1 {
                maze.cell((x, y)).carve(Direction::Left);
            }
            // The last column always closes the run
            if x == width - 1 || rng.coin() {
                let member = x + 1 - run + rng.uniform(run);
                maze.cell((member, y)).carve(Direction::Up);
                run = 0;
            }
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidewinder_top_row_is_corridor() {
        let mut rng = RandomSource::from_seed(12);
        let maze = sidewinder(6, 4, &mut rng);
        assert!((1..6).all(|x| !maze.vertical_wall(x, 0)));
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_sidewinder_every_run_goes_up() {
        let mut rng = RandomSource::from_seed(30);
        let maze = sidewinder(8, 8, &mut rng);
        for y in 1..8 {
            // Split the row into runs at the walls that remain between cells
            let mut runs = vec![vec![0]];
            for x in 1..8 {
                if maze.vertical_wall(x, y) {
                    runs.push(Vec::new());
                }
                runs.last_mut().unwrap().push(x);
            }
            for run in runs {
                let ups = run.iter().filter(|&&x| !maze.horizontal_wall(x, y)).count();
                assert_eq!(ups, 1, "row {y}, run {run:?}");
            }
        }
    }

    #[test]
    fn test_sidewinder_single_column() {
        let mut rng = RandomSource::from_seed(2);
        let maze = sidewinder(1, 4, &mut rng);
        assert!((1..4).all(|y| !maze.horizontal_wall(0, y)));
    }
}
