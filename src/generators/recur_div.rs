use std::collections::VecDeque;

use crate::{
    maze::{Direction, Maze},
    random::RandomSource,
};

/// Rectangular part of the maze still waiting to be divided.
#[derive(Debug, Clone, Copy)]
struct Region {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

/// Starts from an open maze and keeps splitting regions with a wall that has a single
/// hole in it, until every region is one cell wide or one cell high.
pub fn recursive_division(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    // Clear all walls in the maze, except the boundary walls
    let mut maze = Maze::with_walls(width, height, false);

    let mut queue = VecDeque::from([Region {
        x: 0,
        y: 0,
        width,
        height,
    }]);

    while let Some(Region {
        x,
        y,
        width,
        height,
    }) = queue.pop_front()
    {
        if width == 1 || height == 1 {
            continue;
        }

        // Every inner grid line is a candidate, so wide regions tend to be cut vertically
        // and tall ones horizontally. The first `height - 1` lines are horizontal.
        let line = rng.uniform(width + height - 2);
        if line >= height - 1 {
            let left_width = line - (height - 1) + 1;
            let hole = rng.uniform(height);
            (0..height).filter(|&i| i != hole).for_each(|i| {
                maze.cell((x + left_width - 1, y + i)).build(Direction::Right);
            });
            queue.push_back(Region {
                x,
                y,
                width: left_width,
                height,
            });
            queue.push_back(Region {
                x: x + left_width,
                y,
                width: width - left_width,
                height,
            });
        } else {
            let upper_height = line + 1;
            let hole = rng.uniform(width);
            (0..width).filter(|&i| i != hole).for_each(|i| {
                maze.cell((x + i, y + upper_height - 1)).build(Direction::Down);
            });
            queue.push_back(Region {
                x,
                y,
                width,
                height: upper_height,
            });
            queue.push_back(Region {
                x,
                y: y + upper_height,
                width,
                height: height - upper_height,
            });
        }
    }

    maze
}
