pub mod cell;
pub mod disjoint_set;
pub mod matrix;

use std::{collections::VecDeque, fmt};

pub use cell::CellMut;
pub use disjoint_set::{DisjointSet, FlatDisjointSet};
pub use matrix::{Matrix, MatrixCell};

/// Orientation of the wall separating a cell from the neighbor that comes after it.
/// - `Vertical`: the wall to the right of the cell (between `(x, y)` and `(x + 1, y)`)
/// - `Horizontal`: the wall below the cell (between `(x, y)` and `(x, y + 1)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One of the four neighbors of a cell.
///
/// The discriminant is the bit index the direction occupies in a 4-bit direction mask,
/// so `Left` is bit 3 and `Down` is bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down = 0,
    Up = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Mask with only this direction's bit set.
    pub fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Direction for a bit index as returned by `RandomSource::select_set_bit`.
    /// Only the two lowest bits are considered.
    pub fn from_index(index: u8) -> Self {
        match index & 0b11 {
            3 => Direction::Left,
            2 => Direction::Right,
            1 => Direction::Up,
            _ => Direction::Down,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The coordinate one step away in this direction.
    pub fn step(self, (x, y): (usize, usize)) -> (usize, usize) {
        // NOTE: Stepping left of column 0 or above row 0 wraps to usize::MAX, and stepping
        // right/down saturates, so the result is simply out of bounds instead of underflowing.
        match self {
            Direction::Left => (x.wrapping_sub(1), y),
            Direction::Right => (x.saturating_add(1), y),
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Down => (x, y.saturating_add(1)),
        }
    }
}

/// A rectangular maze stored as two wall arrays.
///
/// `horizontal` holds, for every column, the wall above each row plus the closing wall
/// below the last row. `vertical` holds, for every row, the wall left of each column plus
/// the closing wall right of the last column. Border walls are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    horizontal: Box<[bool]>,
    vertical: Box<[bool]>,
}

impl Maze {
    /// Creates a fully walled maze with the given width and height.
    pub fn new(width: usize, height: usize) -> Self {
        Maze::with_walls(width, height, true)
    }

    /// Creates a maze whose interior walls are all set to `interior`.
    /// Border walls are present regardless of `interior`.
    pub fn with_walls(width: usize, height: usize, interior: bool) -> Self {
        let mut maze = Maze {
            width,
            height,
            horizontal: vec![interior; width * (height + 1)].into_boxed_slice(),
            vertical: vec![interior; (width + 1) * height].into_boxed_slice(),
        };
        (0..width).for_each(|x| {
            let top = maze.horizontal_index(x, 0);
            let bottom = maze.horizontal_index(x, height);
            maze.horizontal[top] = true;
            maze.horizontal[bottom] = true;
        });
        (0..height).for_each(|y| {
            let left = maze.vertical_index(0, y);
            let right = maze.vertical_index(width, y);
            maze.vertical[left] = true;
            maze.vertical[right] = true;
        });
        maze
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    fn horizontal_index(&self, x: usize, y: usize) -> usize {
        x * (self.height + 1) + y
    }

    fn vertical_index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    /// Wall above row `y` in column `x`; `y == height` is the bottom border.
    pub fn horizontal_wall(&self, x: usize, y: usize) -> bool {
        self.horizontal[self.horizontal_index(x, y)]
    }

    /// Wall left of column `x` in row `y`; `x == width` is the right border.
    pub fn vertical_wall(&self, x: usize, y: usize) -> bool {
        self.vertical[self.vertical_index(x, y)]
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, (x, y): (usize, usize)) -> bool {
        x < self.width && y < self.height
    }

    /// Returns whether the wall on the given side of a cell is present.
    pub fn wall(&self, (x, y): (usize, usize), direction: Direction) -> bool {
        match direction {
            Direction::Left => self.vertical_wall(x, y),
            Direction::Right => self.vertical_wall(x + 1, y),
            Direction::Up => self.horizontal_wall(x, y),
            Direction::Down => self.horizontal_wall(x, y + 1),
        }
    }

    /// Mask of the directions whose neighbor lies inside the maze.
    pub fn in_bounds_mask(&self, (x, y): (usize, usize)) -> u8 {
        let mut mask = 0;
        if x > 0 {
            mask |= Direction::Left.bit();
        }
        if x + 1 < self.width {
            mask |= Direction::Right.bit();
        }
        if y > 0 {
            mask |= Direction::Up.bit();
        }
        if y + 1 < self.height {
            mask |= Direction::Down.bit();
        }
        mask
    }

    /// Mutable view of the four walls around the cell at `pos`.
    pub fn cell(&mut self, pos: (usize, usize)) -> CellMut<'_> {
        CellMut::new(self, pos)
    }

    /// Removes the wall between `from` and the neighbor after it.
    ///
    /// # Arguments
    /// * `from` - The cell coordinate (x, y) to remove a wall from
    /// * `orientation` - The orientation of the wall to remove:
    ///   - `Vertical`: Removes the wall to the right of the cell
    ///   - `Horizontal`: Removes the wall below the cell
    ///
    /// # Panics
    /// * If `from` is out of bounds
    pub fn remove_wall_after(&mut self, from: (usize, usize), orientation: Orientation) {
        let direction = match orientation {
            Orientation::Vertical => Direction::Right,
            Orientation::Horizontal => Direction::Down,
        };
        self.cell(from).carve(direction);
    }

    /// Creates a per-cell matrix sized like this maze, filled with `val` and answering
    /// `out` for every coordinate outside the maze.
    pub fn matrix<T: Clone>(&self, val: T, out: T) -> Matrix<T> {
        Matrix::new(self.width, self.height, val, out)
    }

    /// Creates a union-find over every cell of this maze.
    pub fn disjoint_set(&self) -> DisjointSet {
        DisjointSet::new(self.width, self.height)
    }

    /// Renders the maze as `2 * height + 1` lines of `2 * width + 1` tokens.
    ///
    /// Even rows and even columns are grid lines; a token on a grid line is `wall` when the
    /// wall there is present and `blank` otherwise. Odd row/odd column positions are the
    /// cells themselves and are always `blank`. Every line ends with `\n`.
    pub fn render(&self, wall: &str, blank: &str) -> String {
        let rows = 2 * self.height + 1;
        let columns = 2 * self.width + 1;
        let mut out = String::with_capacity(rows * (columns * wall.len().max(blank.len()) + 1));
        for row in 0..rows {
            for column in 0..columns {
                let tile = match (column % 2, row % 2) {
                    (0, 0) => true,
                    (0, _) => self.vertical_wall(column / 2, row / 2),
                    (_, 0) => self.horizontal_wall(column / 2, row / 2),
                    _ => false,
                };
                out.push_str(if tile { wall } else { blank });
            }
            out.push('\n');
        }
        out
    }

    /// Number of removed walls between adjacent cells.
    pub fn passage_count(&self) -> usize {
        let horizontal = (0..self.width)
            .flat_map(|x| (1..self.height).map(move |y| (x, y)))
            .filter(|&(x, y)| !self.horizontal_wall(x, y))
            .count();
        let vertical = (1..self.width)
            .flat_map(|x| (0..self.height).map(move |y| (x, y)))
            .filter(|&(x, y)| !self.vertical_wall(x, y))
            .count();
        horizontal + vertical
    }

    /// Checks that every cell can be reached from `(0, 0)` through removed walls.
    pub fn is_connected(&self) -> bool {
        if self.width == 0 || self.height == 0 {
            return true;
        }
        let mut reached = self.matrix(false, true);
        let mut queue = VecDeque::from([(0, 0)]);
        reached.set((0, 0), true);
        let mut count = 1;
        while let Some(pos) = queue.pop_front() {
            for direction in Direction::ALL {
                let next = direction.step(pos);
                if self.wall(pos, direction) || reached.get(next) {
                    continue;
                }
                reached.set(next, true);
                count += 1;
                queue.push_back(next);
            }
        }
        count == self.width * self.height
    }

    /// Checks that no border wall has been removed.
    pub fn borders_intact(&self) -> bool {
        (0..self.width).all(|x| self.horizontal_wall(x, 0) && self.horizontal_wall(x, self.height))
            && (0..self.height)
                .all(|y| self.vertical_wall(0, y) && self.vertical_wall(self.width, y))
    }

    /// A perfect maze is a spanning tree: connected, with exactly one passage fewer than
    /// cells, and closed off from the outside.
    pub fn is_perfect(&self) -> bool {
        let cells = self.width * self.height;
        self.borders_intact() && self.passage_count() + 1 == cells && self.is_connected()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render("#", "."))
    }
}
