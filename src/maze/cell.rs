use super::{Direction, Maze};

/// Mutable handle on the four walls surrounding one cell of a [`Maze`].
///
/// Each accessor resolves to a slot of the maze's wall arrays; walls are shared, so the
/// right wall of `(x, y)` is the left wall of `(x + 1, y)`.
pub struct CellMut<'a> {
    maze: &'a mut Maze,
    x: usize,
    y: usize,
}

impl<'a> CellMut<'a> {
    pub(super) fn new(maze: &'a mut Maze, (x, y): (usize, usize)) -> Self {
        CellMut { maze, x, y }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn left(&mut self) -> &mut bool {
        let idx = self.maze.vertical_index(self.x, self.y);
        &mut self.maze.vertical[idx]
    }

    pub fn right(&mut self) -> &mut bool {
        let idx = self.maze.vertical_index(self.x + 1, self.y);
        &mut self.maze.vertical[idx]
    }

    pub fn up(&mut self) -> &mut bool {
        let idx = self.maze.horizontal_index(self.x, self.y);
        &mut self.maze.horizontal[idx]
    }

    pub fn down(&mut self) -> &mut bool {
        let idx = self.maze.horizontal_index(self.x, self.y + 1);
        &mut self.maze.horizontal[idx]
    }

    pub fn wall_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
            Direction::Up => self.up(),
            Direction::Down => self.down(),
        }
    }

    /// Whether the wall on this side is part of the maze border.
    pub fn is_border(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.x == 0,
            Direction::Right => self.x + 1 == self.maze.width,
            Direction::Up => self.y == 0,
            Direction::Down => self.y + 1 == self.maze.height,
        }
    }

    /// Removes the wall on the given side, opening a passage to that neighbor.
    pub fn carve(&mut self, direction: Direction) {
        debug_assert!(
            !self.is_border(direction),
            "attempted to carve the border wall {:?} of cell {:?}",
            direction,
            self.position()
        );
        *self.wall_mut(direction) = false;
    }

    /// Puts the wall on the given side back in place.
    pub fn build(&mut self, direction: Direction) {
        *self.wall_mut(direction) = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_resolve_to_shared_slots() {
        let mut maze = Maze::new(3, 3);
        *maze.cell((1, 1)).right() = false;
        assert!(!*maze.cell((2, 1)).left());
        *maze.cell((1, 1)).down() = false;
        assert!(!*maze.cell((1, 2)).up());
        assert!(!maze.horizontal_wall(1, 2));
        assert!(!maze.vertical_wall(2, 1));
    }

    #[test]
    fn test_carve_and_build() {
        let mut maze = Maze::new(2, 2);
        maze.cell((0, 0)).carve(Direction::Right);
        assert!(!maze.wall((0, 0), Direction::Right));
        maze.cell((1, 0)).build(Direction::Left);
        assert!(maze.wall((0, 0), Direction::Right));
    }

    #[test]
    fn test_is_border() {
        let mut maze = Maze::new(2, 1);
        let cell = maze.cell((0, 0));
        assert!(cell.is_border(Direction::Left));
        assert!(cell.is_border(Direction::Up));
        assert!(cell.is_border(Direction::Down));
        assert!(!cell.is_border(Direction::Right));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_carving_border_panics_in_debug() {
        let mut maze = Maze::new(2, 2);
        maze.cell((0, 0)).carve(Direction::Up);
    }
}
