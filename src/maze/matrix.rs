use super::Direction;

/// Dense per-cell storage for algorithm bookkeeping (visited flags, walk directions).
///
/// Reads outside `[0, width) x [0, height)` return the configured default and writes there
/// are ignored, so algorithms can look one step past the edge without bounds checks.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Box<[T]>,
    width: usize,
    height: usize,
    out: T,
}

impl<T: Clone> Matrix<T> {
    pub fn new(width: usize, height: usize, val: T, out: T) -> Self {
        let data = vec![val; width * height].into_boxed_slice();
        Matrix {
            data,
            width,
            height,
            out,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn ravel_index(&self, (x, y): (usize, usize)) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Value at `pos`, or the out-of-range default.
    pub fn get(&self, pos: (usize, usize)) -> T {
        match self.ravel_index(pos) {
            Some(idx) => self.data[idx].clone(),
            None => self.out.clone(),
        }
    }

    /// Stores `value` at `pos`; a no-op outside the matrix.
    pub fn set(&mut self, pos: (usize, usize), value: T) {
        if let Some(idx) = self.ravel_index(pos) {
            self.data[idx] = value;
        }
    }

    pub fn at(&mut self, pos: (usize, usize)) -> MatrixCell<'_, T> {
        MatrixCell {
            matrix: self,
            x: pos.0,
            y: pos.1,
        }
    }
}

impl Matrix<bool> {
    /// 4-bit mask of the neighbor flags around `pos`, laid out like direction masks
    /// (left in bit 3, right in bit 2, up in bit 1, down in bit 0).
    pub fn surrounding(&self, pos: (usize, usize)) -> u8 {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.get(direction.step(pos)))
            .fold(0, |mask, direction| mask | direction.bit())
    }
}

/// Handle on one position of a [`Matrix`], which may lie outside of it.
pub struct MatrixCell<'a, T> {
    matrix: &'a mut Matrix<T>,
    x: usize,
    y: usize,
}

impl<T: Clone> MatrixCell<'_, T> {
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn neighbor(self, direction: Direction) -> Self {
        let (x, y) = direction.step((self.x, self.y));
        MatrixCell { x, y, ..self }
    }

    pub fn left(self) -> Self {
        self.neighbor(Direction::Left)
    }

    pub fn right(self) -> Self {
        self.neighbor(Direction::Right)
    }

    pub fn up(self) -> Self {
        self.neighbor(Direction::Up)
    }

    pub fn down(self) -> Self {
        self.neighbor(Direction::Down)
    }

    pub fn get(&self) -> T {
        self.matrix.get((self.x, self.y))
    }

    pub fn set(&mut self, value: T) {
        self.matrix.set((self.x, self.y), value);
    }
}

impl MatrixCell<'_, bool> {
    pub fn surrounding(&self) -> u8 {
        self.matrix.surrounding((self.x, self.y))
    }
}
