/// Union-find over flat indices `0..len`.
///
/// `join` always hangs the second root under the first; there is no rank, which keeps
/// Eller's row carry-over simple (`attach` writes parents directly).
#[derive(Debug, Clone)]
pub struct FlatDisjointSet {
    parent: Vec<usize>,
}

impl FlatDisjointSet {
    pub fn new(len: usize) -> Self {
        FlatDisjointSet {
            parent: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Makes every element its own set again.
    pub fn reset(&mut self) {
        self.parent
            .iter_mut()
            .enumerate()
            .for_each(|(idx, parent)| *parent = idx);
    }

    /// Points `element` straight at `root`, making it a member of that set.
    /// `root` must currently be a root.
    pub fn attach(&mut self, element: usize, root: usize) {
        self.parent[element] = root;
    }

    /// Root of the set containing `x`, compressing the path on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already one set.
    pub fn join(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false; // Already in same set
        }
        self.parent[root_b] = root_a;
        true
    }
}

/// Union-find over the cells of a `width x height` grid, keyed by coordinate.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    sets: FlatDisjointSet,
    width: usize,
    height: usize,
}

impl DisjointSet {
    pub fn new(width: usize, height: usize) -> Self {
        DisjointSet {
            sets: FlatDisjointSet::new(width * height),
            width,
            height,
        }
    }

    fn ravel_index(&self, (x, y): (usize, usize)) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) is out of bounds");
        x * self.height + y
    }

    fn unravel_index(&self, idx: usize) -> (usize, usize) {
        (idx / self.height, idx % self.height)
    }

    pub fn find(&mut self, pos: (usize, usize)) -> (usize, usize) {
        let idx = self.ravel_index(pos);
        let root = self.sets.find(idx);
        self.unravel_index(root)
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already connected,
    /// i.e. if linking them would close a cycle.
    pub fn join(&mut self, a: (usize, usize), b: (usize, usize)) -> bool {
        let a = self.ravel_index(a);
        let b = self.ravel_index(b);
        self.sets.join(a, b)
    }
}
