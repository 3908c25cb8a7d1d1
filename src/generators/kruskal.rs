use crate::{
    generators::Edge,
    maze::{Maze, Orientation},
    random::RandomSource,
};

pub fn randomized_kruskal(width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    let mut maze = Maze::new(width, height);
    let mut sets = maze.disjoint_set();

    // Collect all possible edges (walls between adjacent cells)
    let mut edges = Vec::with_capacity(2 * width * height - width - height);
    edges.extend(
        (0..width)
            .flat_map(|x| (0..height - 1).map(move |y| Edge::new(Orientation::Horizontal, x, y))),
    );
    edges.extend(
        (0..width - 1)
            .flat_map(|x| (0..height).map(move |y| Edge::new(Orientation::Vertical, x, y))),
    );

    // Shuffle edges randomly
    rng.shuffle(&mut edges);

    for edge in edges {
        // Only link cells that are not yet connected, otherwise a cycle would form
        if sets.join(edge.near(), edge.far()) {
            maze.remove_wall_after(edge.near(), edge.orientation);
        }
    }

    maze
}
