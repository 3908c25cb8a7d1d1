use std::{fmt, str::FromStr, time::Instant};

mod aldous_broder;
mod binary_tree;
mod eller;
mod hunt_kill;
mod kruskal;
mod prim;
mod recur_backtrack;
mod recur_div;
mod sidewinder;
mod wilson;

pub use aldous_broder::aldous_broder;
pub use binary_tree::binary_tree;
pub use eller::eller;
pub use hunt_kill::hunt_and_kill;
pub use kruskal::randomized_kruskal;
pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;
pub use recur_div::recursive_division;
pub use sidewinder::sidewinder;
pub use wilson::wilson;

use crate::{
    maze::{Maze, Orientation},
    random::RandomSource,
};

/// Wall edge between a cell and the neighbor after it (right for `Vertical`, below for
/// `Horizontal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    orientation: Orientation,
    x: usize,
    y: usize,
}

impl Edge {
    fn new(orientation: Orientation, x: usize, y: usize) -> Self {
        Edge { orientation, x, y }
    }

    fn near(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    fn far(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Vertical => (self.x + 1, self.y),
            Orientation::Horizontal => (self.x, self.y + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Generator {
    AldousBroder,
    BinaryTree,
    Eller,
    HuntAndKill,
    Kruskal,
    Prim,
    #[default]
    RecurBacktrack,
    RecurDiv,
    Sidewinder,
    Wilson,
}

impl Generator {
    pub const ALL: [Generator; 10] = [
        Generator::AldousBroder,
        Generator::BinaryTree,
        Generator::Eller,
        Generator::HuntAndKill,
        Generator::Kruskal,
        Generator::Prim,
        Generator::RecurBacktrack,
        Generator::RecurDiv,
        Generator::Sidewinder,
        Generator::Wilson,
    ];

    /// Key the generator is selected by on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Generator::AldousBroder => "aldous-broder",
            Generator::BinaryTree => "binary-tree",
            Generator::Eller => "eller",
            Generator::HuntAndKill => "hunt-and-kill",
            Generator::Kruskal => "kruskal",
            Generator::Prim => "prim",
            Generator::RecurBacktrack => "recursive-backtracker",
            Generator::RecurDiv => "recursive-division",
            Generator::Sidewinder => "sidewinder",
            Generator::Wilson => "wilson",
        }
    }

    /// Generators whose running time grows badly with the maze size.
    /// Purely advisory; nothing stops a slow generator from running.
    pub fn is_slow(self) -> bool {
        matches!(
            self,
            Generator::AldousBroder | Generator::HuntAndKill | Generator::Wilson
        )
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Eller => write!(f, "Eller's Algorithm"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
        }
    }
}

/// Returned when a name matches none of [`Generator::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenerator(pub String);

impl fmt::Display for UnknownGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = Generator::ALL.map(Generator::name).join("|");
        write!(f, "unknown algorithm {} (expected one of {})", self.0, names)
    }
}

impl std::error::Error for UnknownGenerator {}

impl FromStr for Generator {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == s)
            .ok_or_else(|| UnknownGenerator(s.to_string()))
    }
}

/// Runs `generator` on a fresh `width x height` maze, drawing from `rng`.
///
/// Width and height must both be at least 1.
pub fn generate(generator: Generator, width: usize, height: usize, rng: &mut RandomSource) -> Maze {
    tracing::debug!(
        "[generate] {} on {}x{} (seed {})",
        generator,
        width,
        height,
        rng.seed()
    );
    let started = Instant::now();
    let maze = match generator {
        Generator::AldousBroder => aldous_broder(width, height, rng),
        Generator::BinaryTree => binary_tree(width, height, rng),
        Generator::Eller => eller(width, height, rng),
        Generator::HuntAndKill => hunt_and_kill(width, height, rng),
        Generator::Kruskal => randomized_kruskal(width, height, rng),
        Generator::Prim => randomized_prim(width, height, rng),
        Generator::RecurBacktrack => recursive_backtrack(width, height, rng),
        Generator::RecurDiv => recursive_division(width, height, rng),
        Generator::Sidewinder => sidewinder(width, height, rng),
        Generator::Wilson => wilson(width, height, rng),
    };
    tracing::debug!("[generate] {} finished in {:?}", generator, started.elapsed());
    maze
}

/// Like [`generate`], with a random source seeded from `seed` or from the clock.
pub fn generate_maze(generator: Generator, width: usize, height: usize, seed: Option<u64>) -> Maze {
    let mut rng = RandomSource::new(seed);
    generate(generator, width, height, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_names_round_trip() {
        for generator in Generator::ALL {
            assert_eq!(generator.name().parse::<Generator>(), Ok(generator));
        }
        let err = "labyrinth".parse::<Generator>().unwrap_err();
        assert!(err.to_string().contains("labyrinth"));
        assert!(err.to_string().contains("recursive-division"));
    }

    #[test]
    fn test_slow_generators() {
        let slow = Generator::ALL
            .into_iter()
            .filter(|g| g.is_slow())
            .collect::<Vec<_>>();
        assert_eq!(
            slow,
            vec![
                Generator::AldousBroder,
                Generator::HuntAndKill,
                Generator::Wilson
            ]
        );
        assert_eq!(Generator::default(), Generator::RecurBacktrack);
    }

    #[test]
    fn test_single_cell_for_every_generator() {
        for generator in Generator::ALL {
            let maze = generate_maze(generator, 1, 1, Some(0));
            assert_eq!(maze.render("#", "."), "###\n#.#\n###\n", "{generator}");
        }
    }

    #[test]
    fn test_every_generator_on_a_large_grid() {
        for generator in Generator::ALL {
            let maze = generate_maze(generator, 40, 25, Some(2024));
            assert!(maze.is_perfect(), "{generator} did not produce a perfect maze");
        }
    }

    #[test]
    fn test_unseeded_generation_is_perfect() {
        let maze = generate_maze(Generator::Kruskal, 9, 7, None);
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_edge_ends() {
        let edge = Edge::new(Orientation::Vertical, 2, 3);
        assert_eq!(edge.near(), (2, 3));
        assert_eq!(edge.far(), (3, 3));
        let edge = Edge::new(Orientation::Horizontal, 2, 3);
        assert_eq!(edge.far(), (2, 4));
    }

    fn any_generator() -> impl Strategy<Value = Generator> {
        prop::sample::select(Generator::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_every_generator_builds_a_spanning_tree(
            generator in any_generator(),
            width in 1usize..14,
            height in 1usize..14,
            seed in any::<u64>(),
        ) {
            let maze = generate_maze(generator, width, height, Some(seed));
            prop_assert_eq!(maze.width(), width);
            prop_assert_eq!(maze.height(), height);
            prop_assert!(maze.borders_intact());
            prop_assert_eq!(maze.passage_count(), width * height - 1);
            prop_assert!(maze.is_connected());
        }

        #[test]
        fn prop_same_seed_same_maze(
            generator in any_generator(),
            width in 1usize..10,
            height in 1usize..10,
            seed in any::<u64>(),
        ) {
            let first = generate_maze(generator, width, height, Some(seed)).render("#", ".");
            let second = generate_maze(generator, width, height, Some(seed)).render("#", ".");
            prop_assert_eq!(first, second);
        }
    }
}
