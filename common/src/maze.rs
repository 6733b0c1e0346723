pub mod graph;
pub mod layout;
pub mod maker;

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::error::MazeError;
use graph::MazeGraph;
pub use layout::{Layout, LayoutCell};
use maker::{DeadEnd, MazeMaker};

/// A generated maze: the spanning tree, where it starts, where it ends, and
/// how hard the end was chosen to be.
///
/// Built once and never mutated. Regenerating a maze means building a new one.
#[derive(Clone)]
pub struct Maze {
    graph: MazeGraph,
    start: (usize, usize),
    end: (usize, usize),
    difficulty: f64,
    dead_ends: Vec<DeadEnd>,
}

impl Maze {
    pub fn generate(width: usize, height: usize, difficulty: f64) -> Result<Self, MazeError> {
        generate_maze(width, height, difficulty, &mut rand::rng())
    }

    pub fn from_seed(
        width: usize,
        height: usize,
        difficulty: f64,
        seed: u64,
    ) -> Result<Self, MazeError> {
        generate_maze(width, height, difficulty, &mut StdRng::seed_from_u64(seed))
    }

    pub fn graph(&self) -> &MazeGraph {
        &self.graph
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// The clamped difficulty the end was picked with.
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Dead ends in ascending order of distance from the start.
    pub fn dead_ends(&self) -> &[DeadEnd] {
        &self.dead_ends
    }

    /// Number of steps along the tree from start to end.
    pub fn solution_length(&self) -> usize {
        self.graph.node_at(self.end).map_or(0, |node| node.distance)
    }

    pub fn layout(&self) -> Layout {
        Layout::from_maze(self)
    }
}

/// Carves a random spanning tree over a `width` x `height` grid, then picks the
/// end among the dead ends: difficulty 0 takes the one nearest the start,
/// difficulty 1 the farthest.
pub fn generate_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    difficulty: f64,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let maker = MazeMaker::new(width, height, rng)?;
    let MazeMaker {
        graph,
        start,
        dead_ends,
        ..
    } = maker;

    let difficulty = clamp_difficulty(difficulty);
    let end = pick_end(&dead_ends, difficulty).unwrap_or(start);

    let maze = Maze {
        graph,
        start,
        end,
        difficulty,
        dead_ends,
    };

    info!(
        width,
        height,
        difficulty,
        start = ?maze.start,
        end = ?maze.end,
        dead_ends = maze.dead_ends.len(),
        solution_length = maze.solution_length(),
        "maze generated"
    );

    Ok(maze)
}

fn clamp_difficulty(difficulty: f64) -> f64 {
    if difficulty.is_nan() {
        0.0
    } else {
        difficulty.clamp(0.0, 1.0)
    }
}

fn pick_end(dead_ends: &[DeadEnd], difficulty: f64) -> Option<(usize, usize)> {
    let last = dead_ends.len().checked_sub(1)?;
    let i = ((difficulty * last as f64).floor() as usize).min(last);
    Some(dead_ends[i].position)
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout())
    }
}
