pub mod algorithms;

use rand::Rng;
use tracing::debug;

use algorithms::backtrack::Backtrack;

use super::graph::{MazeGraph, NodeId};
use crate::error::MazeError;

/// A maze node that had no unvisited neighbors when it was first reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadEnd {
    pub position: (usize, usize),
    pub distance: usize,
}

pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub graph: MazeGraph,
    pub start: (usize, usize),
    pub dead_ends: Vec<DeadEnd>,
    complete: MazeGraph,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    /// Picks a random start cell and carves a spanning tree from it.
    pub fn new(width: usize, height: usize, rng: &'a mut R) -> Result<Self, MazeError> {
        let complete = MazeGraph::complete(width, height)?;
        let graph = MazeGraph::new(width, height)?;

        let start = (rng.random_range(0..width), rng.random_range(0..height));

        let mut maker = MazeMaker {
            graph,
            start,
            dead_ends: Vec::new(),
            complete,
            rng,
        };

        let start_id = maker.graph.add_node(start, 0);
        maker.backtrack(start_id);

        // Stable, so equally deep dead ends keep the order they were found in.
        maker.dead_ends.sort_by_key(|dead_end| dead_end.distance);

        Ok(maker)
    }

    /// Neighbors in the complete graph that aren't in the maze yet.
    fn open_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.complete
            .neighbors(id)
            .iter()
            .copied()
            .filter(|&neighbor| !self.graph.has_node(neighbor))
            .collect()
    }

    fn pick_open_neighbor(&mut self, id: NodeId) -> Option<NodeId> {
        let open = self.open_neighbors(id);
        if open.is_empty() {
            return None;
        }

        let i = self.rng.random_range(0..open.len());
        Some(open[i])
    }

    /// Adds `next` one step deeper than `current` and joins them.
    fn carve(&mut self, current: NodeId, next: NodeId) {
        let distance = self.distance(current) + 1;
        let position = self.position(next);
        self.graph.add_node(position, distance);
        self.graph.make_edge(current, next);
    }

    fn record_if_dead_end(&mut self, id: NodeId) {
        if !self.open_neighbors(id).is_empty() {
            return;
        }

        let dead_end = DeadEnd {
            position: self.position(id),
            distance: self.distance(id),
        };
        debug!(
            position = ?dead_end.position,
            distance = dead_end.distance,
            "dead end"
        );
        self.dead_ends.push(dead_end);
    }

    fn position(&self, id: NodeId) -> (usize, usize) {
        self.complete.node(id).map_or((0, 0), |node| node.position)
    }

    fn distance(&self, id: NodeId) -> usize {
        self.graph.node(id).map_or(0, |node| node.distance)
    }
}
