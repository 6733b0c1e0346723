use rand::Rng;

use super::super::MazeMaker;
use crate::maze::graph::NodeId;

pub trait Backtrack {
    fn backtrack(&mut self, start: NodeId);
}

impl<R: Rng + ?Sized> Backtrack for MazeMaker<'_, R> {
    // Depth-first carve with an explicit stack. A node stays on the stack
    // until it runs out of open neighbors, and its open set is recomputed each
    // time control returns to it, so the visiting order matches the recursive
    // formulation.
    fn backtrack(&mut self, start: NodeId) {
        let mut stack = vec![start];
        self.record_if_dead_end(start);

        while let Some(&curr) = stack.last() {
            if let Some(next) = self.pick_open_neighbor(curr) {
                self.carve(curr, next);
                self.record_if_dead_end(next);
                stack.push(next);
            } else {
                stack.pop();
            }
        }
    }
}
