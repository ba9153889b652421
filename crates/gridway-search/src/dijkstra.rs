use std::collections::BinaryHeap;

use gridway_core::{Point, Pose};

use crate::SearchSpace;
use crate::space::NodeRef;
use crate::traits::StateGraph;

impl SearchSpace {
    /// Compute the cheapest cost from `start` to any state at the `goal`
    /// cell, whatever its orientation.
    ///
    /// Classic Dijkstra with early exit: the first time a goal state is
    /// popped from the frontier its cost is optimal, since all edge costs
    /// are positive. Returns `None` if the frontier empties first; an
    /// unreachable goal is an ordinary outcome, not an error.
    pub fn min_cost<G: StateGraph>(&mut self, graph: &G, start: Pose, goal: Point) -> Option<i32> {
        let start_idx = self.idx(start)?;
        if !self.rng.contains(goal) {
            return None;
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = None;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            let current_g = self.nodes[ci].g;
            self.nodes[ci].open = false;
            let cp = self.pose(ci);

            if cp.pos == goal {
                found = Some(current_g);
                break;
            }

            nbuf.clear();
            graph.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + graph.cost(cp, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        }

        self.nbuf = nbuf;
        found
    }
}
