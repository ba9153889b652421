use std::collections::BinaryHeap;

use gridway_core::{Direction, Point, Pose};

use crate::SearchSpace;
use crate::space::{NodeRef, UNREACHABLE};
use crate::traits::StateGraph;

impl SearchSpace {
    /// Compute the minimal cost from `start` to the `goal` cell together
    /// with every cell lying on *any* minimum-cost path.
    ///
    /// Unlike [`min_cost`](Self::min_cost) there is no early exit: the
    /// search runs until everything at or below the best goal cost is
    /// finalized. A relaxation that strictly improves a state resets its
    /// predecessor list; one that ties it appends an additional optimal
    /// predecessor, because equal-cost alternate paths are first-class
    /// results here. The answer is assembled by back-tracking from every
    /// optimal goal orientation through every recorded predecessor.
    ///
    /// Returns the cost and the sorted set of distinct cells (states that
    /// differ only in orientation collapse to one cell), or `None` if the
    /// goal is unreachable.
    pub fn optimal_path_cells<G: StateGraph>(
        &mut self,
        graph: &G,
        start: Pose,
        goal: Point,
    ) -> Option<(i32, Vec<Point>)> {
        let start_idx = self.idx(start)?;
        if !self.rng.contains(goal) {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.generation = cur_gen;
            node.open = true;
        }
        self.preds[start_idx].clear();

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut best_goal = UNREACHABLE;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            let current_g = self.nodes[ci].g;
            // The heap pops in non-decreasing order, so once a pop exceeds
            // the best goal arrival nothing optimal remains.
            if current_g > best_goal {
                break;
            }
            self.nodes[ci].open = false;
            let cp = self.pose(ci);

            if cp.pos == goal {
                best_goal = best_goal.min(current_g);
                // Optimal paths do not continue beyond the goal.
                continue;
            }

            nbuf.clear();
            graph.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + graph.cost(cp, np);
                if tentative > best_goal {
                    continue;
                }

                if self.nodes[ni].generation == cur_gen {
                    let g = self.nodes[ni].g;
                    if tentative > g {
                        continue;
                    }
                    if tentative == g {
                        // Equal-cost alternate route: one more optimal
                        // predecessor, no re-queue. This also applies to
                        // already-finalized nodes.
                        self.preds[ni].push(ci as u32);
                        continue;
                    }
                } else {
                    self.nodes[ni].generation = cur_gen;
                }

                self.nodes[ni].g = tentative;
                self.nodes[ni].open = true;
                self.preds[ni].clear();
                self.preds[ni].push(ci as u32);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        }

        self.nbuf = nbuf;

        if best_goal == UNREACHABLE {
            return None;
        }

        Some((best_goal, self.trace_optimal_cells(goal, best_goal, cur_gen)))
    }

    /// Walk the predecessor table backwards from every optimal goal state
    /// and collect the distinct cells touched, sorted row-major.
    fn trace_optimal_cells(&mut self, goal: Point, best_goal: i32, cur_gen: u32) -> Vec<Point> {
        for v in self.trace_mark.iter_mut() {
            *v = false;
        }
        for v in self.cell_mark.iter_mut() {
            *v = false;
        }

        let mut stack = std::mem::take(&mut self.trace_stack);
        stack.clear();

        for dir in Direction::ALL {
            if let Some(ni) = self.idx(Pose::new(goal, dir)) {
                let n = &self.nodes[ni];
                if n.generation == cur_gen && n.g == best_goal {
                    self.trace_mark[ni] = true;
                    stack.push(ni as u32);
                }
            }
        }

        let mut cells = Vec::new();
        while let Some(ci) = stack.pop() {
            let ci = ci as usize;
            let p = self.pose(ci).pos;
            let cell = self.cell_idx(p);
            if !self.cell_mark[cell] {
                self.cell_mark[cell] = true;
                cells.push(p);
            }
            // A node may have several optimal predecessors; visit them all.
            for i in 0..self.preds[ci].len() {
                let pi = self.preds[ci][i] as usize;
                if !self.trace_mark[pi] {
                    self.trace_mark[pi] = true;
                    stack.push(pi as u32);
                }
            }
        }

        self.trace_stack = stack;
        cells.sort();
        cells
    }
}
