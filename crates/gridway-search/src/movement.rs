//! Movement policies: the state graph adapters over a [`Grid`].

use gridway_core::{Direction, Pose};
use gridway_grid::Grid;

use crate::traits::StateGraph;

/// Uniform movement: four-directional steps of cost 1.
///
/// Orientation does not affect cost, so successors keep the orientation of
/// their parent; starting every query from a single fixed orientation makes
/// the cell effectively the whole state.
pub struct CardinalMoves<'a> {
    grid: &'a Grid,
}

impl<'a> CardinalMoves<'a> {
    /// Create the uniform movement policy over `grid`.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl StateGraph for CardinalMoves<'_> {
    fn neighbors(&self, s: Pose, buf: &mut Vec<Pose>) {
        for d in Direction::ALL {
            let np = s.pos + d.delta();
            if !self.grid.is_blocked(np) {
                buf.push(Pose::new(np, s.dir));
            }
        }
    }

    fn cost(&self, _from: Pose, _to: Pose) -> i32 {
        1
    }
}

/// Oriented movement: step forward along the current orientation, or rotate
/// 90° in place for a fixed penalty.
///
/// A forward step into a blocked cell is not an edge at all. Rotations never
/// move, so they are always legal.
pub struct OrientedMoves<'a> {
    grid: &'a Grid,
    step_cost: i32,
    turn_cost: i32,
}

impl<'a> OrientedMoves<'a> {
    /// Create the oriented movement policy with forward cost 1 and the given
    /// 90°-turn penalty.
    pub fn new(grid: &'a Grid, turn_cost: i32) -> Self {
        Self {
            grid,
            step_cost: 1,
            turn_cost,
        }
    }

    /// Override the forward step cost.
    pub fn with_step_cost(mut self, step_cost: i32) -> Self {
        self.step_cost = step_cost;
        self
    }
}

impl StateGraph for OrientedMoves<'_> {
    fn neighbors(&self, s: Pose, buf: &mut Vec<Pose>) {
        let ahead = s.pos + s.dir.delta();
        if !self.grid.is_blocked(ahead) {
            buf.push(Pose::new(ahead, s.dir));
        }
        buf.push(Pose::new(s.pos, s.dir.turn_left()));
        buf.push(Pose::new(s.pos, s.dir.turn_right()));
    }

    fn cost(&self, from: Pose, to: Pose) -> i32 {
        if from.pos == to.pos {
            self.turn_cost
        } else {
            self.step_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::{Point, Range};

    #[test]
    fn cardinal_filters_blocked_and_out_of_bounds() {
        let grid = Grid::with_obstacles(Range::new(0, 0, 3, 3), &[Point::new(1, 0)]);
        let moves = CardinalMoves::new(&grid);
        let mut buf = Vec::new();
        moves.neighbors(Pose::new(Point::new(0, 0), Direction::North), &mut buf);
        // (1,0) is blocked, (0,-1) and (-1,0) are out of bounds.
        assert_eq!(buf.len(), 1);
        assert_eq!(buf[0].pos, Point::new(0, 1));
        assert_eq!(buf[0].dir, Direction::North);
    }

    #[test]
    fn cardinal_cost_is_always_one() {
        let grid = Grid::open(Range::new(0, 0, 2, 2));
        let moves = CardinalMoves::new(&grid);
        let a = Pose::new(Point::new(0, 0), Direction::North);
        let b = Pose::new(Point::new(1, 0), Direction::North);
        assert_eq!(moves.cost(a, b), 1);
    }

    #[test]
    fn oriented_emits_forward_and_both_turns() {
        let grid = Grid::open(Range::new(0, 0, 3, 3));
        let moves = OrientedMoves::new(&grid, 1000);
        let mut buf = Vec::new();
        let s = Pose::new(Point::new(1, 1), Direction::East);
        moves.neighbors(s, &mut buf);
        assert_eq!(buf.len(), 3);
        assert!(buf.contains(&Pose::new(Point::new(2, 1), Direction::East)));
        assert!(buf.contains(&Pose::new(Point::new(1, 1), Direction::North)));
        assert!(buf.contains(&Pose::new(Point::new(1, 1), Direction::South)));
    }

    #[test]
    fn oriented_forward_into_wall_is_no_edge() {
        let grid = Grid::with_obstacles(Range::new(0, 0, 3, 3), &[Point::new(2, 1)]);
        let moves = OrientedMoves::new(&grid, 1000);
        let mut buf = Vec::new();
        let s = Pose::new(Point::new(1, 1), Direction::East);
        moves.neighbors(s, &mut buf);
        // Only the two rotations remain.
        assert_eq!(buf.len(), 2);
        assert!(buf.iter().all(|n| n.pos == s.pos));
    }

    #[test]
    fn oriented_costs_distinguish_step_and_turn() {
        let grid = Grid::open(Range::new(0, 0, 3, 3));
        let moves = OrientedMoves::new(&grid, 1000).with_step_cost(3);
        let here = Pose::new(Point::new(1, 1), Direction::East);
        let ahead = Pose::new(Point::new(2, 1), Direction::East);
        let turned = Pose::new(Point::new(1, 1), Direction::South);
        assert_eq!(moves.cost(here, ahead), 3);
        assert_eq!(moves.cost(here, turned), 1000);
    }

    #[test]
    fn adapters_are_pure() {
        let grid = Grid::with_obstacles(Range::new(0, 0, 4, 4), &[Point::new(2, 2)]);
        let moves = OrientedMoves::new(&grid, 1000);
        let s = Pose::new(Point::new(2, 1), Direction::South);
        let mut a = Vec::new();
        let mut b = Vec::new();
        moves.neighbors(s, &mut a);
        moves.neighbors(s, &mut b);
        assert_eq!(a, b);
    }
}
