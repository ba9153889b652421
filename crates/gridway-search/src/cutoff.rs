//! First obstacle whose insertion disconnects a start cell from a goal cell.

use gridway_core::{Direction, Point, Pose, Range};
use gridway_grid::Grid;

use crate::movement::CardinalMoves;
use crate::space::SearchSpace;

/// The critical point of an obstacle-insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cutoff {
    /// 0-based index of the first obstacle that disconnects start from goal.
    pub index: usize,
    /// Coordinate of that obstacle.
    pub obstacle: Point,
    /// Cheapest path cost with obstacles `[0..index]` applied, i.e. just
    /// before the critical obstacle was added.
    pub cost_before: i32,
}

/// Configuration errors of the critical-point search, distinct from the
/// ordinary "unreachable" outcome inside a probe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CutoffError {
    /// The goal is unreachable before any obstacle is added.
    #[error("goal unreachable before any obstacle is added")]
    BlockedAtStart,
    /// The goal is still reachable with the whole sequence applied, so no
    /// critical point exists.
    #[error("goal still reachable after all {0} obstacles")]
    NeverBlocked(usize),
}

/// Find the first obstacle in `obstacles` whose insertion makes `goal`
/// unreachable from `start` under uniform four-directional movement.
///
/// Reachability is monotonically non-increasing as obstacles accumulate
/// (adding a wall never reconnects anything), which licenses a binary
/// search over the prefix length instead of re-solving after every
/// insertion. Each probe rebuilds the grid with a prefix of the sequence
/// and runs one cheapest-cost query; the node arena is reused across
/// probes via its generation counter.
pub fn first_blocking_obstacle(
    bounds: Range,
    obstacles: &[Point],
    start: Point,
    goal: Point,
) -> Result<Cutoff, CutoffError> {
    let mut space = SearchSpace::new(bounds);
    let start_pose = Pose::new(start, Direction::North);

    let probe = |space: &mut SearchSpace, k: usize| -> Option<i32> {
        let grid = Grid::with_obstacle_prefix(bounds, obstacles, k);
        let cost = space.min_cost(&CardinalMoves::new(&grid), start_pose, goal);
        log::debug!("cutoff probe: {k} obstacles applied, cost {cost:?}");
        cost
    };

    let base_cost = probe(&mut space, 0).ok_or(CutoffError::BlockedAtStart)?;
    if probe(&mut space, obstacles.len()).is_some() {
        return Err(CutoffError::NeverBlocked(obstacles.len()));
    }

    // Invariants: prefix `lo` leaves the goal reachable (at `reachable_cost`),
    // prefix `hi + 1` does not. They meet at the critical index.
    let mut lo = 0usize;
    let mut hi = obstacles.len() - 1;
    let mut reachable_cost = base_cost;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match probe(&mut space, mid + 1) {
            Some(cost) => {
                lo = mid + 1;
                reachable_cost = cost;
            }
            None => hi = mid,
        }
    }

    let cutoff = Cutoff {
        index: lo,
        obstacle: obstacles[lo],
        cost_before: reachable_cost,
    };
    log::debug!(
        "critical obstacle {} at index {}, cost before {}",
        cutoff.obstacle,
        cutoff.index,
        cutoff.cost_before
    );
    Ok(cutoff)
}
