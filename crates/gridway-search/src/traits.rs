use gridway_core::Pose;

/// A state graph over (cell, orientation) nodes with weighted edges.
///
/// Implementations must be pure: identical inputs always yield identical
/// edge sets. Unreachable successors (blocked or out-of-bounds cells) are
/// filtered out here, never emitted with an infinite cost.
pub trait StateGraph {
    /// Append successors of `s` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, s: Pose, buf: &mut Vec<Pose>);

    /// Cost of the edge from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Pose, to: Pose) -> i32;
}
