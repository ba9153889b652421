//! Uniform-cost search over (cell, orientation) state graphs.
//!
//! This crate implements shortest-cost queries on the implicit graph whose
//! nodes are [`Pose`](gridway_core::Pose) values (a grid cell plus an
//! orientation) and whose edges come from a movement policy:
//!
//! - **Cheapest cost** to a target cell ([`SearchSpace::min_cost`])
//! - **All optimal-path cells**, the union of cells on *every* minimum-cost
//!   path ([`SearchSpace::optimal_path_cells`])
//! - **First blocking obstacle** in an ordered insertion sequence
//!   ([`first_blocking_obstacle`])
//!
//! All queries run through [`SearchSpace`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up.
//!
//! # Movement policies
//!
//! | Policy | Edges |
//! |---|---|
//! | [`CardinalMoves`] | four-directional steps, cost 1, orientation inert |
//! | [`OrientedMoves`] | step forward (cost 1) or rotate 90° in place (turn penalty) |
//!
//! Both are implementations of [`StateGraph`]; custom policies plug in the
//! same way.

mod cutoff;
mod dijkstra;
mod movement;
mod optimal;
mod space;
#[cfg(test)]
mod testgrid;
mod traits;

pub use cutoff::{Cutoff, CutoffError, first_blocking_obstacle};
pub use movement::{CardinalMoves, OrientedMoves};
pub use space::{SearchSpace, UNREACHABLE};
pub use traits::StateGraph;
