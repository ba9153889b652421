//! **gridway-core** — Grid shortest-path engine (geometry and orientation types).
//!
//! This crate provides the foundational types used across the *gridway*
//! ecosystem: integer grid geometry ([`Point`], [`Range`]) and the
//! orientation types that make up a search state ([`Direction`], [`Pose`]).

pub mod direction;
pub mod geom;

pub use direction::{Direction, Pose};
pub use geom::{Point, Range, RangeIter};
