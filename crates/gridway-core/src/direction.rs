//! Orientation types: [`Direction`] and [`Pose`].
//!
//! A [`Pose`] is the composite key of the search graph: the same cell
//! reached facing different ways is a different node whenever movement
//! cost depends on turning.

use std::fmt;

use crate::geom::Point;

/// One of the four compass orientations. Y grows down, so `North` is (0, -1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four orientations, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit displacement of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// Orientation after a 90° clockwise turn.
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Orientation after a 90° counter-clockwise turn.
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The opposite orientation (a 180° turn).
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Stable index in `0..4`, for flat per-orientation arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}

/// A search-graph node: a grid cell plus the orientation it is faced in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Point,
    pub dir: Direction,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub const fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_cardinal_steps() {
        assert_eq!(Direction::North.delta(), Point::new(0, -1));
        assert_eq!(Direction::East.delta(), Point::new(1, 0));
        assert_eq!(Direction::South.delta(), Point::new(0, 1));
        assert_eq!(Direction::West.delta(), Point::new(-1, 0));
    }

    #[test]
    fn four_right_turns_return_home() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_right().turn_right().turn_right(), d);
        }
    }

    #[test]
    fn left_then_right_cancels() {
        for d in Direction::ALL {
            assert_eq!(d.turn_left().turn_right(), d);
            assert_ne!(d.turn_left(), d.turn_right());
        }
    }

    #[test]
    fn opposite_twice_returns_home() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
            // 180° is also two quarter turns, either way round.
            assert_eq!(d.opposite(), d.turn_right().turn_right());
            assert_eq!(d.opposite(), d.turn_left().turn_left());
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for d in Direction::ALL {
            assert_eq!(d.delta() + d.opposite().delta(), Point::ZERO);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::West.to_string(), "west");
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 4];
        for d in Direction::ALL {
            assert!(!seen[d.index()]);
            seen[d.index()] = true;
        }
    }

    #[test]
    fn poses_differ_by_orientation() {
        let p = Point::new(2, 3);
        assert_ne!(
            Pose::new(p, Direction::North),
            Pose::new(p, Direction::South)
        );
        assert_eq!(
            Pose::new(p, Direction::East),
            Pose::new(p, Direction::East)
        );
    }
}
