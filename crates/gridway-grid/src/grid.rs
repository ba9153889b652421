//! An immutable 2D occupancy map.

use gridway_core::{Point, Range};

/// A rectangular occupancy map: each in-bounds cell is either free or blocked.
///
/// A `Grid` is built once per query (from a predicate, or from a prefix of an
/// obstacle list) and is read-only afterwards. Queries never panic:
/// out-of-bounds cells simply count as blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Range,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a grid with every in-bounds cell free.
    pub fn open(bounds: Range) -> Self {
        Self {
            bounds,
            blocked: vec![false; bounds.len()],
        }
    }

    /// Create a grid by evaluating a blocked predicate for every cell.
    pub fn from_fn(bounds: Range, mut is_blocked: impl FnMut(Point) -> bool) -> Self {
        let mut grid = Self::open(bounds);
        for p in bounds.iter() {
            if is_blocked(p) {
                grid.block(p);
            }
        }
        grid
    }

    /// Create a grid with the given obstacle cells blocked.
    pub fn with_obstacles(bounds: Range, obstacles: &[Point]) -> Self {
        Self::with_obstacle_prefix(bounds, obstacles, obstacles.len())
    }

    /// Create a grid with only the first `k` obstacles of the list applied.
    ///
    /// This is the incremental variant: the caller re-builds the grid with a
    /// growing prefix of an ordered obstacle sequence. `k` larger than the
    /// list applies the whole list.
    pub fn with_obstacle_prefix(bounds: Range, obstacles: &[Point], k: usize) -> Self {
        let mut grid = Self::open(bounds);
        for &p in &obstacles[..k.min(obstacles.len())] {
            grid.block(p);
        }
        grid
    }

    /// Mark a cell as blocked. Out-of-bounds points are ignored.
    pub fn block(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.blocked[i] = true;
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the grid bounds, independent of obstacles.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is blocked. Out-of-bounds cells are blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::with_obstacles(
            Range::new(0, 0, 4, 3),
            &[Point::new(1, 1), Point::new(3, 2)],
        );
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
        assert!(back.is_blocked(Point::new(1, 1)));
        assert!(!back.is_blocked(Point::new(0, 0)));
    }
}
