//! Test-only helper for building grids from ascii sketches.

use gridway_core::{Point, Range};
use gridway_grid::Grid;

/// Build a grid from an ascii sketch: `#` is blocked, `S` and `E` mark the
/// start and goal cells, anything else is free. Panics on sketches without
/// both markers; tests supply well-formed maps.
pub(crate) fn maze(map: &str) -> (Grid, Point, Point) {
    let lines: Vec<&str> = map.lines().collect();
    let height = lines.len() as i32;
    let width = lines.first().map_or(0, |l| l.len()) as i32;
    let bounds = Range::new(0, 0, width, height);

    let mut grid = Grid::open(bounds);
    let mut start = None;
    let mut goal = None;
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match ch {
                '#' => grid.block(p),
                'S' => start = Some(p),
                'E' => goal = Some(p),
                _ => {}
            }
        }
    }
    (grid, start.expect("map has no S"), goal.expect("map has no E"))
}
