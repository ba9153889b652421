//! **gridway-grid** — Grid shortest-path engine (occupancy map).
//!
//! A [`Grid`] answers two questions in O(1): is a cell in bounds, and is it
//! blocked. Out-of-range queries report "blocked" rather than failing, so
//! callers never need error handling on the hot path.

pub mod grid;

pub use grid::Grid;
