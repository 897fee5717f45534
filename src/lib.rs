//! **mazes** generates perfect mazes with a randomized recursive backtracker.
//!
//! A maze is two boolean matrices of opened walls: `verticals` between horizontally adjacent
//! cells and `horizontals` between vertically adjacent cells. Every cell is reachable from
//! every other by exactly one route.
//!
//! ```
//! use mazes::{cells::Cell, generators, grid_dimensions::GridDimensions, random,
//!             units::{ColumnsCount, RowsCount}};
//!
//! let dimensions = GridDimensions::new(RowsCount(5), ColumnsCount(10)).unwrap();
//! let mut rng = random::seeded_rng(7);
//! let maze = generators::recursive_backtracker(dimensions, Cell::new(0, 0), &mut rng).unwrap();
//! assert_eq!(maze.openings_count(), 5 * 10 - 1);
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod matrix;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod units;
mod utils;

pub use crate::utils::shuffle;
