//! 2D points and rectangular grids
//!
//! [`Point`] is an `(x, y)` coordinate where `x` is the column and `y` the row. Points order
//! row-major (by `y`, then `x`), so sorted points read like the grid does.
//!
//! [`Grid`] holds rows of cells of equal length. Construction rejects ragged rows with
//! [`GridError::RaggedRow`].
//!
//! [`Direction`] moves a point one cell at a time with [`Point::step`] and turns by quarter
//! turns. [`shoelace`] gives twice the area of a polygon walked through points.
//!
//! # Example
//!
//! ```rust
//! use aoc_2023::utils::grid::{Grid, Point};
//!
//! let grid: Grid = "abc\ndef\nghi".parse().unwrap();
//! assert_eq!((grid.width(), grid.height()), (3, 3));
//! assert_eq!(grid.get(Point::new(1, 2)), Some(&'h'));
//!
//! // Corners only have three neighbors inside the grid
//! assert_eq!(grid.neighbors(Point::new(0, 0)).count(), 3);
//! assert_eq!(grid.neighbors(Point::new(1, 1)).count(), 8);
//! ```

mod cells;
mod direction;
mod point;

pub use cells::{Grid, GridError};
pub use direction::Direction;
pub use point::{Point, shoelace};
