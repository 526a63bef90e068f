use super::Point;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error building a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of cells, addressed by [`Point`]
///
/// Every row has the same length. An empty grid has width and height 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T = char> {
    rows: Vec<Vec<T>>,
    width: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows, checking that they all have the first row's width
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether `0 <= p.x < width` and `0 <= p.y < height`
    pub fn contains(&self, p: Point) -> bool {
        usize::try_from(p.x).is_ok_and(|x| x < self.width)
            && usize::try_from(p.y).is_ok_and(|y| y < self.height())
    }

    /// The cell at `p`, or `None` when `p` is out of bounds
    pub fn get(&self, p: Point) -> Option<&T> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.rows.get(y)?.get(x)
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Bottom-right corner, `None` for an empty grid
    pub fn last_point(&self) -> Option<Point> {
        if self.width == 0 || self.rows.is_empty() {
            return None;
        }
        Some(Point::new(self.width as i64 - 1, self.rows.len() as i64 - 1))
    }

    /// The neighbors of `p` that lie inside the grid
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.all_neighbors()
            .into_iter()
            .filter(move |&n| self.contains(n))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Columns become rows
    pub fn transposed(&self) -> Grid<T>
    where
        T: Clone,
    {
        let rows = (0..self.width)
            .map(|x| self.rows.iter().map(|row| row[x].clone()).collect())
            .collect();
        Grid {
            rows,
            width: self.rows.len(),
        }
    }

    /// All cells with their points, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.rows.iter().zip(0i64..).flat_map(|(row, y)| {
            row.iter()
                .zip(0i64..)
                .map(move |(cell, x)| (Point::new(x, y), cell))
        })
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.lines().map(|line| line.chars().collect()).collect())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
