use std::cmp::Ordering;
use std::fmt;

/// A point in 2D space; in grids `x` is the column and `y` the row
///
/// Coordinates may be negative, e.g. for neighbor candidates of an edge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Offsets of the Moore neighborhood, row-major
    #[rustfmt::skip]
    const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1,  0),          (1,  0),
        (-1,  1), (0,  1), (1,  1),
    ];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// All 8 surrounding points, without any bounds check
    pub fn all_neighbors(self) -> [Point; 8] {
        Self::NEIGHBOR_OFFSETS.map(|(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }

    pub fn manhattan_distance(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Largest of the absolute x and y differences
    pub fn chebyshev_distance(self, other: Point) -> i64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Twice the signed area of the polygon through `vertices`, positive when clockwise on screen
pub fn shoelace(vertices: &[Point]) -> i64 {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum()
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
