use super::Point;

/// One of the four grid directions, with `Up` towards smaller `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub fn turn_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    pub fn reverse(self) -> Self {
        self.turn_left().turn_left()
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Unit step as `(dx, dy)`
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

impl Point {
    /// The adjacent point in `dir`
    pub fn step(self, dir: Direction) -> Point {
        self.step_by(dir, 1)
    }

    pub fn step_by(self, dir: Direction, n: i64) -> Point {
        let (dx, dy) = dir.offset();
        Point::new(self.x + dx * n, self.y + dy * n)
    }
}
