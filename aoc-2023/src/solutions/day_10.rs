//! Day 10: Pipe Maze
//!
//! The loop through `S` is a simple polygon over cell centres. Its area from the shoelace
//! formula and Pick's theorem give the number of cells strictly inside it.

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point, shoelace};

const EXAMPLES: &[Example] = &[
    Example::new(1, "..F7.\n.FJ|.\nSJ.F7\n|F--J\nLJ...", 8),
    Example::new(
        2,
        "...........\n.S-------7.\n.|F-----7|.\n.||.....||.\n.||.....||.\n.|L-7.F-J|.\n.|..|.|..|.\n.L--J.L--J.\n...........",
        4,
    ),
    Example::new(
        2,
        ".F----7F7F7F7F-7....\n.|F--7||||||||FJ....\n.||.FJ||||||||L7....\nFJL7L7LJLJ||LJ.L-7..\nL--J.L7...LJS7F-7L7.\n....F-J..F7FJ|L7L7L7\n....L7.F7||L7|.L7L7|\n.....|FJLJ|FJ|F7|.LJ\n....FJL-7.||.||||...\n....L---J.LJ.LJLJ...",
        8,
    ),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 10, tags = ["grid"])]
pub struct Solver;

/// The two directions a pipe connects, `None` for ground and the start
fn connections(tile: char) -> Option<[Direction; 2]> {
    use Direction::*;
    match tile {
        '|' => Some([Up, Down]),
        '-' => Some([Left, Right]),
        'L' => Some([Up, Right]),
        'J' => Some([Up, Left]),
        '7' => Some([Down, Left]),
        'F' => Some([Down, Right]),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
}

impl Maze {
    fn connects(&self, p: Point, towards: Direction) -> bool {
        self.grid
            .get(p)
            .and_then(|&tile| connections(tile))
            .is_some_and(|dirs| dirs.contains(&towards))
    }

    /// Cells of the loop in walking order, starting at `S`
    fn trace_loop(&self) -> Result<Vec<Point>, SolveError> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.connects(self.start.step(d), d.reverse()))
            .find_map(|d| self.walk(d))
            .ok_or_else(|| SolveError::SolveFailed("no loop passes through the start".into()))
    }

    /// Follow the pipes leaving `S` towards `dir`, `None` if they don't lead back to it
    fn walk(&self, mut dir: Direction) -> Option<Vec<Point>> {
        let max_len = self.grid.width() * self.grid.height();
        let mut cells = vec![self.start];
        let mut at = self.start.step(dir);
        while at != self.start {
            let [a, b] = self
                .grid
                .get(at)
                .and_then(|&tile| connections(tile))
                .filter(|dirs| dirs.contains(&dir.reverse()))?;
            if cells.len() > max_len {
                return None;
            }
            cells.push(at);
            dir = if a == dir.reverse() { b } else { a };
            at = at.step(dir);
        }
        Some(cells)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Grid = input
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("{e}")))?;
        let mut starts = grid.iter().filter(|&(_, &c)| c == 'S').map(|(p, _)| p);
        let start = starts
            .next()
            .ok_or_else(|| ParseError::MissingData("no start tile `S`".into()))?;
        if starts.next().is_some() {
            return Err(ParseError::InvalidFormat("more than one start tile".into()));
        }
        drop(starts);
        Ok(Maze { grid, start })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.trace_loop()?.len() as Answer / 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let cells = shared.trace_loop()?;
        let area2 = shoelace(&cells).abs();
        // Pick: A = I + B/2 - 1
        Ok((area2 - cells.len() as i64) / 2 + 1)
    }
}
