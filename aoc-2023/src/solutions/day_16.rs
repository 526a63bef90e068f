//! Day 16: The Floor Will Be Lava

use std::collections::HashSet;

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

const EXAMPLE_INPUT: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 46),
    Example::new(2, EXAMPLE_INPUT, 51),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 16, tags = ["grid"])]
pub struct Solver;

/// Directions a beam travelling in `dir` leaves a tile with
fn deflect(tile: char, dir: Direction) -> Vec<Direction> {
    match (tile, dir.is_vertical()) {
        ('/', false) | ('\\', true) => vec![dir.turn_left()],
        ('/', true) | ('\\', false) => vec![dir.turn_right()],
        ('|', false) => vec![Direction::Up, Direction::Down],
        ('-', true) => vec![Direction::Left, Direction::Right],
        _ => vec![dir],
    }
}

/// Number of tiles a beam entering at `start` heading `dir` passes through
fn energized(grid: &Grid, start: Point, dir: Direction) -> usize {
    let mut seen = HashSet::new();
    let mut beams = vec![(start, dir)];
    while let Some((at, dir)) = beams.pop() {
        let Some(&tile) = grid.get(at) else {
            continue;
        };
        if !seen.insert((at, dir)) {
            continue;
        }
        beams.extend(deflect(tile, dir).into_iter().map(|d| (at.step(d), d)));
    }
    seen.into_iter()
        .map(|(p, _)| p)
        .collect::<HashSet<_>>()
        .len()
}

/// Every edge cell with the direction pointing into the grid
fn entries(grid: &Grid) -> Vec<(Point, Direction)> {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let columns = (0..w).flat_map(|x| {
        [
            (Point::new(x, 0), Direction::Down),
            (Point::new(x, h - 1), Direction::Up),
        ]
    });
    let rows = (0..h).flat_map(|y| {
        [
            (Point::new(0, y), Direction::Right),
            (Point::new(w - 1, y), Direction::Left),
        ]
    });
    columns.chain(rows).collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Grid = input
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("{e}")))?;
        if let Some((p, c)) = grid
            .iter()
            .find(|&(_, &c)| !matches!(c, '.' | '/' | '\\' | '|' | '-'))
        {
            return Err(ParseError::InvalidFormat(format!("unknown tile {c:?} at {p}")));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(energized(shared, Point::new(0, 0), Direction::Right) as Answer)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let grid: &Grid = shared;
        entries(grid)
            .into_iter()
            .map(|(start, dir)| energized(grid, start, dir) as Answer)
            .max()
            .ok_or_else(|| SolveError::SolveFailed("the contraption is empty".into()))
    }
}
