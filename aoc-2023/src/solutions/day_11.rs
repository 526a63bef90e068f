//! Day 11: Cosmic Expansion

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};

const EXAMPLE_INPUT: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 374),
    Example::new(2, EXAMPLE_INPUT, 82_000_210),
];

const OLD_EXPANSION: i64 = 1_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 11, tags = ["grid"])]
pub struct Solver;

/// Galaxy positions and the empty rows and columns between them, both sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub galaxies: Vec<Point>,
    pub empty_rows: Vec<i64>,
    pub empty_columns: Vec<i64>,
}

impl Image {
    fn from_grid(grid: &Grid) -> Self {
        let galaxies: Vec<Point> = grid
            .iter()
            .filter(|&(_, &c)| c == '#')
            .map(|(p, _)| p)
            .collect();
        let empty = |len: usize, coord: fn(&Point) -> i64| -> Vec<i64> {
            (0..len as i64)
                .filter(|&i| galaxies.iter().all(|g| coord(g) != i))
                .collect()
        };
        Image {
            empty_rows: empty(grid.height(), |p| p.y),
            empty_columns: empty(grid.width(), |p| p.x),
            galaxies,
        }
    }

    /// Galaxy positions after every empty row and column grows to `factor` copies
    fn expanded(&self, factor: i64) -> Vec<Point> {
        let grow = |empties: &[i64], c: i64| {
            c + (factor - 1) * empties.partition_point(|&e| e < c) as i64
        };
        self.galaxies
            .iter()
            .map(|g| {
                Point::new(
                    grow(&self.empty_columns[..], g.x),
                    grow(&self.empty_rows[..], g.y),
                )
            })
            .collect()
    }

    fn total_distance(&self, factor: i64) -> Answer {
        self.expanded(factor)
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.manhattan_distance(*b))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Grid = input
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("{e}")))?;
        Ok(Image::from_grid(&grid))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.total_distance(2))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.total_distance(OLD_EXPANSION))
    }
}
