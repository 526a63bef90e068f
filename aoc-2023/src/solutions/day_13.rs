//! Day 13: Point of Incidence
//!
//! Part two's smudge means the mirror line is the one where the two sides differ in exactly
//! one cell, so both parts search for a line with a given number of differences.

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::text::paragraphs;

const EXAMPLE_INPUT: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 405),
    Example::new(2, EXAMPLE_INPUT, 400),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 13, tags = ["grid"])]
pub struct Solver;

/// Rows above a horizontal mirror line whose reflection differs in exactly `smudges` cells
fn mirror_row(grid: &Grid, smudges: usize) -> Option<usize> {
    let rows: Vec<&[char]> = grid.rows().collect();
    (1..rows.len()).find(|&line| {
        let differences: usize = (0..line)
            .rev()
            .zip(line..rows.len())
            .map(|(above, below)| {
                rows[above]
                    .iter()
                    .zip(rows[below])
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum();
        differences == smudges
    })
}

/// 100 per row above a horizontal line, 1 per column left of a vertical one
fn summarize(grid: &Grid, smudges: usize) -> Option<Answer> {
    mirror_row(grid, smudges)
        .map(|rows| 100 * rows)
        .or_else(|| mirror_row(&grid.transposed(), smudges))
        .map(|n| n as Answer)
}

fn total(patterns: &[Grid], smudges: usize) -> Result<Answer, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, grid)| {
            summarize(grid, smudges).ok_or_else(|| {
                SolveError::SolveFailed(format!("pattern {} has no mirror line", i + 1).into())
            })
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Grid>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        paragraphs(input)
            .into_iter()
            .enumerate()
            .map(|(i, lines)| {
                Grid::new(lines.iter().map(|line| line.chars().collect()).collect()).map_err(
                    |e| ParseError::InvalidFormat(format!("(pattern {}) {e}", i + 1)),
                )
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        total(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        total(shared, 1)
    }
}
