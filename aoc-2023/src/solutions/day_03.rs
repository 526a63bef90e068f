//! Day 3: Gear Ratios
//!
//! An engine schematic is a grid of digits, `.` and symbols. Numbers run horizontally and count
//! as part numbers when any of their digits touches a symbol, diagonals included.

use std::collections::HashMap;

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};

const EXAMPLE_INPUT: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 4361),
    Example::new(2, EXAMPLE_INPUT, 467_835),
];

const GEAR: char = '*';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 3, tags = ["grid"])]
pub struct Solver;

/// A run of digits on one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchematicNumber {
    pub row: i64,
    /// First column of the run
    pub start: i64,
    /// One past the last column
    pub end: i64,
    pub value: Answer,
}

impl SchematicNumber {
    fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.start..self.end).map(|x| Point::new(x, self.row))
    }

    /// Cells around the number that satisfy `pred`, each reported once
    fn adjacent_where<'g>(
        &'g self,
        grid: &'g Grid,
        pred: impl Fn(char) -> bool + 'g,
    ) -> impl Iterator<Item = Point> + 'g {
        self.cells()
            .flat_map(move |cell| grid.neighbors(cell))
            .filter(move |&p| grid.get(p).is_some_and(|&c| pred(c)))
            .unique()
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_ascii_digit() && c != '.'
}

pub struct Schematic {
    pub grid: Grid,
    pub numbers: Vec<SchematicNumber>,
}

/// Collect every horizontal digit run, row by row
fn find_numbers(grid: &Grid) -> Vec<SchematicNumber> {
    let mut numbers = Vec::new();
    for (row, y) in grid.rows().zip(0i64..) {
        let mut current: Option<SchematicNumber> = None;
        for (&c, x) in row.iter().zip(0i64..) {
            match (c.to_digit(10), current.as_mut()) {
                (Some(d), Some(number)) => {
                    number.value = number.value * 10 + Answer::from(d);
                    number.end = x + 1;
                }
                (Some(d), None) => {
                    current = Some(SchematicNumber {
                        row: y,
                        start: x,
                        end: x + 1,
                        value: Answer::from(d),
                    });
                }
                (None, _) => numbers.extend(current.take()),
            }
        }
        // a number may end at the right edge
        numbers.extend(current);
    }
    numbers
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Grid = input
            .trim_end()
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("engine schematic: {e}")))?;
        let numbers = find_numbers(&grid);
        Ok(Schematic { grid, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let Schematic { grid, numbers } = &*shared;
        Ok(numbers
            .iter()
            .filter(|number| number.adjacent_where(grid, is_symbol).next().is_some())
            .map(|number| number.value)
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let Schematic { grid, numbers } = &*shared;
        let mut gears: HashMap<Point, Vec<Answer>> = HashMap::new();
        for number in numbers {
            for gear in number.adjacent_where(grid, |c| c == GEAR) {
                gears.entry(gear).or_default().push(number.value);
            }
        }
        Ok(gears
            .values()
            .filter_map(|values| match values.as_slice() {
                [a, b] => Some(a * b),
                _ => None,
            })
            .sum())
    }
}
