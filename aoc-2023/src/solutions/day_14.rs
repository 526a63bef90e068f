//! Day 14: Parabolic Reflector Dish
//!
//! Spin cycles repeat after a while. Remembering each platform state and when it was seen finds
//! the cycle, so only the remainder of the billion cycles needs simulating.

use std::collections::HashMap;

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

const EXAMPLE_INPUT: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 136),
    Example::new(2, EXAMPLE_INPUT, 64),
];

const SPIN_CYCLES: usize = 1_000_000_000;
const SPIN: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

const ROUND: char = 'O';
const CUBE: char = '#';
const EMPTY: char = '.';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 14, tags = ["grid"])]
pub struct Solver;

/// Roll every round rock as far as it goes towards `dir`
fn tilt(grid: &mut Grid, dir: Direction) {
    let (width, height) = (grid.width() as i64, grid.height() as i64);
    let (lanes, len) = if dir.is_vertical() {
        (width, height)
    } else {
        (height, width)
    };
    for lane in 0..lanes {
        // position `i` along the lane, counted from the wall rocks roll towards
        let at = |i: i64| match dir {
            Direction::Up => Point::new(lane, i),
            Direction::Down => Point::new(lane, height - 1 - i),
            Direction::Left => Point::new(i, lane),
            Direction::Right => Point::new(width - 1 - i, lane),
        };
        let mut free = 0;
        for i in 0..len {
            match grid.get(at(i)).copied() {
                Some(CUBE) => free = i + 1,
                Some(ROUND) => {
                    if free != i {
                        set(grid, at(i), EMPTY);
                        set(grid, at(free), ROUND);
                    }
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn set(grid: &mut Grid, p: Point, tile: char) {
    if let Some(cell) = grid.get_mut(p) {
        *cell = tile;
    }
}

fn spin(grid: &mut Grid) {
    for dir in SPIN {
        tilt(grid, dir);
    }
}

/// Each round rock weighs its distance from the south edge
fn north_load(grid: &Grid) -> Answer {
    let height = grid.height() as i64;
    grid.iter()
        .filter(|&(_, &c)| c == ROUND)
        .map(|(p, _)| height - p.y)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("{e}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut grid = shared.clone();
        tilt(&mut grid, Direction::Up);
        Ok(north_load(&grid))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut grid = shared.clone();
        let mut seen = HashMap::new();
        let mut done = 0;
        while done < SPIN_CYCLES {
            if let Some(first) = seen.insert(grid.clone(), done) {
                let period = done - first;
                let remaining = (SPIN_CYCLES - done) % period;
                for _ in 0..remaining {
                    spin(&mut grid);
                }
                break;
            }
            spin(&mut grid);
            done += 1;
        }
        Ok(north_load(&grid))
    }
}
