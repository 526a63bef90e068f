//! Day 17: Clumsy Crucible
//!
//! Every move goes straight for a run of cells and then turns, so a search state only needs the
//! position and whether the last run was vertical.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

const EXAMPLE_INPUT: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 102),
    Example::new(2, EXAMPLE_INPUT, 94),
    Example::new(
        2,
        "111111111111\n999999999991\n999999999991\n999999999991\n999999999991",
        71,
    ),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 17, tags = ["grid", "pathfinding"])]
pub struct Solver;

/// Least heat lost getting from the top-left to the bottom-right block when every straight run
/// is `min..=max` blocks long
fn least_heat_loss(grid: &Grid<u8>, min: i64, max: i64) -> Option<Answer> {
    let target = grid.last_point()?;
    let start = Point::new(0, 0);
    let mut best: HashMap<(Point, bool), Answer> = HashMap::new();
    let mut queue = BinaryHeap::new();
    for vertical in [false, true] {
        best.insert((start, vertical), 0);
        queue.push(Reverse((0, start, vertical)));
    }

    while let Some(Reverse((cost, at, vertical))) = queue.pop() {
        if at == target {
            return Some(cost);
        }
        if best.get(&(at, vertical)).is_some_and(|&b| b < cost) {
            continue;
        }
        let turns = if vertical {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        };
        for dir in turns {
            let mut next_cost = cost;
            for steps in 1..=max {
                let next = at.step_by(dir, steps);
                let Some(&loss) = grid.get(next) else {
                    break;
                };
                next_cost += Answer::from(loss);
                if steps < min {
                    continue;
                }
                let key = (next, !vertical);
                if best.get(&key).is_none_or(|&b| next_cost < b) {
                    best.insert(key, next_cost);
                    queue.push(Reverse((next_cost, next, !vertical)));
                }
            }
        }
    }
    None
}

fn solve_with(grid: &Grid<u8>, min: i64, max: i64) -> Result<Answer, SolveError> {
    least_heat_loss(grid, min, max)
        .ok_or_else(|| SolveError::SolveFailed("the factory can't be reached".into()))
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.trim()
                    .chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            ParseError::InvalidFormat(format!("(line {}) bad block {c:?}", y + 1))
                        })
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::new(rows).map_err(|e| ParseError::InvalidFormat(format!("{e}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        solve_with(shared, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        solve_with(shared, 4, 10)
    }
}
