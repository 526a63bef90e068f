//! Day 18: Lavaduct Lagoon
//!
//! The trench runs through cell centres. Shoelace gives the area inside that path, and the
//! cells cut by it add half a cell per unit of perimeter plus one for the four outer corners.

use std::str::FromStr;

use anyhow::{Context, bail, ensure};
use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Point, shoelace};

const EXAMPLE_INPUT: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 62),
    Example::new(2, EXAMPLE_INPUT, 952_408_144_115),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 18, tags = ["geometry"])]
pub struct Solver;

/// One straight run of the trench
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dig {
    pub dir: Direction,
    pub meters: i64,
}

/// A plan line read both ways: the written instruction and the one hidden in its colour code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLine {
    pub written: Dig,
    pub from_colour: Dig,
}

impl FromStr for PlanLine {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split_whitespace();
        let (Some(dir), Some(meters), Some(colour), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            bail!("expected `<dir> <meters> (#rrggbb)`");
        };
        let dir = match dir {
            "U" => Direction::Up,
            "R" => Direction::Right,
            "D" => Direction::Down,
            "L" => Direction::Left,
            other => bail!("unknown direction {other:?}"),
        };
        let meters = meters
            .parse::<i64>()
            .with_context(|| format!("bad distance {meters:?}"))?;
        ensure!(meters > 0, "distance must be positive");

        let hex = colour
            .strip_prefix("(#")
            .and_then(|c| c.strip_suffix(')'))
            .context("colour must look like (#rrggbb)")?;
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "colour {hex:?} is not six hex digits"
        );
        let (distance, turn) = hex.split_at(5);
        let hidden_meters =
            i64::from_str_radix(distance, 16).with_context(|| format!("bad colour {hex:?}"))?;
        let hidden_dir = match turn {
            "0" => Direction::Right,
            "1" => Direction::Down,
            "2" => Direction::Left,
            "3" => Direction::Up,
            other => bail!("colour {hex:?} ends in {other:?}, not a direction"),
        };
        Ok(PlanLine {
            written: Dig { dir, meters },
            from_colour: Dig {
                dir: hidden_dir,
                meters: hidden_meters,
            },
        })
    }
}

/// Cells dug out once the trench is followed and its interior excavated
fn lagoon_size(digs: impl Iterator<Item = Dig>) -> Answer {
    let mut at = Point::new(0, 0);
    let mut corners = vec![at];
    let mut perimeter = 0;
    for dig in digs {
        at = at.step_by(dig.dir, dig.meters);
        corners.push(at);
        perimeter += dig.meters;
    }
    shoelace(&corners).abs() / 2 + perimeter / 2 + 1
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PlanLine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let plan = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.parse::<PlanLine>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e:#}", i + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if plan.is_empty() {
            return Err(ParseError::MissingData("empty dig plan".into()));
        }
        Ok(plan)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(lagoon_size(shared.iter().map(|line| line.written)))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(lagoon_size(shared.iter().map(|line| line.from_colour)))
    }
}
