//! Day 2: Cube Conundrum
//!
//! Each game reveals handfuls of red, green and blue cubes from a bag.

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE_INPUT: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 8),
    Example::new(2, EXAMPLE_INPUT, 2286),
];

/// The bag part one asks about
const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 2, tags = ["parsing"])]
pub struct Solver;

/// Cube counts by colour
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    /// Per-colour maximum of two sets
    fn max(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_within(self, limit: CubeSet) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    fn power(self) -> Answer {
        Answer::from(self.red) * Answer::from(self.green) * Answer::from(self.blue)
    }
}

impl FromStr for CubeSet {
    type Err = anyhow::Error;

    /// Parses one handful, e.g. `3 blue, 4 red`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = CubeSet::default();
        for entry in s.split(',') {
            let (count, colour) = entry
                .trim()
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected `<count> <colour>`, got {:?}", entry.trim()))?;
            let count: u32 = count
                .parse()
                .with_context(|| format!("invalid cube count {count:?}"))?;
            match colour {
                "red" => set.red += count,
                "green" => set.green += count,
                "blue" => set.blue += count,
                other => bail!("unknown colour {other:?}"),
            }
        }
        Ok(set)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<CubeSet>,
}

impl Game {
    /// The fewest cubes of each colour that make every draw possible
    fn fewest_cubes(&self) -> CubeSet {
        self.draws
            .iter()
            .fold(CubeSet::default(), |acc, &draw| acc.max(draw))
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (header, draws) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' after game id"))?;
        let id = header
            .strip_prefix("Game ")
            .ok_or_else(|| anyhow!("expected `Game <id>`, got {header:?}"))?
            .trim()
            .parse()
            .context("invalid game id")?;
        let draws = draws
            .split(';')
            .map(CubeSet::from_str)
            .collect::<Result<_, _>>()?;
        Ok(Game { id, draws })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                line.parse::<Game>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e:#}", line_idx + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.fewest_cubes().fits_within(BAG))
            .map(|game| Answer::from(game.id))
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|game| game.fewest_cubes().power()).sum())
    }
}
