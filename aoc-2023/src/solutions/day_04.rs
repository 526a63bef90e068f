//! Day 4: Scratchcards

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::text::numbers;

const EXAMPLE_INPUT: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 13),
    Example::new(2, EXAMPLE_INPUT, 30),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 4, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub winning: HashSet<u32>,
    pub have: Vec<u32>,
}

impl Card {
    /// How many of the numbers we have are winning numbers
    fn matches(&self) -> usize {
        self.have.iter().filter(|n| self.winning.contains(n)).count()
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (_, numbers_part) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' after card id"))?;
        let (winning, have) = numbers_part
            .split_once('|')
            .ok_or_else(|| anyhow!("missing '|' between number lists"))?;
        Ok(Card {
            winning: numbers(winning)
                .context("invalid winning number")?
                .into_iter()
                .collect(),
            have: numbers(have).context("invalid number")?,
        })
    }
}

impl AocParser for Solver {
    /// Match count per card
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.parse::<Card>()
                    .map(|card| card.matches())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e:#}", i + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| (1 as Answer) << (m - 1))
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut copies = vec![1 as Answer; shared.len()];
        for (i, &m) in shared.iter().enumerate() {
            let won = copies[i];
            for later in copies.iter_mut().skip(i + 1).take(m) {
                *later += won;
            }
        }
        Ok(copies.iter().sum())
    }
}
