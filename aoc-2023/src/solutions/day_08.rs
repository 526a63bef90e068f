//! Day 8: Haunted Wasteland
//!
//! Part two walks every `..A` node at once. Each walk reaches its `..Z` node on a fixed cycle,
//! so the walks first line up after the least common multiple of the cycle lengths.

use std::collections::HashMap;

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use num::integer::lcm;

use crate::utils::text::paragraphs;

const EXAMPLES: &[Example] = &[
    Example::new(
        1,
        "RL\n\nAAA = (BBB, CCC)\nBBB = (DDD, EEE)\nCCC = (ZZZ, GGG)\nDDD = (DDD, DDD)\nEEE = (EEE, EEE)\nGGG = (GGG, GGG)\nZZZ = (ZZZ, ZZZ)",
        2,
    ),
    Example::new(1, "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)", 6),
    Example::new(
        2,
        "LR\n\n11A = (11B, XXX)\n11B = (XXX, 11Z)\n11Z = (11B, XXX)\n22A = (22B, XXX)\n22B = (22C, 22C)\n22C = (22Z, 22Z)\n22Z = (22B, 22B)\nXXX = (XXX, XXX)",
        6,
    ),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 8, tags = ["graph"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network<'a> {
    pub turns: Vec<Turn>,
    pub nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    /// Steps from `start` until `done` holds for the current node
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> Result<Answer, SolveError> {
        // past this many steps the walk is repeating states without finishing
        let limit = self.turns.len() * self.nodes.len();
        let mut node = start;
        for (count, turn) in self.turns.iter().cycle().take(limit + 1).enumerate() {
            if done(node) {
                return Ok(count as Answer);
            }
            let &(left, right) = self
                .nodes
                .get(node)
                .ok_or_else(|| SolveError::SolveFailed(format!("unknown node {node:?}").into()))?;
            node = match turn {
                Turn::Left => left,
                Turn::Right => right,
            };
        }
        Err(SolveError::SolveFailed(
            format!("the walk from {start:?} never finishes").into(),
        ))
    }
}

fn parse_node(line: &str) -> Option<(&str, (&str, &str))> {
    let (name, targets) = line.split_once(" = ")?;
    let (left, right) = targets
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .split_once(", ")?;
    Some((name.trim(), (left, right)))
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let blocks = paragraphs(input);
        let [turns, nodes] = blocks.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected turns and nodes separated by a blank line, got {} blocks",
                blocks.len()
            )));
        };
        let turns = turns
            .concat()
            .chars()
            .map(|c| match c {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                other => Err(ParseError::InvalidFormat(format!("unknown turn {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            return Err(ParseError::MissingData("no turns".into()));
        }
        let nodes = nodes
            .iter()
            .map(|&line| {
                parse_node(line).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected `AAA = (BBB, CCC)`, got {line:?}"))
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Network { turns, nodes })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        shared.steps("AAA", |node| node == "ZZZ")
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut starts: Vec<&str> = shared
            .nodes
            .keys()
            .copied()
            .filter(|node| node.ends_with('A'))
            .collect();
        starts.sort_unstable();
        let mut total = 1;
        for start in starts {
            total = lcm(total, shared.steps(start, |node| node.ends_with('Z'))?);
        }
        Ok(total)
    }
}
