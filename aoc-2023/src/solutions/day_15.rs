//! Day 15: Lens Library

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE_INPUT: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 1320),
    Example::new(2, EXAMPLE_INPUT, 145),
];

const BOXES: usize = 256;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 15, tags = ["hashing"])]
pub struct Solver;

/// The Holiday ASCII String Helper algorithm
fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |acc, b| (acc + b as usize) * 17 % BOXES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub raw: &'a str,
    pub label: &'a str,
    pub op: Operation,
}

fn parse_step(raw: &str) -> Result<Step<'_>, String> {
    let (label, op) = if let Some(label) = raw.strip_suffix('-') {
        (label, Operation::Remove)
    } else if let Some((label, focal)) = raw.split_once('=') {
        let focal = focal
            .parse::<u8>()
            .map_err(|e| format!("bad focal length {focal:?}: {e}"))?;
        (label, Operation::Insert(focal))
    } else {
        return Err(format!("step {raw:?} has no operation"));
    };
    if label.is_empty() {
        return Err(format!("step {raw:?} has no label"));
    }
    Ok(Step { raw, label, op })
}

/// Run every step against the boxes, each holding `(label, focal length)` in order
fn arrange<'a>(steps: &[Step<'a>]) -> Vec<Vec<(&'a str, u8)>> {
    let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); BOXES];
    for step in steps {
        let lenses = &mut boxes[hash(step.label)];
        let slot = lenses.iter().position(|&(label, _)| label == step.label);
        match (step.op, slot) {
            (Operation::Remove, Some(i)) => {
                lenses.remove(i);
            }
            (Operation::Remove, None) => {}
            (Operation::Insert(focal), Some(i)) => lenses[i].1 = focal,
            (Operation::Insert(focal), None) => lenses.push((step.label, focal)),
        }
    }
    boxes
}

fn focusing_power(boxes: &[Vec<(&str, u8)>]) -> Answer {
    boxes
        .iter()
        .zip(1..)
        .flat_map(|(lenses, box_no)| {
            lenses
                .iter()
                .zip(1..)
                .map(move |(&(_, focal), slot)| box_no * slot * focal as Answer)
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let steps = input
            .trim()
            .split(',')
            .map(|raw| raw.trim_matches(|c| c == '\n' || c == '\r'))
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse_step(raw).map_err(ParseError::InvalidFormat))
            .collect::<Result<Vec<_>, _>>()?;
        if steps.is_empty() {
            return Err(ParseError::MissingData("no initialization steps".into()));
        }
        Ok(steps)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|step| hash(step.raw) as Answer).sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(focusing_power(&arrange(shared)))
    }
}
