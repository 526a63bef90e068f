//! Day 9: Mirage Maintenance

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::text::numbers;

const EXAMPLE_INPUT: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 114),
    Example::new(2, EXAMPLE_INPUT, 2),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 9, tags = ["sequences"])]
pub struct Solver;

/// The value after the end of `history`, from repeated differences
fn extrapolate(history: &[i64]) -> i64 {
    if history.iter().all(|&v| v == 0) {
        return 0;
    }
    let differences: Vec<i64> = history.iter().tuple_windows().map(|(a, b)| b - a).collect();
    history.last().copied().unwrap_or(0) + extrapolate(&differences)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                numbers::<i64>(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", i + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|history| extrapolate(history)).sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        // extrapolating backwards is extrapolating the reversed history
        Ok(shared
            .iter()
            .map(|history| {
                let reversed: Vec<i64> = history.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{SelfTestOutcome, run_self_test};

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), 18);
        assert_eq!(extrapolate(&[1, 3, 6, 10, 15, 21]), 28);
        assert_eq!(extrapolate(&[45, 30, 21, 16, 13, 10]), 5);
        assert_eq!(extrapolate(&[7]), 7);
        assert_eq!(extrapolate(&[]), 0);
    }

    #[test]
    fn test_negative_values() {
        let mut shared = Solver::parse("-3 -1 1").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), 3);
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), -5);
    }

    #[test]
    fn test_examples_pass() {
        assert!(matches!(
            run_self_test::<Solver>(),
            Ok(SelfTestOutcome::Passed(checks)) if checks.len() == 2
        ));
    }
}
