//! Day 6: Wait For It
//!
//! Holding the button for `h` of a race's `t` milliseconds travels `h * (t - h)`. The winning
//! hold times form one interval around `t / 2`, found from the roots of the quadratic.

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE_INPUT: &str = "Time:      7  15   30\nDistance:  9  40  200";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 288),
    Example::new(2, EXAMPLE_INPUT, 71503),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 6, tags = ["math"])]
pub struct Solver;

/// The digit runs of both lines, kept as text since part two joins them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Races<'a> {
    pub times: Vec<&'a str>,
    pub records: Vec<&'a str>,
}

fn labelled<'a>(line: Option<&'a str>, label: &str) -> Result<Vec<&'a str>, ParseError> {
    let values = line
        .and_then(|l| l.trim().strip_prefix(label))
        .ok_or_else(|| ParseError::MissingData(format!("expected a `{label}` line")))?;
    let tokens: Vec<&str> = values.split_whitespace().collect();
    if let Some(bad) = tokens.iter().find(|t| !t.bytes().all(|b| b.is_ascii_digit())) {
        return Err(ParseError::InvalidFormat(format!("not a number: {bad:?}")));
    }
    Ok(tokens)
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());
        let times = labelled(lines.next(), "Time:")?;
        let records = labelled(lines.next(), "Distance:")?;
        if times.len() != records.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times but {} distances",
                times.len(),
                records.len()
            )));
        }
        Ok(Races { times, records })
    }
}

fn number(digits: &str) -> Result<i64, SolveError> {
    digits
        .parse()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

/// Number of whole hold times that beat `record` in a race lasting `time`
fn ways_to_win(time: i64, record: i64) -> i64 {
    let discriminant = time * time - 4 * record;
    if discriminant <= 0 {
        return 0;
    }
    // the float root is within one of the first winning hold; correct it both ways
    let beats = |hold: i64| hold * (time - hold) > record;
    let mut first = ((time as f64 - (discriminant as f64).sqrt()) / 2.0).floor() as i64;
    first = first.max(0);
    while first <= time / 2 && !beats(first) {
        first += 1;
    }
    while first > 0 && beats(first - 1) {
        first -= 1;
    }
    let last = time - first;
    if first > last { 0 } else { last - first + 1 }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        shared
            .times
            .iter()
            .zip(&shared.records)
            .map(|(time, record)| -> Result<Answer, SolveError> {
                Ok(ways_to_win(number(time)?, number(record)?))
            })
            .product()
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let time = number(&shared.times.concat())?;
        let record = number(&shared.records.concat())?;
        Ok(ways_to_win(time, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{SelfTestOutcome, run_self_test};

    #[test]
    fn test_ways_to_win() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(15, 40), 8);
        assert_eq!(ways_to_win(30, 200), 9);
        assert_eq!(ways_to_win(71530, 940200), 71503);
    }

    #[test]
    fn test_unbeatable_record() {
        // holding 2 of 4 ties the record at best
        assert_eq!(ways_to_win(4, 4), 0);
        assert_eq!(ways_to_win(3, 10), 0);
    }

    #[test]
    fn test_parse_keeps_digit_runs() {
        let races = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(races.times, vec!["7", "15", "30"]);
        assert_eq!(races.records.concat(), "940200");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("Time: 7 8\nDistance: 9"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("Time: 7"),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(
            Solver::parse("Time: 7x\nDistance: 9"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_examples_pass() {
        assert!(matches!(
            run_self_test::<Solver>(),
            Ok(SelfTestOutcome::Passed(checks)) if checks.len() == 2
        ));
    }
}
