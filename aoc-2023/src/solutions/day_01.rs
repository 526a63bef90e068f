//! Day 1: Trebuchet?!
//!
//! Each line hides a calibration value: its first and last digit. Part two also counts digits
//! spelled out as words, which may share letters (`eightwo` is 8 then 2).

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLES: &[Example] = &[
    Example::new(1, "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet", 142),
    Example::new(
        2,
        "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen",
        281,
    ),
];

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 1, tags = ["parsing"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|line| calibration_value(line, false)).sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(|line| calibration_value(line, true)).sum())
    }
}

/// First and last digit of the line as a two-digit number, 0 when it has no digit
fn calibration_value(line: &str, spelled: bool) -> Answer {
    let mut digits = line
        .char_indices()
        .filter_map(|(i, _)| digit_at(&line[i..], spelled));
    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0,
    }
}

/// The digit starting `rest`, if any
fn digit_at(rest: &str, spelled: bool) -> Option<Answer> {
    let first = rest.as_bytes().first()?;
    if first.is_ascii_digit() {
        return Some(Answer::from(first - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED_DIGITS
        .iter()
        .zip(1..)
        .find_map(|(word, value)| rest.starts_with(word).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{SelfTestOutcome, Solver as _, run_self_test};

    #[test]
    fn test_calibration_values() {
        assert_eq!(calibration_value("treb7uchet", false), 77);
        assert_eq!(calibration_value("a1b2c3d4e5f", false), 15);
        assert_eq!(calibration_value("eightwothree", false), 0);
        assert_eq!(calibration_value("eightwothree", true), 83);
        assert_eq!(calibration_value("zoneight234", true), 14);
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibration_value("oneight", true), 18);
        assert_eq!(calibration_value("xtwone", true), 21);
    }

    #[test]
    fn test_examples_pass() {
        assert!(matches!(
            run_self_test::<Solver>(),
            Ok(SelfTestOutcome::Passed(checks)) if checks.len() == 2
        ));
    }

    #[test]
    fn test_lines_without_digits_count_zero() {
        let mut shared = Solver::parse("abc\n9\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), 99);
    }
}
