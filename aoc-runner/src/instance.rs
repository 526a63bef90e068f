//! Parsed days behind a uniform, timed interface

use crate::day::Day;
use crate::error::{ParseError, SolveError};
use crate::solver::{Answer, Solver};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock span of one parse or solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f` and record when it started and finished
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Timing { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// A part's answer and how long it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: Answer,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// One day's input after parsing, ready to answer parts
pub struct ParsedDay<'a, S: Solver> {
    day: Day,
    shared: S::SharedData<'a>,
}

impl<'a, S: Solver> ParsedDay<'a, S> {
    pub fn parse(day: Day, input: &'a str) -> Result<Self, ParseError> {
        Ok(Self {
            day,
            shared: S::parse(input)?,
        })
    }
}

/// A parsed day with its solver type erased, as handed out by the registry.
///
/// ```no_run
/// use aoc_runner::DynSolver;
///
/// fn print_parts(solver: &mut dyn DynSolver) {
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(r) => println!("Day {} Part {part}: {}", solver.day(), r.answer),
///             Err(e) => eprintln!("Day {} Part {part}: {e}", solver.day()),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    fn day(&self) -> Day;

    fn parts(&self) -> u8;

    /// Answer one part, timing only the solve. Parts outside `1..=parts()` are rejected.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;
}

impl<S: Solver> DynSolver for ParsedDay<'_, S> {
    fn day(&self) -> Day {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) = Timing::measure(|| S::answer(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            timing,
        })
    }
}

/// Result of parsing a day's input, timed whether or not the parse succeeded
pub struct ParseAttempt<'a> {
    pub day: Day,
    pub timing: Timing,
    pub solver: Result<Box<dyn DynSolver + 'a>, ParseError>,
}

impl ParseAttempt<'_> {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Vec<&str>, ParseError> {
            Ok(input.split_whitespace().collect())
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 1;

        fn solve_part(words: &mut Vec<&str>, _part: u8) -> Result<Answer, SolveError> {
            Ok(words.len() as Answer)
        }
    }

    #[test]
    fn test_measure_orders_start_and_end() {
        let (value, timing) = Timing::measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(timing.end >= timing.start);
        assert!(timing.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_parsed_day_solves_and_labels_parts() {
        let day = Day::new(6).unwrap();
        let mut parsed = ParsedDay::<Words>::parse(day, "a b  c\nd").unwrap();

        assert_eq!(parsed.day(), day);
        assert_eq!(parsed.parts(), 1);
        let result = parsed.solve(1).unwrap();
        assert_eq!(result.part, 1);
        assert_eq!(result.answer, 4);
        assert!(matches!(parsed.solve(2), Err(SolveError::PartOutOfRange(2))));
    }
}
