//! Runs the parts of one day, isolating failures per part

use crate::error::PartError;
use aoc_runner::{Day, DynSolver, SolveResult, SolverError, SolverRegistry, Timing};
use chrono::TimeDelta;
use std::any::Any;
use std::ops::RangeInclusive;
use std::panic::{self, AssertUnwindSafe};

/// Result of one part
#[derive(Debug)]
pub struct PartOutcome {
    pub part: u8,
    pub result: Result<SolveResult, PartError>,
}

/// Everything produced by running one day over an input
#[derive(Debug)]
pub struct DayReport {
    pub day: Day,
    /// Time spent parsing, including a parse that failed
    pub parse_duration: TimeDelta,
    pub parts: Vec<PartOutcome>,
}

/// Parse `input` with the day's solver and solve every part in order.
///
/// Only a missing solver is an error here. A parse failure or panic while parsing is reported
/// against every part, and a part that fails or panics does not stop the next one.
pub fn run_day(
    registry: &SolverRegistry,
    day: Day,
    input: &str,
) -> Result<DayReport, SolverError> {
    let info = registry.get_info(day).ok_or(SolverError::NotFound(day))?;
    let parts = 1..=info.parts;

    // a panicking parser never returns its own timing, so time the whole call as a fallback
    let (attempt, outer) = Timing::measure(|| catch_panic(|| registry.parse(day, input)));
    let attempt = match attempt {
        Ok(attempt) => attempt?,
        Err(message) => {
            tracing::warn!(%day, %message, "parser panicked");
            return Ok(DayReport {
                day,
                parse_duration: outer.duration(),
                parts: failed_parts(parts, || PartError::Panicked(message.clone())),
            });
        }
    };

    let parse_duration = attempt.duration();
    let mut solver = match attempt.solver {
        Ok(solver) => solver,
        Err(e) => {
            tracing::warn!(%day, error = %e, "input did not parse");
            return Ok(DayReport {
                day,
                parse_duration,
                parts: failed_parts(parts, || SolverError::ParseError(e.clone()).into()),
            });
        }
    };

    let parts = parts
        .map(|part| PartOutcome {
            part,
            result: solve_part(solver.as_mut(), part),
        })
        .collect();

    Ok(DayReport {
        day,
        parse_duration,
        parts,
    })
}

fn failed_parts(parts: RangeInclusive<u8>, error: impl Fn() -> PartError) -> Vec<PartOutcome> {
    parts
        .map(|part| PartOutcome {
            part,
            result: Err(error()),
        })
        .collect()
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> Result<SolveResult, PartError> {
    match catch_panic(|| solver.solve(part)) {
        Ok(Ok(result)) => {
            tracing::debug!(part, duration = ?result.duration(), "solved part");
            Ok(result)
        }
        Ok(Err(e)) => Err(SolverError::from(e).into()),
        Err(message) => Err(PartError::Panicked(message)),
    }
}

fn catch_panic<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{
        Answer, AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
    };

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Flaky;

    impl AocParser for Flaky {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
            if input.starts_with('!') {
                panic!("unreadable header");
            }
            input
                .lines()
                .map(|l| {
                    l.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {l}")))
                })
                .collect()
        }
    }

    impl PartSolver<1> for Flaky {
        fn solve(shared: &mut Vec<i64>) -> Result<Answer, SolveError> {
            Ok(shared.iter().sum())
        }
    }

    impl PartSolver<2> for Flaky {
        fn solve(shared: &mut Vec<i64>) -> Result<Answer, SolveError> {
            if shared.is_empty() {
                panic!("nothing to multiply");
            }
            Err(SolveError::SolveFailed("part two is unsolved".into()))
        }
    }

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver::<Flaky>(day(9), &[])
            .unwrap()
            .build()
    }

    #[test]
    fn test_failing_part_does_not_stop_the_other() {
        let report = run_day(&registry(), day(9), "1\n2").unwrap();
        assert!(report.parse_duration >= TimeDelta::zero());
        assert_eq!(report.parts[0].part, 1);
        assert_eq!(report.parts[0].result.as_ref().unwrap().part, 1);
        assert_eq!(report.parts.len(), 2);
        assert_eq!(report.parts[0].result.as_ref().unwrap().answer, 3);
        assert!(matches!(
            report.parts[1].result,
            Err(PartError::Solver(SolverError::SolveError(
                SolveError::SolveFailed(_)
            )))
        ));
    }

    #[test]
    fn test_panicking_part_is_caught() {
        let report = run_day(&registry(), day(9), "").unwrap();
        assert_eq!(report.parts[0].result.as_ref().unwrap().answer, 0);
        match &report.parts[1].result {
            Err(PartError::Panicked(message)) => assert_eq!(message, "nothing to multiply"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_failure_is_reported_per_part() {
        let report = run_day(&registry(), day(9), "1\nx").unwrap();
        assert!(report.parse_duration >= TimeDelta::zero());
        assert_eq!(
            report.parts.iter().map(|p| p.part).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(report.parts.iter().all(|p| matches!(
            p.result,
            Err(PartError::Solver(SolverError::ParseError(_)))
        )));
    }

    #[test]
    fn test_panicking_parser_is_reported_per_part() {
        let report = run_day(&registry(), day(9), "!1").unwrap();
        assert!(report.parse_duration >= TimeDelta::zero());
        assert_eq!(report.parts.len(), 2);
        for outcome in &report.parts {
            match &outcome.result {
                Err(PartError::Panicked(message)) => assert_eq!(message, "unreadable header"),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_day_is_an_error() {
        assert!(matches!(
            run_day(&registry(), day(10), "1"),
            Err(SolverError::NotFound(d)) if d == day(10)
        ));
    }
}
