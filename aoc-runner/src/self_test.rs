//! Self-test of a solver against its bundled examples

use crate::error::{SelfTestError, SolverError};
use crate::solver::{Answer, Solver};

/// A passed example check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleCheck {
    pub part: u8,
    pub answer: Answer,
}

/// Outcome of running a solver's self-test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfTestOutcome {
    /// The solver bundles no examples
    NotImplemented,
    /// Every example produced its expected answer
    Passed(Vec<ExampleCheck>),
}

/// Run every example in `S::EXAMPLES`, stopping at the first failure.
///
/// Each example is parsed on its own, since examples for different parts often use different
/// inputs.
pub fn run_self_test<S: Solver>() -> Result<SelfTestOutcome, SelfTestError> {
    if S::EXAMPLES.is_empty() {
        return Ok(SelfTestOutcome::NotImplemented);
    }

    let mut checks = Vec::with_capacity(S::EXAMPLES.len());
    for (index, example) in S::EXAMPLES.iter().enumerate() {
        let part = example.part;
        let failed = |source: SolverError| SelfTestError::Failed {
            index,
            part,
            source,
        };

        let mut shared = S::parse(example.input).map_err(|e| failed(e.into()))?;
        let actual = S::answer(&mut shared, part).map_err(|e| failed(e.into()))?;
        tracing::trace!(index, part, actual, expected = example.expected, "checked example");

        if actual != example.expected {
            return Err(SelfTestError::Mismatch {
                index,
                part,
                expected: example.expected,
                actual,
            });
        }
        checks.push(ExampleCheck {
            part,
            answer: actual,
        });
    }
    Ok(SelfTestOutcome::Passed(checks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};
    use crate::solver::{AocParser, Example};

    struct Summer;

    impl AocParser for Summer {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {l}")))
                })
                .collect()
        }
    }

    impl Solver for Summer {
        const PARTS: u8 = 2;
        const EXAMPLES: &'static [Example] =
            &[Example::new(1, "1\n2\n3", 6), Example::new(2, "2\n5", 10)];

        fn solve_part(shared: &mut Vec<i64>, part: u8) -> Result<Answer, SolveError> {
            match part {
                1 => Ok(shared.iter().sum()),
                2 => Ok(shared.iter().product()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    struct WrongSummer;

    impl AocParser for WrongSummer {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
            Summer::parse(input)
        }
    }

    impl Solver for WrongSummer {
        const PARTS: u8 = 1;
        const EXAMPLES: &'static [Example] = &[Example::new(1, "1\n2", 4), Example::new(1, "x", 0)];

        fn solve_part(shared: &mut Vec<i64>, _part: u8) -> Result<Answer, SolveError> {
            Ok(shared.iter().sum())
        }
    }

    struct Untested;

    impl AocParser for Untested {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<&str, ParseError> {
            Ok(input)
        }
    }

    impl Solver for Untested {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<Answer, SolveError> {
            Ok(shared.len() as Answer)
        }
    }

    #[test]
    fn test_self_test_passes() {
        let outcome = run_self_test::<Summer>().unwrap();
        assert_eq!(
            outcome,
            SelfTestOutcome::Passed(vec![
                ExampleCheck { part: 1, answer: 6 },
                ExampleCheck {
                    part: 2,
                    answer: 10
                },
            ])
        );
    }

    #[test]
    fn test_self_test_reports_mismatch() {
        let err = run_self_test::<WrongSummer>().unwrap_err();
        assert!(matches!(
            err,
            SelfTestError::Mismatch {
                index: 0,
                part: 1,
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_self_test_without_examples() {
        assert_eq!(
            run_self_test::<Untested>().unwrap(),
            SelfTestOutcome::NotImplemented
        );
    }
}
