//! The traits a day implements: parse once, then answer each part from the parsed input

use crate::error::{ParseError, SolveError};

/// The integer answer to one part of a puzzle
pub type Answer = i64;

/// A puzzle-statement example bundled with a day for its self-test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// The part this example checks
    pub part: u8,
    pub input: &'static str,
    /// The answer the puzzle statement gives for `input`
    pub expected: Answer,
}

impl Example {
    pub const fn new(part: u8, input: &'static str, expected: Answer) -> Self {
        Self {
            part,
            input,
            expected,
        }
    }
}

/// Turns a day's puzzle input into the data both parts work on.
///
/// The parsed data may borrow from the input, so a day whose parts only need lines or tokens
/// can keep `&'a str` slices instead of copying them.
///
/// ```
/// use aoc_runner::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("199\n200").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    /// Parsed input, shared mutably by the parts in order. Part one may leave intermediate
    /// results here for part two.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a day. `N` is the part number.
///
/// `#[derive(AocSolver)]` collects the `PartSolver<1>..=PartSolver<max_parts>` impls of a type
/// into its [`Solver`] impl.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError>;
}

/// A complete day: how many parts it answers, its bundled examples and part dispatch.
///
/// Normally derived. Written by hand it looks like this:
///
/// ```
/// use aoc_runner::{Answer, AocParser, Example, ParseError, SolveError, Solver};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///     const EXAMPLES: &'static [Example] = &[Example::new(1, "199\n200\n208\n200", 2)];
///
///     fn solve_part(depths: &mut Vec<i64>, part: u8) -> Result<Answer, SolveError> {
///         let window = match part {
///             1 => 1,
///             2 => 3,
///             _ => return Err(SolveError::PartNotImplemented(part)),
///         };
///         Ok(depths.windows(window + 1).filter(|w| w[window] > w[0]).count() as Answer)
///     }
/// }
///
/// let mut depths = Depths::parse("199\n200\n208\n200").unwrap();
/// assert_eq!(Depths::answer(&mut depths, 1).unwrap(), 2);
/// assert!(matches!(Depths::answer(&mut depths, 3), Err(SolveError::PartOutOfRange(3))));
/// ```
pub trait Solver: AocParser {
    /// Parts answered, numbered from 1
    const PARTS: u8;

    /// Examples the self-test checks. A day without any has no self-test.
    const EXAMPLES: &'static [Example] = &[];

    /// Answer `part`. Callers go through [`Solver::answer`], which range-checks first.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<Answer, SolveError>;

    /// Answer `part`, rejecting part numbers outside `1..=PARTS` with
    /// [`SolveError::PartOutOfRange`].
    fn answer(shared: &mut Self::SharedData<'_>, part: u8) -> Result<Answer, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}
