//! Day 12: Hot Springs
//!
//! Arrangements are counted with a table over (position in the row, groups already placed),
//! filled from the end of the row backwards.

use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE_INPUT: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 21),
    Example::new(2, EXAMPLE_INPUT, 525_152),
];

const FOLDS: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 12, tags = ["dp"])]
pub struct Solver;

/// One row of springs: `#` damaged, `.` operational, `?` unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub springs: &'a str,
    pub groups: Vec<usize>,
}

impl Record<'_> {
    fn arrangements(&self) -> Answer {
        arrangements(self.springs.as_bytes(), &self.groups)
    }

    fn unfolded_arrangements(&self) -> Answer {
        let springs = vec![self.springs; FOLDS].join("?");
        arrangements(springs.as_bytes(), &self.groups.repeat(FOLDS))
    }
}

/// Ways to place damaged groups of the given sizes, in order, consistent with `springs`
fn arrangements(springs: &[u8], groups: &[usize]) -> Answer {
    let (n, m) = (springs.len(), groups.len());
    // ways[i][j]: arrangements of springs[i..] holding exactly groups[j..]
    let mut ways = vec![vec![0 as Answer; m + 1]; n + 2];
    ways[n][m] = 1;
    ways[n + 1][m] = 1;
    for i in (0..n).rev() {
        for j in 0..=m {
            let mut total = 0;
            if springs[i] != b'#' {
                total += ways[i + 1][j];
            }
            if springs[i] != b'.' && j < m {
                let end = i + groups[j];
                let fits = end <= n
                    && !springs[i..end].contains(&b'.')
                    && springs.get(end) != Some(&b'#');
                if fits {
                    // skip the separator after the group too
                    total += ways[end + 1][j + 1];
                }
            }
            ways[i][j] = total;
        }
    }
    ways[0][0]
}

fn parse_record(line: &str) -> Result<Record<'_>, String> {
    let (springs, groups) = line
        .split_once(' ')
        .ok_or_else(|| "expected `<springs> <groups>`".to_string())?;
    if let Some(bad) = springs.chars().find(|c| !matches!(c, '#' | '.' | '?')) {
        return Err(format!("unknown spring {bad:?}"));
    }
    let groups = groups
        .trim()
        .split(',')
        .map(|g| match g.parse::<usize>() {
            Ok(0) | Err(_) => Err(format!("invalid group size {g:?}")),
            Ok(size) => Ok(size),
        })
        .collect::<Result<_, _>>()?;
    Ok(Record { springs, groups })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                parse_record(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", i + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(Record::arrangements).sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().map(Record::unfolded_arrangements).sum())
    }
}
