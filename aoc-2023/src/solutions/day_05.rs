//! Day 5: If You Give A Seed A Fertilizer
//!
//! Seeds pass through a chain of almanac maps. Part two reads the seeds as ranges, which are
//! mapped whole by splitting them at rule boundaries.

use std::ops::Range;

use anyhow::{Context, anyhow, bail, ensure};
use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::text::{numbers, paragraphs};

const EXAMPLE_INPUT: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 35),
    Example::new(2, EXAMPLE_INPUT, 46),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 5, tags = ["ranges"])]
pub struct Solver;

/// `source..source + len` maps onto `dest..dest + len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub dest: i64,
    pub source: i64,
    pub len: i64,
}

impl Rule {
    fn source_range(&self) -> Range<i64> {
        self.source..self.source + self.len
    }

    fn shift(&self) -> i64 {
        self.dest - self.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacMap {
    pub rules: Vec<Rule>,
}

impl AlmanacMap {
    fn apply(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find(|rule| rule.source_range().contains(&value))
            .map_or(value, |rule| value + rule.shift())
    }

    /// Map every value of `ranges`. Parts of a range no rule covers keep their values.
    fn apply_ranges(&self, ranges: Vec<Range<i64>>) -> Vec<Range<i64>> {
        let mut mapped = Vec::new();
        let mut pending = ranges;
        for rule in &self.rules {
            let covered = rule.source_range();
            let mut rest = Vec::new();
            for range in pending {
                let start = range.start.max(covered.start);
                let end = range.end.min(covered.end);
                if start >= end {
                    rest.push(range);
                    continue;
                }
                mapped.push(start + rule.shift()..end + rule.shift());
                if range.start < start {
                    rest.push(range.start..start);
                }
                if end < range.end {
                    rest.push(end..range.end);
                }
            }
            pending = rest;
        }
        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub maps: Vec<AlmanacMap>,
}

impl Almanac {
    fn location(&self, seed: i64) -> i64 {
        self.maps.iter().fold(seed, |value, map| map.apply(value))
    }
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = paragraphs(input).into_iter();
    let seeds_block = blocks.next().ok_or_else(|| anyhow!("empty almanac"))?;
    let seeds = seeds_block
        .first()
        .and_then(|line| line.strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("expected `seeds:` first"))?;
    let seeds = numbers(seeds).context("invalid seed")?;

    let maps = blocks
        .map(|block| -> anyhow::Result<AlmanacMap> {
            let (header, lines) = block
                .split_first()
                .ok_or_else(|| anyhow!("empty map block"))?;
            ensure!(header.ends_with("map:"), "expected a map header, got {header:?}");
            let rules = lines
                .iter()
                .map(|line| -> anyhow::Result<Rule> {
                    match numbers::<i64>(line)?.as_slice() {
                        &[dest, source, len] => Ok(Rule { dest, source, len }),
                        _ => bail!("expected three numbers in {line:?}"),
                    }
                })
                .collect::<anyhow::Result<_>>()
                .with_context(|| format!("in {header:?}"))?;
            Ok(AlmanacMap { rules })
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Almanac { seeds, maps })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| shared.location(seed))
            .min()
            .ok_or_else(|| SolveError::SolveFailed("no seeds".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::SolveFailed(
                "seed ranges need an even number of values".into(),
            ));
        }
        let seeds = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .collect();
        shared
            .maps
            .iter()
            .fold(seeds, |ranges, map| map.apply_ranges(ranges))
            .into_iter()
            .filter(|range| !range.is_empty())
            .map(|range| range.start)
            .min()
            .ok_or_else(|| SolveError::SolveFailed("no seeds".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{SelfTestOutcome, run_self_test};

    fn seed_to_soil() -> AlmanacMap {
        AlmanacMap {
            rules: vec![
                Rule {
                    dest: 50,
                    source: 98,
                    len: 2,
                },
                Rule {
                    dest: 52,
                    source: 50,
                    len: 48,
                },
            ],
        }
    }

    #[test]
    fn test_apply() {
        let map = seed_to_soil();
        assert_eq!(map.apply(79), 81);
        assert_eq!(map.apply(14), 14);
        assert_eq!(map.apply(99), 51);
        assert_eq!(map.apply(100), 100);
    }

    #[test]
    fn test_apply_ranges_splits_at_rule_edges() {
        let mut mapped = seed_to_soil().apply_ranges(vec![45..55, 97..101]);
        mapped.sort_by_key(|r| r.start);
        assert_eq!(mapped, vec![45..50, 50..52, 52..57, 99..100, 100..101]);
    }

    #[test]
    fn test_parse() {
        let almanac = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(almanac.seeds, vec![79, 14, 55, 13]);
        assert_eq!(almanac.maps.len(), 7);
        assert_eq!(almanac.location(13), 35);
    }

    #[test]
    fn test_bad_rule_is_parse_error() {
        let err = Solver::parse("seeds: 1\n\nx-to-y map:\n1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("three numbers")));
    }

    #[test]
    fn test_examples_pass() {
        assert!(matches!(
            run_self_test::<Solver>(),
            Ok(SelfTestOutcome::Passed(checks)) if checks.len() == 2
        ));
    }
}
