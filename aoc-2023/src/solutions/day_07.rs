//! Day 7: Camel Cards

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use aoc_runner::{Answer, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE_INPUT: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, 6440),
    Example::new(2, EXAMPLE_INPUT, 5905),
];

const CARD_ORDER: &str = "23456789TJQKA";
const JACK: u8 = 11;
/// A joker ranks below every other card
const JOKER: u8 = 1;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(day = 7, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn of(cards: &[u8; 5]) -> Self {
        let jokers = cards.iter().filter(|&&c| c == JOKER).count();
        let mut counts: Vec<usize> = cards
            .iter()
            .filter(|&&c| c != JOKER)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        // jokers always join the largest group
        match counts.first_mut() {
            Some(largest) => *largest += jokers,
            None => counts.push(jokers),
        }
        match counts.as_slice() {
            [5] => Self::FiveOfAKind,
            [4, ..] => Self::FourOfAKind,
            [3, 2] => Self::FullHouse,
            [3, ..] => Self::ThreeOfAKind,
            [2, 2, ..] => Self::TwoPair,
            [2, ..] => Self::OnePair,
            _ => Self::HighCard,
        }
    }
}

/// Card values from 2 to 14
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; 5],
    pub bid: Answer,
}

impl Hand {
    /// The same hand with jacks read as jokers
    fn with_jokers(self) -> Hand {
        Hand {
            cards: self.cards.map(|c| if c == JACK { JOKER } else { c }),
            ..self
        }
    }

    fn strength(&self) -> (HandType, [u8; 5]) {
        (HandType::of(&self.cards), self.cards)
    }
}

impl FromStr for Hand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (cards, bid) = line
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected `<cards> <bid>`"))?;
        let values: Vec<u8> = cards
            .chars()
            .map(|c| -> anyhow::Result<u8> {
                match CARD_ORDER.find(c) {
                    Some(i) => Ok(i as u8 + 2),
                    None => bail!("unknown card {c:?}"),
                }
            })
            .collect::<anyhow::Result<_>>()?;
        let cards = values
            .try_into()
            .map_err(|v: Vec<u8>| anyhow!("expected 5 cards, got {}", v.len()))?;
        let bid = bid.parse::<Answer>().with_context(|| format!("invalid bid {bid:?}"))?;
        Ok(Hand { cards, bid })
    }
}

/// Sum of each bid times the rank of its hand, weakest first
fn winnings(hands: impl Iterator<Item = Hand>) -> Answer {
    hands
        .sorted_by_cached_key(Hand::strength)
        .zip(1..)
        .map(|(hand, rank)| hand.bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.parse::<Hand>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e:#}", i + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(winnings(shared.iter().copied()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(winnings(shared.iter().map(|hand| hand.with_jokers())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{SelfTestOutcome, run_self_test};

    fn hand_type(cards: &str, jokers: bool) -> HandType {
        let hand: Hand = format!("{cards} 1").parse().unwrap();
        let hand = if jokers { hand.with_jokers() } else { hand };
        HandType::of(&hand.cards)
    }

    #[test]
    fn test_hand_types() {
        assert_eq!(hand_type("32T3K", false), HandType::OnePair);
        assert_eq!(hand_type("KK677", false), HandType::TwoPair);
        assert_eq!(hand_type("T55J5", false), HandType::ThreeOfAKind);
        assert_eq!(hand_type("23332", false), HandType::FullHouse);
        assert_eq!(hand_type("AA8AA", false), HandType::FourOfAKind);
        assert_eq!(hand_type("23456", false), HandType::HighCard);
    }

    #[test]
    fn test_jokers_join_largest_group() {
        assert_eq!(hand_type("T55J5", true), HandType::FourOfAKind);
        assert_eq!(hand_type("KTJJT", true), HandType::FourOfAKind);
        assert_eq!(hand_type("2345J", true), HandType::OnePair);
        assert_eq!(hand_type("JJJJJ", true), HandType::FiveOfAKind);
    }

    #[test]
    fn test_joker_loses_ties() {
        let queen = "QQQQ2 1".parse::<Hand>().unwrap().with_jokers();
        let joker = "JKKK2 1".parse::<Hand>().unwrap().with_jokers();
        assert_eq!(HandType::of(&queen.cards), HandType::of(&joker.cards));
        assert!(joker.strength() < queen.strength());
    }

    #[test]
    fn test_bad_hands_are_parse_errors() {
        assert!(Solver::parse("32T3 765").is_err());
        assert!(Solver::parse("32T3X 765").is_err());
        assert!(Solver::parse("32T3K").is_err());
    }

    #[test]
    fn test_examples_pass() {
        assert!(matches!(
            run_self_test::<Solver>(),
            Ok(SelfTestOutcome::Passed(checks)) if checks.len() == 2
        ));
    }
}
