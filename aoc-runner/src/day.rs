//! Puzzle day identifier

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of puzzle days in one event
pub const DAYS_PER_EVENT: u8 = 25;

/// A validated puzzle day in `1..=25`
///
/// Parses from `"3"` or `"03"` and always displays zero-padded to two digits, which is also the
/// form used in input file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

/// Error returned when a day identifier is not a number in `1..=25`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DayError {
    #[error("day must be between 1 and {DAYS_PER_EVENT}, got {0}")]
    OutOfRange(u8),
    #[error("invalid day identifier {0:?}")]
    Invalid(String),
}

impl Day {
    /// Create a day, returning `None` outside `1..=25`
    pub const fn new(day: u8) -> Option<Self> {
        if day >= 1 && day <= DAYS_PER_EVENT {
            Some(Self(day))
        } else {
            None
        }
    }

    /// The day number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index, for flat per-day storage
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate all days of the event in order
    pub fn all() -> impl Iterator<Item = Day> {
        (1..=DAYS_PER_EVENT).map(Self)
    }
}

impl TryFrom<u8> for Day {
    type Error = DayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DayError::OutOfRange(value))
    }
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| DayError::Invalid(trimmed.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded_and_unpadded() {
        assert_eq!("3".parse::<Day>().unwrap().get(), 3);
        assert_eq!("03".parse::<Day>().unwrap().get(), 3);
        assert_eq!(" 25 ".parse::<Day>().unwrap().get(), 25);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!("0".parse::<Day>(), Err(DayError::OutOfRange(0)));
        assert_eq!("26".parse::<Day>(), Err(DayError::OutOfRange(26)));
        assert!(matches!("x1".parse::<Day>(), Err(DayError::Invalid(_))));
        assert!(matches!("-1".parse::<Day>(), Err(DayError::Invalid(_))));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(Day::new(1).unwrap().to_string(), "01");
        assert_eq!(Day::new(17).unwrap().to_string(), "17");
    }

    #[test]
    fn test_all_days() {
        let days: Vec<u8> = Day::all().map(Day::get).collect();
        assert_eq!(days.len(), 25);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&25));
    }
}
