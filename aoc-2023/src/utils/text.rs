//! Splitting puzzle input text

use itertools::Itertools;

/// Groups of consecutive non-blank lines. Any run of blank lines separates two groups.
pub fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    input
        .lines()
        .chunk_by(|line| line.trim().is_empty())
        .into_iter()
        .filter(|(blank, _)| !blank)
        .map(|(_, lines)| lines.collect())
        .collect()
}

/// Every whitespace-separated token parsed as a number
pub fn numbers<T: std::str::FromStr>(s: &str) -> Result<Vec<T>, T::Err> {
    s.split_whitespace().map(str::parse).collect()
}
