//! Scored feedback for one guess
//!
//! A `GuessResult` holds one `LetterStatus` per guessed letter, positionally
//! aligned with the guess that produced it. It is produced by
//! [`crate::scorer::score`] and is immutable afterwards.

use super::LetterStatus;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Per-position feedback for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterStatus>);

/// Error returned when parsing feedback symbols fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResultError {
    symbol: char,
    position: usize,
}

impl fmt::Display for ParseResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid feedback symbol {:?} at position {}",
            self.symbol, self.position
        )
    }
}

impl std::error::Error for ParseResultError {}

impl GuessResult {
    /// Wrap a sequence of statuses
    #[must_use]
    pub fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LetterStatus> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct (the guess was the target)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions carrying `status`
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::GuessResult;
    ///
    /// let result: GuessResult = "GY-GY".parse().unwrap();
    /// assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl FromStr for GuessResult {
    type Err = ParseResultError;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                LetterStatus::from_symbol(symbol).ok_or(ParseResultError { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

impl Index<usize> for GuessResult {
    type Output = LetterStatus;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a LetterStatus;
    type IntoIter = std::slice::Iter<'a, LetterStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<LetterStatus>> for GuessResult {
    fn from(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }
}
