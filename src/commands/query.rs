//! Dictionary query commands
//!
//! Prefix, containment and pattern lookups, letter rankings, guess checks
//! and random picks over the session dictionary.

use crate::core::Word;
use crate::dictionary::{Dictionary, GuessError, validate_guess};

/// A word lookup against the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Prefix(String),
    Contains(char),
    Pattern(String),
}

impl Query {
    /// Human-readable description for result headings
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Prefix(prefix) => format!("Words starting with '{prefix}'"),
            Self::Contains(letter) => format!("Words containing '{letter}'"),
            Self::Pattern(pattern) => format!("Words matching '{pattern}'"),
        }
    }
}

/// Result of a word lookup
#[derive(Debug)]
pub struct QueryResult {
    pub description: String,
    pub words: Vec<String>,
    pub total_words: usize,
}

/// Run a word lookup
#[must_use]
pub fn run_query(dictionary: &Dictionary, query: &Query) -> QueryResult {
    let matches = match query {
        Query::Prefix(prefix) => dictionary.words_with_prefix(prefix),
        Query::Contains(letter) => dictionary.words_containing(*letter),
        Query::Pattern(pattern) => dictionary.words_matching_pattern(pattern),
    };

    QueryResult {
        description: query.describe(),
        words: matches.into_iter().map(|w| w.text().to_string()).collect(),
        total_words: dictionary.count(),
    }
}

/// Most common letters in the dictionary
#[derive(Debug)]
pub struct LetterReport {
    pub letters: Vec<(char, usize)>,
    pub total_letters: usize,
    pub total_words: usize,
}

/// Rank the `count` most common letters
#[must_use]
pub fn letter_report(dictionary: &Dictionary, count: usize) -> LetterReport {
    LetterReport {
        letters: dictionary.most_common_letters(count),
        total_letters: dictionary.letter_frequency().total(),
        total_words: dictionary.count(),
    }
}

/// Outcome of checking whether a word is an acceptable guess
#[derive(Debug)]
pub struct CheckResult {
    pub input: String,
    pub verdict: Result<Word, GuessError>,
}

/// Check a candidate guess against the dictionary
#[must_use]
pub fn check_word(input: &str, dictionary: &Dictionary) -> CheckResult {
    CheckResult {
        input: input.to_string(),
        verdict: validate_guess(input, dictionary),
    }
}

/// Pick a random dictionary word
///
/// # Errors
///
/// Returns an error if the dictionary is empty.
pub fn pick_random_word(dictionary: &Dictionary) -> Result<Word, String> {
    dictionary
        .random_word()
        .cloned()
        .ok_or_else(|| "No valid words available".to_string())
}
