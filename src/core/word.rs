//! Wordle word representation
//!
//! A Word stores a fixed-length, lowercase, purely alphabetic word.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;

/// Word length used when none is given explicitly
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Canonical form of raw input: surrounding whitespace trimmed, lowercased
///
/// Dictionary construction, membership tests and guess validation all go
/// through this function so they agree on what a word "is".
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A validated word of a fixed length
///
/// Two words are equal when their canonical text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(
                    f,
                    "Word must be exactly {expected} letters long, got {actual}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new five-letter Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new(" Crane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a new Word that must be exactly `length` letters long
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The normalized text is empty or its length is not `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    pub fn with_length(text: &str, length: usize) -> Result<Self, WordError> {
        let text = normalize(text);

        // Length is counted in characters so multi-byte input reports sensibly
        let actual = text.chars().count();
        if actual == 0 || actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (always ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.chars()[position])
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.text.contains(letter)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for ch in self.text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

// Lets sets keyed by Word be probed with a plain &str.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}
