//! Hint queries over the word list
//!
//! Prefix, containment and pattern queries are independent linear scans.
//! All results keep dictionary order.

use super::Dictionary;
use crate::core::{Word, normalize};

/// Pattern character that matches any letter
pub const WILDCARD: char = '?';

impl Dictionary {
    /// Words starting with `prefix` (case-insensitive)
    ///
    /// An empty prefix matches every word; a prefix longer than the word
    /// length matches none.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&Word> {
        let prefix = normalize(prefix);
        self.words
            .iter()
            .filter(|word| word.text().starts_with(prefix.as_str()))
            .collect()
    }

    /// Words containing `letter` at any position (case-insensitive)
    #[must_use]
    pub fn words_containing(&self, letter: char) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| word.has_letter(letter))
            .collect()
    }

    /// Words matching a positional pattern such as `"a??le"`
    ///
    /// Each pattern character is either a letter, which must appear at that
    /// position, or [`WILDCARD`], which matches any letter. A pattern whose
    /// length differs from the dictionary's word length matches nothing.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["alike", "alive", "angle", "apple"]);
    /// let words: Vec<&str> = dictionary
    ///     .words_matching_pattern("a??le")
    ///     .into_iter()
    ///     .map(|w| w.text())
    ///     .collect();
    /// assert_eq!(words, ["angle", "apple"]);
    /// ```
    #[must_use]
    pub fn words_matching_pattern(&self, pattern: &str) -> Vec<&Word> {
        let pattern: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();
        if pattern.len() != self.word_length {
            log::debug!(
                "Pattern length {} does not match word length {}",
                pattern.len(),
                self.word_length
            );
            return Vec::new();
        }

        self.words
            .iter()
            .filter(|word| {
                word.text()
                    .chars()
                    .zip(&pattern)
                    .all(|(letter, &p)| p == WILDCARD || p == letter)
            })
            .collect()
    }
}
