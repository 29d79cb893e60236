//! Dictionary of candidate words
//!
//! A [`Dictionary`] is built once per session from a raw word list. Invalid
//! and duplicate entries are dropped (the drop count is kept for
//! diagnostics), and the result is immutable: every query is a read over the
//! retained words, in first-seen order.

mod frequency;
mod query;
mod validate;

pub use frequency::LetterFrequency;
pub use query::WILDCARD;
pub use validate::{GuessError, validate_guess};

use crate::core::{DEFAULT_WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Validated, deduplicated word list with O(1) membership tests
#[derive(Debug)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
    dropped: usize,
    frequency: OnceLock<LetterFrequency>,
}

impl Dictionary {
    /// Build a five-letter dictionary from raw candidate strings
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["about", "ABOUT", " about ", "abc", "12345"]);
    /// assert_eq!(dictionary.count(), 1);
    /// assert_eq!(dictionary.dropped(), 4);
    /// assert!(dictionary.is_valid("About"));
    /// ```
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_word_length(raw, DEFAULT_WORD_LENGTH)
    }

    /// Build a dictionary of `word_length`-letter words from raw candidate strings
    ///
    /// Each entry is trimmed and lowercased, then kept only if it is exactly
    /// `word_length` letters and not already present. Construction never fails;
    /// an empty result is a valid (if useless) dictionary.
    pub fn with_word_length<I, S>(raw: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();
        let mut dropped = 0;

        for entry in raw {
            match Word::with_length(entry.as_ref(), word_length) {
                Ok(word) if !lookup.contains(&word) => {
                    lookup.insert(word.clone());
                    words.push(word);
                }
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            log::warn!("Removed {dropped} invalid or duplicate words from the list");
        }
        log::debug!(
            "Dictionary ready: {} words of length {word_length}",
            words.len()
        );

        Self {
            word_length,
            words,
            lookup,
            dropped,
            frequency: OnceLock::new(),
        }
    }

    /// Check whether `word` is a well-formed member of this dictionary
    ///
    /// The input is normalized first, so case and surrounding whitespace
    /// do not matter.
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.lookup_normalized(word).is_some()
    }

    /// Number of words retained
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word length every member has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of raw entries rejected during construction (invalid or duplicate)
    #[inline]
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` when the dictionary is empty; callers should treat that
    /// as a session setup failure.
    #[must_use]
    pub fn random_word(&self) -> Option<&Word> {
        self.random_word_with(&mut rand::rng())
    }

    /// Pick a word uniformly at random using the given generator
    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Sample up to `count` distinct words
    ///
    /// When `count` covers the whole dictionary, every word is returned in
    /// dictionary order.
    #[must_use]
    pub fn sample_words(&self, count: usize) -> Vec<&Word> {
        self.sample_words_with(&mut rand::rng(), count)
    }

    /// Sample up to `count` distinct words using the given generator
    pub fn sample_words_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&Word> {
        if count >= self.words.len() {
            return self.words.iter().collect();
        }
        self.words.choose_multiple(rng, count).collect()
    }

    /// Occurrences of each letter across all words
    ///
    /// Computed on first use and cached for the life of the dictionary.
    pub fn letter_frequency(&self) -> &LetterFrequency {
        self.frequency
            .get_or_init(|| LetterFrequency::from_words(&self.words))
    }

    /// The `k` most frequent letters, by descending count then ascending letter
    #[must_use]
    pub fn most_common_letters(&self, k: usize) -> Vec<(char, usize)> {
        self.letter_frequency().most_common(k)
    }

    /// Validate `raw` (which normalizes it) and look it up
    fn lookup_normalized(&self, raw: &str) -> Option<&Word> {
        let word = Word::with_length(raw, self.word_length).ok()?;
        self.lookup.get(word.text())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    pub(super) const TEST_WORDS: &[&str] = &[
        "about", "above", "abuse", "actor", "acute", "admit", "adopt", "adult", "after", "again",
        "agent", "agree", "ahead", "alarm", "album", "alert", "alike", "alive", "allow", "alone",
        "along", "alter", "among", "anger",
    ];

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn duplicates_and_invalid_entries_are_dropped() {
        let dictionary = Dictionary::new(["about", "ABOUT", " about ", "abc", "12345"]);

        assert_eq!(dictionary.count(), 1);
        assert_eq!(dictionary.dropped(), 4);
        assert_eq!(dictionary.words()[0].text(), "about");
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let dictionary = Dictionary::new(["Zebra", "apple", "zebra", "mango", "APPLE"]);

        let order: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(order, ["zebra", "apple", "mango"]);
        assert_eq!(dictionary.dropped(), 2);
    }

    #[test]
    fn mixed_list_keeps_only_valid_words() {
        let dictionary = Dictionary::new(["about", "abc", "above", "12345", "abuse", ""]);

        assert_eq!(dictionary.count(), 3);
        assert!(dictionary.is_valid("about"));
        assert!(!dictionary.is_valid("abc"));
        assert!(!dictionary.is_valid("12345"));
    }

    #[test]
    fn empty_dictionary_is_allowed() {
        let dictionary = Dictionary::new(Vec::<String>::new());

        assert!(dictionary.is_empty());
        assert_eq!(dictionary.count(), 0);
        assert_eq!(dictionary.random_word(), None);
        assert!(dictionary.sample_words(3).is_empty());
        assert!(dictionary.most_common_letters(5).is_empty());
    }

    #[test]
    fn is_valid_normalizes_input() {
        let dictionary = Dictionary::new(TEST_WORDS);

        assert!(dictionary.is_valid("about"));
        assert!(dictionary.is_valid("ALIVE"));
        assert!(dictionary.is_valid("  actor  "));
    }

    #[test]
    fn is_valid_rejects_malformed_and_unknown_words() {
        let dictionary = Dictionary::new(TEST_WORDS);

        assert!(!dictionary.is_valid(""));
        assert!(!dictionary.is_valid("abc"));
        assert!(!dictionary.is_valid("abcdef"));
        assert!(!dictionary.is_valid("ab0ut"));
        assert!(!dictionary.is_valid("ab out"));
        assert!(!dictionary.is_valid("notinlist"));
        assert!(!dictionary.is_valid("zebra"));
    }

    #[test]
    fn custom_word_length() {
        let dictionary = Dictionary::with_word_length(["planet", "crane", "Rocket"], 6);

        assert_eq!(dictionary.word_length(), 6);
        assert_eq!(dictionary.count(), 2);
        assert!(dictionary.is_valid("rocket"));
        assert!(!dictionary.is_valid("crane"));
    }

    #[test]
    fn random_word_comes_from_dictionary() {
        let dictionary = Dictionary::new(TEST_WORDS);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = dictionary.random_word_with(&mut rng).unwrap();
            assert!(dictionary.is_valid(word.text()));
        }
        assert!(dictionary.random_word().is_some());
    }

    #[test]
    fn random_word_is_reproducible_with_seed() {
        let dictionary = Dictionary::new(TEST_WORDS);

        let first = dictionary.random_word_with(&mut StdRng::seed_from_u64(42));
        let second = dictionary.random_word_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn random_word_reaches_every_member() {
        let dictionary = Dictionary::new(["about", "above", "abuse"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(dictionary.random_word_with(&mut rng).unwrap().text());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn sample_words_distinct_members() {
        let dictionary = Dictionary::new(TEST_WORDS);
        let mut rng = StdRng::seed_from_u64(3);

        let sample = dictionary.sample_words_with(&mut rng, 10);
        assert_eq!(sample.len(), 10);

        let unique: FxHashSet<&str> = sample.iter().map(|w| w.text()).collect();
        assert_eq!(unique.len(), 10);
        assert!(sample.iter().all(|w| dictionary.is_valid(w.text())));
    }

    #[test]
    fn sample_words_whole_list_in_order() {
        let dictionary = Dictionary::new(["about", "above", "abuse"]);

        assert_eq!(
            texts(&dictionary.sample_words(10)),
            ["about", "above", "abuse"]
        );
    }

    #[test]
    fn frequency_is_cached() {
        let dictionary = Dictionary::new(TEST_WORDS);

        let first: *const LetterFrequency = dictionary.letter_frequency();
        let second: *const LetterFrequency = dictionary.letter_frequency();
        assert_eq!(first, second);
    }

    #[test]
    fn dictionary_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary>();
    }
}
