//! Letter frequency table

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Occurrences of each letter across a word list
///
/// A letter appearing twice in one word counts twice. Letters that never
/// occur have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: FxHashMap<char, usize>,
}

impl LetterFrequency {
    /// Tally every letter of every word
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut counts = FxHashMap::default();
        for word in words {
            for (letter, n) in word.char_counts() {
                *counts.entry(letter).or_insert(0) += n;
            }
        }
        Self { counts }
    }

    /// Occurrences of `letter` (case-insensitive), zero if absent
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct letters that occur
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total letters tallied
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// All `(letter, count)` entries in alphabetical order
    #[must_use]
    pub fn entries(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }

    /// The `k` most frequent letters
    ///
    /// Sorted by count descending; equal counts are ordered alphabetically so
    /// the ranking is deterministic. Returns fewer than `k` entries only when
    /// fewer than `k` distinct letters occur.
    #[must_use]
    pub fn most_common(&self, k: usize) -> Vec<(char, usize)> {
        let mut ranked = self.entries();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}
