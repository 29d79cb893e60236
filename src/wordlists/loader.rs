//! Word list loading utilities
//!
//! Reads cached word lists from disk, falling back to the embedded list when
//! the cache is missing or too small to be useful.

use super::FALLBACK;
use crate::dictionary::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// A cached list with fewer entries than this is treated as incomplete
pub const MIN_CACHED_WORDS: usize = 100;

/// Load raw entries from a file, one per line
///
/// Lines are trimmed and blank lines skipped. Entries are not validated here;
/// that happens when a `Dictionary` is built from them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(words)
}

/// Load the session word list
///
/// Uses the cached file at `path` when it can be read and holds at least
/// [`MIN_CACHED_WORDS`] entries; otherwise returns the embedded fallback list.
#[must_use]
pub fn load_words(path: Option<&Path>) -> Vec<String> {
    if let Some(path) = path {
        match load_from_file(path) {
            Ok(words) if words.len() >= MIN_CACHED_WORDS => {
                log::debug!("Loaded {} words from {}", words.len(), path.display());
                return words;
            }
            Ok(words) => log::warn!(
                "Cached list {} has only {} words, using fallback list",
                path.display(),
                words.len()
            ),
            Err(e) => log::warn!(
                "Could not read {}: {e}, using fallback list",
                path.display()
            ),
        }
    }

    FALLBACK.iter().map(|&s| s.to_string()).collect()
}

/// Build the session dictionary of `word_length`-letter words
///
/// # Errors
///
/// Returns an error if no entry of the loaded list has `word_length` letters.
/// An empty dictionary cannot supply targets, so the session cannot start.
pub fn load_dictionary(path: Option<&Path>, word_length: usize) -> Result<Dictionary, String> {
    let dictionary = Dictionary::with_word_length(load_words(path), word_length);
    if dictionary.is_empty() {
        return Err(format!(
            "No valid {word_length}-letter words in the word list ({} entries dropped)",
            dictionary.dropped()
        ));
    }
    Ok(dictionary)
}
