//! Tiered hints for the current game
//!
//! Early on the hint reveals the target's first letter; after a guess or two
//! it points at the dictionary's most common letters; later it lists words
//! that fit the green positions of the latest guess.

use crate::core::{GuessResult, LetterStatus, Word};
use crate::dictionary::{Dictionary, WILDCARD};
use std::fmt;

/// Guesses after which hints switch from common letters to matching words
const PATTERN_HINT_AFTER: usize = 3;
const COMMON_LETTER_COUNT: usize = 5;
const MATCHING_WORD_COUNT: usize = 3;

/// A hint for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    FirstLetter(char),
    CommonLetters(Vec<char>),
    MatchingWords(Vec<Word>),
    KeepTrying,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLetter(letter) => {
                write!(f, "The word starts with '{}'.", letter.to_ascii_uppercase())
            }
            Self::CommonLetters(letters) => {
                let letters: Vec<String> = letters
                    .iter()
                    .map(|c| c.to_ascii_uppercase().to_string())
                    .collect();
                write!(f, "Common letters in the word list: {}", letters.join(", "))
            }
            Self::MatchingWords(words) => {
                let words: Vec<&str> = words.iter().map(Word::text).collect();
                write!(f, "Words matching current pattern: {}", words.join(", "))
            }
            Self::KeepTrying => {
                write!(f, "Keep trying! Use the colored feedback to guide your next guess.")
            }
        }
    }
}

/// Pick a hint for `target` given the guesses made so far
///
/// `history` holds each guess with its scored result, oldest first.
#[must_use]
pub fn hint(target: &Word, dictionary: &Dictionary, history: &[(Word, GuessResult)]) -> Hint {
    let Some((last_guess, last_result)) = history.last() else {
        return Hint::FirstLetter(target.char_at(0));
    };

    if history.len() < PATTERN_HINT_AFTER {
        let letters = dictionary
            .most_common_letters(COMMON_LETTER_COUNT)
            .into_iter()
            .map(|(letter, _)| letter)
            .collect();
        return Hint::CommonLetters(letters);
    }

    if !last_result.iter().any(|&s| s == LetterStatus::Correct) {
        return Hint::KeepTrying;
    }

    let pattern: String = last_guess
        .text()
        .chars()
        .zip(last_result)
        .map(|(letter, &status)| {
            if status == LetterStatus::Correct {
                letter
            } else {
                WILDCARD
            }
        })
        .collect();

    let matches: Vec<Word> = dictionary
        .words_matching_pattern(&pattern)
        .into_iter()
        .take(MATCHING_WORD_COUNT)
        .cloned()
        .collect();

    if matches.is_empty() {
        Hint::KeepTrying
    } else {
        Hint::MatchingWords(matches)
    }
}
