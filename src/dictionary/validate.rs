//! Guess validation against a dictionary

use super::Dictionary;
use crate::core::{Word, WordError};
use std::fmt;

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Nothing but whitespace was entered
    Empty,
    /// Wrong length or non-letter characters
    Malformed(WordError),
    /// Well-formed, but not a dictionary word
    NotInWordList(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a word."),
            Self::Malformed(WordError::InvalidLength { expected, .. }) => {
                write!(f, "Word must be exactly {expected} letters long.")
            }
            Self::Malformed(_) => write!(f, "Word must contain only letters."),
            Self::NotInWordList(word) => write!(f, "'{word}' not found in the word list."),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Malformed(e)
    }
}

/// Validate a raw guess and return its canonical word
///
/// Checks run in order: empty input, shape (length and letters), then
/// dictionary membership. The returned word is the dictionary's own copy.
///
/// # Errors
/// Returns the first `GuessError` that applies.
///
/// # Examples
/// ```
/// use wordle_game::dictionary::{Dictionary, GuessError, validate_guess};
///
/// let dictionary = Dictionary::new(["about", "above"]);
/// assert_eq!(validate_guess(" ABOUT", &dictionary).unwrap().text(), "about");
/// assert_eq!(validate_guess("", &dictionary), Err(GuessError::Empty));
/// ```
pub fn validate_guess(raw: &str, dictionary: &Dictionary) -> Result<Word, GuessError> {
    if raw.trim().is_empty() {
        return Err(GuessError::Empty);
    }

    let word = Word::with_length(raw, dictionary.word_length())?;

    dictionary
        .lookup_normalized(word.text())
        .cloned()
        .ok_or_else(|| GuessError::NotInWordList(word.text().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(["about", "above", "abuse", "actor", "acute"])
    }

    #[test]
    fn valid_guess_is_accepted() {
        let word = validate_guess("about", &dictionary()).unwrap();
        assert_eq!(word.text(), "about");

        assert!(validate_guess("  Actor ", &dictionary()).is_ok());
    }

    #[test]
    fn empty_guess() {
        let dictionary = dictionary();

        assert_eq!(validate_guess("", &dictionary), Err(GuessError::Empty));
        assert_eq!(validate_guess("   ", &dictionary), Err(GuessError::Empty));
        assert_eq!(
            validate_guess("", &dictionary).unwrap_err().to_string(),
            "Please enter a word."
        );
    }

    #[test]
    fn wrong_length() {
        let dictionary = dictionary();

        for guess in ["abc", "abcdef"] {
            let err = validate_guess(guess, &dictionary).unwrap_err();
            assert!(matches!(
                err,
                GuessError::Malformed(WordError::InvalidLength { expected: 5, .. })
            ));
            assert!(err.to_string().contains("exactly 5 letters"));
        }
    }

    #[test]
    fn non_alphabetic() {
        let err = validate_guess("ab0ut", &dictionary()).unwrap_err();

        assert_eq!(err, GuessError::Malformed(WordError::InvalidCharacters));
        assert!(err.to_string().contains("only letters"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn not_in_word_list() {
        let err = validate_guess("NOTIN", &dictionary()).unwrap_err();

        assert_eq!(err, GuessError::NotInWordList("notin".to_string()));
        assert!(err.to_string().contains("not found"));
    }
}
