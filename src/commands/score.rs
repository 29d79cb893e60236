//! Score command
//!
//! Scores a single guess against a target word.

use crate::core::{GuessResult, Word};
use crate::scorer::score;

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreReport {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Score `guess` against `target`
///
/// Both words are normalized and checked for shape first, since the scorer
/// itself requires equal-length, pre-validated input. Neither needs to be in
/// a dictionary.
///
/// # Errors
///
/// Returns an error if either word is not `word_length` letters.
pub fn score_words(guess: &str, target: &str, word_length: usize) -> Result<ScoreReport, String> {
    let guess = Word::with_length(guess, word_length).map_err(|e| format!("Invalid guess: {e}"))?;
    let target =
        Word::with_length(target, word_length).map_err(|e| format!("Invalid target: {e}"))?;

    let result = score(guess.text(), target.text());

    Ok(ScoreReport {
        guess,
        target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn scores_normalized_words() {
        let report = score_words("ABXYZ", " about", 5).unwrap();

        assert_eq!(report.guess.text(), "abxyz");
        assert_eq!(report.target.text(), "about");
        assert_eq!(
            report.result.statuses(),
            &[Correct, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn scores_other_lengths() {
        let report = score_words("stop", "pots", 4).unwrap();
        assert_eq!(report.result.statuses(), &[Present, Present, Present, Present]);
    }

    #[test]
    fn rejects_malformed_words() {
        assert!(score_words("abc", "about", 5).unwrap_err().starts_with("Invalid guess"));
        assert!(score_words("about", "ab0ut", 5).unwrap_err().starts_with("Invalid target"));
    }
}
