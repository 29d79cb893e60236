//! Guess scoring and keyboard tracking
//!
//! Both operations are pure: [`score`] maps a guess and a target to a
//! [`GuessResult`], and [`merge_into_keyboard`] folds a scored guess into the
//! session's [`KeyboardState`]. Neither retains state between calls.

mod keyboard;

pub use keyboard::{KeyboardState, merge_into_keyboard};

use crate::core::{GuessResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Score `guess` against `target`
///
/// This implements Wordle's feedback rules, including duplicate letters:
///
/// 1. First pass: every exact position match is `Correct` and removes one
///    occurrence of its letter from the target's pool.
/// 2. Second pass: every remaining position, left to right, is `Present` if
///    its letter still has an occurrence in the pool (which it then consumes),
///    otherwise `Absent`.
///
/// Inputs are expected to be validated and normalized by the caller; the
/// scorer compares characters as given and does not consult any word list.
///
/// # Panics
/// Panics if `guess` and `target` differ in length. Guesses reaching the
/// scorer are validated upstream, so a mismatch is a caller bug.
///
/// # Examples
/// ```
/// use wordle_game::core::LetterStatus::{Absent, Present};
/// use wordle_game::scorer::score;
///
/// // Each of SPEED's two E's is credited once; R and A are gray
/// let result = score("erase", "speed");
/// assert_eq!(result.statuses(), &[Present, Absent, Absent, Present, Present]);
/// ```
#[must_use]
pub fn score(guess: &str, target: &str) -> GuessResult {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();
    assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have the same length"
    );

    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in &target {
        *available.entry(letter).or_insert(0) += 1;
    }

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            result[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: displaced letters, claimed left to right
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    GuessResult::new(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn identical_words_are_all_correct() {
        assert_eq!(score("about", "about").statuses(), &[Correct; 5]);
        for word in ["crane", "speed", "aaaaa", "zzzzz"] {
            assert!(score(word, word).is_solved());
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(score("xyzzy", "about").statuses(), &[Absent; 5]);
        assert_eq!(score("abcde", "fghij").statuses(), &[Absent; 5]);
    }

    #[test]
    fn displaced_letters_elsewhere_in_target_are_present() {
        // "a" and "b" appear in "about", just not at positions 3 and 4
        assert_eq!(
            score("xyzab", "about").statuses(),
            &[Absent, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn partial_prefix_match() {
        assert_eq!(
            score("abxyz", "about").statuses(),
            &[Correct, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn full_anagram_is_all_present() {
        assert_eq!(score("bouta", "about").statuses(), &[Present; 5]);
    }

    #[test]
    fn repeated_guess_letter_credited_once_per_target_occurrence() {
        // SPEED has two E's; ERASE guesses E twice, both credited
        assert_eq!(
            score("erase", "speed").statuses(),
            &[Present, Absent, Absent, Present, Present]
        );
        // The reverse: ERASE has two E's, SPEED's two E's both yellow
        assert_eq!(
            score("speed", "erase").statuses(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn correct_match_consumes_before_displaced_pass() {
        // ROBOT vs FLOOR: second O is green, first O takes the remaining O
        assert_eq!(
            score("robot", "floor").statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
        // GEESE vs CREEP: one green E, the leftmost other E takes the second
        assert_eq!(
            score("geese", "creep").statuses(),
            &[Absent, Present, Correct, Absent, Absent]
        );
        // WORLD's only L goes to the green, leaving none for the other L's
        assert_eq!(
            score("lolly", "world").statuses(),
            &[Absent, Correct, Absent, Correct, Absent]
        );
    }

    #[test]
    fn surplus_guess_letters_leftmost_wins() {
        // One S left after the green; position 0 claims it before position 3
        assert_eq!(
            score("sassy", "essay").statuses(),
            &[Present, Present, Correct, Absent, Correct]
        );
        // HELLO has two L's, so both displaced L's are credited
        assert_eq!(
            score("llama", "hello").statuses(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn scoring_is_case_sensitive_on_raw_input() {
        // Normalization is the caller's job
        assert_eq!(score("ABOUT", "about").statuses(), &[Absent; 5]);
    }

    #[test]
    fn other_lengths_are_supported() {
        assert_eq!(score("ox", "xo").statuses(), &[Present, Present]);
        assert!(score("", "").is_empty());
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic() {
        let _ = score("abc", "abcd");
    }
}
