//! Best-known status per letter across a session

use crate::core::{GuessResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Keyboard hint state: the best status observed for each letter so far
///
/// Letters are stored in lowercase canonical form. A stored status is only
/// ever replaced by one that outranks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    /// Create an empty keyboard state (start of a session)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the state
    ///
    /// # Panics
    /// Panics if `guess` and `result` differ in length.
    pub fn merge(&mut self, guess: &str, result: &GuessResult) {
        assert_eq!(
            guess.chars().count(),
            result.len(),
            "guess and result must have the same length"
        );

        for (letter, &status) in guess.chars().zip(result) {
            let letter = letter.to_ascii_lowercase();
            self.letters
                .entry(letter)
                .and_modify(|best| {
                    if status.outranks(*best) {
                        *best = status;
                    }
                })
                .or_insert(status);
        }
    }

    /// Best status seen for `letter`, if it has been guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// All guessed letters with their best status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries.into_iter()
    }
}

/// Merge a scored guess into `keyboard` and hand the updated state back
///
/// This is the threaded form of [`KeyboardState::merge`]: the session owns the
/// state and passes it through after every guess.
///
/// # Panics
/// Panics if `guess` and `result` differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::LetterStatus;
/// use wordle_game::scorer::{KeyboardState, merge_into_keyboard, score};
///
/// let mut keyboard = KeyboardState::new();
/// for guess in ["bouta", "about"] {
///     let result = score(guess, "about");
///     keyboard = merge_into_keyboard(guess, &result, keyboard);
/// }
/// assert_eq!(keyboard.status('a'), Some(LetterStatus::Correct));
/// ```
#[must_use]
pub fn merge_into_keyboard(
    guess: &str,
    result: &GuessResult,
    mut keyboard: KeyboardState,
) -> KeyboardState {
    keyboard.merge(guess, result);
    keyboard
}
