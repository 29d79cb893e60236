//! Game replay command
//!
//! Plays a list of guesses against a known target and reports each turn,
//! the resulting keyboard, and how the game ended.

use crate::core::{GuessResult, Word};
use crate::dictionary::{Dictionary, validate_guess};
use crate::game::{GameOutcome, Hint, MAX_ATTEMPTS, hint};
use crate::scorer::{KeyboardState, score};

/// Configuration for replaying a game
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub target: String,
    pub guesses: Vec<String>,
    pub max_attempts: usize,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(target: String, guesses: Vec<String>) -> Self {
        Self {
            target,
            guesses,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Result of replaying a game
#[derive(Debug)]
pub struct ReplayResult {
    pub target: Word,
    /// Each played guess with its result, oldest first
    pub turns: Vec<(Word, GuessResult)>,
    pub keyboard: KeyboardState,
    pub max_attempts: usize,
    /// `None` while the game is still in progress
    pub outcome: Option<GameOutcome>,
    /// Hint for the next guess of an unfinished game
    pub next_hint: Option<Hint>,
}

/// Replay `config.guesses` against `config.target`
///
/// Play stops at the first solving guess or once `max_attempts` guesses are
/// used; any guesses after that are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - `max_attempts` is outside `1..=MAX_ATTEMPTS`
/// - The target is not a well-formed word of the dictionary's length
/// - Any played guess fails validation against the dictionary
pub fn replay_game(config: ReplayConfig, dictionary: &Dictionary) -> Result<ReplayResult, String> {
    if !(1..=MAX_ATTEMPTS).contains(&config.max_attempts) {
        return Err(format!(
            "Max attempts must be between 1 and {MAX_ATTEMPTS}, got {}",
            config.max_attempts
        ));
    }

    let target = Word::with_length(&config.target, dictionary.word_length())
        .map_err(|e| format!("Invalid target word: {e}"))?;

    let mut turns: Vec<(Word, GuessResult)> = Vec::new();
    let mut keyboard = KeyboardState::new();
    let mut outcome = None;

    for (index, raw) in config.guesses.iter().enumerate() {
        if outcome.is_some() {
            log::warn!(
                "Ignoring {} guesses after the game ended",
                config.guesses.len() - index
            );
            break;
        }

        let guess =
            validate_guess(raw, dictionary).map_err(|e| format!("Guess {}: {e}", index + 1))?;
        let result = score(guess.text(), target.text());
        keyboard.merge(guess.text(), &result);

        let solved = result.is_solved();
        log::debug!("Guess {}: {} -> {result}", index + 1, guess);
        turns.push((guess, result));

        if solved {
            outcome = Some(GameOutcome::Won {
                attempts: turns.len(),
            });
        } else if turns.len() >= config.max_attempts {
            outcome = Some(GameOutcome::Lost);
        }
    }

    let next_hint = outcome
        .is_none()
        .then(|| hint(&target, dictionary, &turns));

    Ok(ReplayResult {
        target,
        turns,
        keyboard,
        max_attempts: config.max_attempts,
        outcome,
        next_hint,
    })
}
