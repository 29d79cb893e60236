//! Core domain types for Wordle
//!
//! Words, per-letter feedback and scored guesses. These are plain values with
//! no behavior beyond validation and formatting; scoring lives in
//! [`crate::scorer`] and word-set queries in [`crate::dictionary`].

mod guess_result;
mod status;
mod word;

pub use guess_result::{GuessResult, ParseResultError};
pub use status::LetterStatus;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError, normalize};
