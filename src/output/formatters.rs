//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, Word};
use crate::scorer::KeyboardState;
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &Word, result: &GuessResult) -> String {
    guess
        .text()
        .chars()
        .zip(result)
        .map(|(letter, &status)| letter_tile(letter, Some(status)).to_string())
        .collect()
}

/// Render the keyboard as QWERTY rows, each key colored by its best status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| letter_tile(key, keyboard.status(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
