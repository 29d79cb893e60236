//! Wordle Game
//!
//! Guess scoring and word-list queries for Wordle-style games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::scorer::{KeyboardState, score};
//!
//! let dictionary = Dictionary::new(["crane", "slate", "about"]);
//! assert!(dictionary.is_valid("CRANE"));
//!
//! let result = score("crane", "slate");
//! println!("{} {}", result, result.to_emoji());
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.merge("crane", &result);
//! ```

// Core domain types
pub mod core;

// Guess scoring and keyboard state
pub mod scorer;

// Validated word lists and queries
pub mod dictionary;

// Hints and play statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
