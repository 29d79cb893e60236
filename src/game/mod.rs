//! Values a game loop keeps between guesses
//!
//! The loop itself (prompting, rendering, deciding when a game ends) belongs
//! to the caller. This module supplies the pieces it threads through:
//! play statistics and hints.

mod hint;
mod stats;

pub use hint::{Hint, hint};
pub use stats::{GameOutcome, MAX_ATTEMPTS, Statistics};
