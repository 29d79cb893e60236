//! Command implementations

pub mod query;
pub mod replay;
pub mod score;

pub use query::{
    CheckResult, LetterReport, Query, QueryResult, check_word, letter_report, pick_random_word,
    run_query,
};
pub use replay::{ReplayConfig, ReplayResult, replay_game};
pub use score::{ScoreReport, score_words};
