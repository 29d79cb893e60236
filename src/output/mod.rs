//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_letter_report, print_query_result, print_replay_result,
    print_score_report, print_statistics,
};
