//! Wordle Game - CLI
//!
//! Scores guesses, checks words and queries the word list from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{
        Query, ReplayConfig, check_word, letter_report, pick_random_word, replay_game, run_query,
        score_words,
    },
    core::DEFAULT_WORD_LENGTH,
    dictionary::Dictionary,
    game::Statistics,
    output::{
        print_check_result, print_letter_report, print_query_result, print_replay_result,
        print_score_report, print_statistics,
    },
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle guess scoring and word-list queries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Cached word list, one word per line (embedded list when missing or too small)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden target word
        target: String,
    },

    /// Check whether a word is an acceptable guess
    Check {
        /// Word to check
        word: String,
    },

    /// List words starting with a prefix
    Prefix {
        prefix: String,

        /// Maximum number of words to print
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },

    /// List words containing a letter
    Contains {
        letter: char,

        /// Maximum number of words to print
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },

    /// List words matching a pattern, '?' matches any letter
    Pattern {
        pattern: String,

        /// Maximum number of words to print
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },

    /// Show the most common letters in the word list
    Letters {
        /// Number of letters to show
        #[arg(short = 'k', long, default_value = "10")]
        count: usize,
    },

    /// Pick a random word from the word list
    Random,

    /// Replay a game from a target and a list of guesses
    Replay {
        /// The hidden target word
        target: String,

        /// Guesses in the order they were played
        guesses: Vec<String>,

        /// Attempts allowed, 1 to 6
        #[arg(short = 'm', long)]
        max_attempts: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let dictionary =
        load_dictionary(cli.wordlist.as_deref(), cli.length).map_err(|e| anyhow::anyhow!(e))?;
    log::info!(
        "Dictionary ready: {} words of length {} ({} dropped)",
        dictionary.count(),
        dictionary.word_length(),
        dictionary.dropped()
    );

    match cli.command {
        Commands::Score { guess, target } => {
            let report =
                score_words(&guess, &target, cli.length).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
        }
        Commands::Check { word } => print_check_result(&check_word(&word, &dictionary)),
        Commands::Prefix { prefix, limit } => {
            print_query_result(&run_query(&dictionary, &Query::Prefix(prefix)), limit);
        }
        Commands::Contains { letter, limit } => {
            print_query_result(&run_query(&dictionary, &Query::Contains(letter)), limit);
        }
        Commands::Pattern { pattern, limit } => {
            print_query_result(&run_query(&dictionary, &Query::Pattern(pattern)), limit);
        }
        Commands::Letters { count } => print_letter_report(&letter_report(&dictionary, count)),
        Commands::Random => {
            let word = pick_random_word(&dictionary).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", word.text().to_uppercase());
        }
        Commands::Replay {
            target,
            guesses,
            max_attempts,
        } => run_replay_command(target, guesses, max_attempts, &dictionary)?,
    }

    Ok(())
}

fn run_replay_command(
    target: String,
    guesses: Vec<String>,
    max_attempts: Option<usize>,
    dictionary: &Dictionary,
) -> Result<()> {
    let mut config = ReplayConfig::new(target, guesses);
    if let Some(max_attempts) = max_attempts {
        config.max_attempts = max_attempts;
    }

    let result = replay_game(config, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_replay_result(&result);

    if let Some(outcome) = result.outcome {
        let mut stats = Statistics::new();
        stats.record(outcome);
        print_statistics(&stats);
    }

    Ok(())
}
