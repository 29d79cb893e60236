//! Display functions for command results

use super::formatters::{create_progress_bar, guess_tiles, keyboard_rows};
use crate::commands::{CheckResult, LetterReport, QueryResult, ReplayResult, ScoreReport};
use crate::game::{GameOutcome, Statistics};
use colored::Colorize;

const WORDS_PER_LINE: usize = 10;

/// Print a single scored guess
pub fn print_score_report(report: &ScoreReport) {
    println!(
        "\n{} vs {}",
        report.guess.text().to_uppercase().bright_yellow().bold(),
        report.target.text().to_uppercase().bright_cyan().bold()
    );
    println!("{}", guess_tiles(&report.guess, &report.result));
    println!("{}  {}", report.result.to_emoji(), report.result);
}

/// Print the words found by a dictionary query
pub fn print_query_result(result: &QueryResult, limit: usize) {
    println!(
        "\n{} ({} of {} words)",
        result.description.bright_cyan().bold(),
        result.words.len(),
        result.total_words
    );

    if result.words.is_empty() {
        println!("   {}", "No matching words".bright_black());
        return;
    }

    let shown = &result.words[..result.words.len().min(limit)];
    for line in shown.chunks(WORDS_PER_LINE) {
        println!("   {}", line.join(" "));
    }

    if shown.len() < result.words.len() {
        println!(
            "   {}",
            format!("... and {} more", result.words.len() - shown.len()).bright_black()
        );
    }
}

/// Print the letter frequency ranking
pub fn print_letter_report(report: &LetterReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "LETTER FREQUENCY".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!(
        "\n   {} letters across {} words\n",
        report.total_letters, report.total_words
    );

    let top = report.letters.first().map_or(0, |&(_, count)| count);
    for (rank, &(letter, count)) in report.letters.iter().enumerate() {
        let bar = create_progress_bar(count as f64, top as f64, 30);
        println!(
            "   {:2}. {} {} {count:6}",
            rank + 1,
            letter.to_ascii_uppercase().to_string().bright_yellow().bold(),
            bar.green()
        );
    }
}

/// Print whether a word is an acceptable guess
pub fn print_check_result(result: &CheckResult) {
    match &result.verdict {
        Ok(word) => println!(
            "{} {}",
            "✅".green(),
            format!("'{word}' is a valid guess.").green().bold()
        ),
        Err(e) => println!("{} {}", "❌".red(), e.to_string().red()),
    }
}

/// Print a replayed game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, outcome)) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            guess_tiles(guess, outcome),
            outcome.to_emoji()
        );
    }

    println!("\n{}", "Keyboard:".bright_cyan().bold());
    for row in keyboard_rows(&result.keyboard) {
        println!("   {row}");
    }

    println!();
    match result.outcome {
        Some(GameOutcome::Won { attempts }) => println!(
            "{}",
            format!("✅ Solved in {attempts}/{} guesses!", result.max_attempts)
                .green()
                .bold()
        ),
        Some(GameOutcome::Lost) => println!(
            "{}",
            format!(
                "❌ Out of guesses. The word was {}",
                result.target.text().to_uppercase()
            )
            .red()
            .bold()
        ),
        None => {
            println!("{}", "Game in progress".bright_black());
            if let Some(hint) = &result.next_hint {
                println!("💡 {hint}");
            }
        }
    }
}

/// Print play statistics with the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Win rate:        {:.1}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let top = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(top), 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}
