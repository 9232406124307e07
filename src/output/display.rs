//! Display functions for command results

use super::formatters::{format_guess, format_row};
use crate::commands::ScoreResult;
use crate::core::{Feedback, Verdict};
use crate::game::{Resolution, Session};
use colored::Colorize;

/// Print the whole grid, highlighting the cursor while input is accepted
pub fn print_board(session: &Session) {
    let cursor = session.accepts_input().then(|| session.cursor());
    println!();
    for row in 0..session.rows() {
        println!("   {}", format_row(session.row(row), cursor));
    }
    println!();
}

/// Print what happened to a submitted row
pub fn print_resolution(resolution: &Resolution) {
    match resolution {
        Resolution::Won { row, .. } => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(50).bright_cyan());
            let guesses = row + 1;
            println!(
                "\n  Solution found in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        Resolution::Scored { guess, feedback, .. } => {
            println!("   {}  {}", format_guess(guess, feedback), feedback.to_emoji());
        }
        Resolution::Rejected { .. } => {
            println!("{}", "❌ Not a word! Try again.".red());
        }
    }
}

/// Print the result of offline scoring
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n   {}  {}\n",
        format_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );

    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!("{}", tally(&result.feedback));
    }
}

/// Verdict totals like "1 exact, 2 present, 2 absent"
#[must_use]
pub fn tally(feedback: &Feedback) -> String {
    format!(
        "{} exact, {} present, {} absent",
        feedback.count(Verdict::Exact),
        feedback.count(Verdict::Present),
        feedback.count(Verdict::Absent)
    )
}
