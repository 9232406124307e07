//! Simple line-based mode
//!
//! Text-based play without the TUI. Each line is fed to the grid key by key
//! and followed by Enter.

use crate::config::GameConfig;
use crate::game::{Action, Effect, Session, apply, resolve};
use crate::output::{print_board, print_resolution};
use crate::service::{WordService, gate};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// Key used for Backspace in line mode
const BACKSPACE: char = '<';

/// What the player asked for on one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Keys(Vec<Action>),
}

/// Decode one input line
///
/// `:q`/`:quit` and `:n`/`:new` are commands; anything else is a run of keys
/// where `<` is Backspace and every line ends with Enter.
///
/// # Examples
/// ```
/// use wordgrid::commands::simple::{LineCommand, parse_line};
/// use wordgrid::game::Action;
///
/// assert_eq!(parse_line(":q"), LineCommand::Quit);
/// assert_eq!(
///     parse_line("a<"),
///     LineCommand::Keys(vec![Action::Letter('a'), Action::Backspace, Action::Enter])
/// );
/// ```
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    match line.trim() {
        ":q" | ":quit" => LineCommand::Quit,
        ":n" | ":new" => LineCommand::NewGame,
        keys => {
            let mut actions: Vec<Action> = keys
                .chars()
                .map(|c| {
                    if c == BACKSPACE {
                        Action::Backspace
                    } else {
                        Action::from_key_name(c.encode_utf8(&mut [0; 4]))
                    }
                })
                .collect();
            actions.push(Action::Enter);
            LineCommand::Keys(actions)
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the secret word cannot be fetched or there's an I/O
/// error reading user input.
pub async fn run_simple<S: WordService>(service: &S, config: &GameConfig) -> Result<()> {
    println!("\n╔════════════════════════════════════════════════╗");
    println!("║             Wordgrid - Line Mode               ║");
    println!("╚════════════════════════════════════════════════╝\n");
    println!("Type a word and press Enter. Use '<' for Backspace.");
    println!("Commands: ':q' to quit, ':n' for a new game\n");

    'games: loop {
        println!("Fetching the secret word...");
        let secret = service
            .fetch_secret()
            .await
            .context("could not fetch the secret word")?;
        let mut session = Session::new(secret, config.rows).with_rule(config.rule);

        loop {
            print_board(&session);

            if session.is_game_over() || session.is_exhausted() {
                if session.is_exhausted() {
                    println!("{}", "Out of rows!".red().bold());
                }
                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => continue 'games,
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }

            let actions = match parse_line(&get_user_input("Guess")?) {
                LineCommand::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                LineCommand::NewGame => continue 'games,
                LineCommand::Keys(actions) => actions,
            };

            let mut submitted = None;
            for action in actions {
                if let Effect::Submitted(submission) = apply(&mut session, action) {
                    submitted = Some(submission);
                }
            }

            let Some(submission) = submitted else {
                println!("Fill every cell of the row to submit it.");
                continue;
            };

            match gate::check(service, &submission).await {
                Ok(valid) => {
                    if let Some(resolution) = resolve(&mut session, valid) {
                        print_resolution(&resolution);
                    }
                }
                Err(err) => {
                    warn!(error = %err, "line mode validity check failed");
                    session.cancel_submission();
                    println!("{}", format!("Could not check the word: {err}").red());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        anyhow::bail!("input closed");
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn commands_are_recognised() {
        assert_eq!(parse_line(":quit"), LineCommand::Quit);
        assert_eq!(parse_line("  :n  "), LineCommand::NewGame);
    }

    #[test]
    fn keys_end_with_enter() {
        let LineCommand::Keys(actions) = parse_line("ab") else {
            panic!("expected keys");
        };
        assert_eq!(
            actions,
            vec![Action::Letter('a'), Action::Letter('b'), Action::Enter]
        );
    }

    #[test]
    fn empty_line_is_just_enter() {
        assert_eq!(parse_line(""), LineCommand::Keys(vec![Action::Enter]));
    }

    #[test]
    fn punctuation_is_suppressed() {
        let LineCommand::Keys(actions) = parse_line("a1!") else {
            panic!("expected keys");
        };
        assert_eq!(actions[1], Action::Suppress);
        assert_eq!(actions[2], Action::Suppress);
    }

    #[test]
    fn line_drives_the_grid() {
        let mut session = Session::new(Word::new("crane").unwrap(), 6);
        let LineCommand::Keys(actions) = parse_line("slatx<e") else {
            panic!("expected keys");
        };

        let effects: Vec<Effect> = actions
            .into_iter()
            .map(|action| apply(&mut session, action))
            .collect();
        let Some(Effect::Submitted(submission)) = effects.last() else {
            panic!("row should have been submitted");
        };
        assert_eq!(submission.guess.text(), "slate");
    }
}
