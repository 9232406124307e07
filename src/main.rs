//! Wordgrid - CLI
//!
//! Terminal word game with TUI and line modes, plus offline scoring.

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use wordgrid::{
    commands::{run_simple, score_guess},
    config::{DEFAULT_TIMEOUT_SECS, DEFAULT_VALIDATE_URL, DEFAULT_WORD_URL, GameConfig},
    core::ScoringRule,
    game::DEFAULT_ROWS,
    output::print_score_result,
    service::HttpWordService,
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Guess the five-letter secret word in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word-of-the-day endpoint
    #[arg(long, global = true, env = "WORDGRID_WORD_URL", default_value = DEFAULT_WORD_URL)]
    word_url: String,

    /// Word validation endpoint
    #[arg(long, global = true, env = "WORDGRID_VALIDATE_URL", default_value = DEFAULT_VALIDATE_URL)]
    validate_url: String,

    /// Play the daily word instead of a random one
    #[arg(long, global = true, env = "WORDGRID_DAILY")]
    daily: bool,

    /// Number of guess rows
    #[arg(
        short,
        long,
        global = true,
        env = "WORDGRID_ROWS",
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u16).range(1..=26).map(usize::from)
    )]
    rows: usize,

    /// Cap yellow letters by how often they occur in the word (official rule)
    #[arg(long, global = true)]
    standard_duplicates: bool,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "WORDGRID_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    /// Log file (the terminal is taken by the game)
    #[arg(long, global = true, env = "WORDGRID_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Score a guess against a known word, offline
    Score {
        /// The guessed word
        guess: String,

        /// The word to score against
        secret: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            word_url: self.word_url.clone(),
            validate_url: self.validate_url.clone(),
            random: !self.daily,
            rows: self.rows,
            rule: if self.standard_duplicates {
                ScoringRule::Standard
            } else {
                ScoringRule::Membership
            },
            timeout: Duration::from_secs(self.timeout_secs),
            log_file: self.log_file.clone().unwrap_or(defaults.log_file),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let _log_guard = wordgrid::logging::init(&config.log_file)?;
    info!(?config, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config).await,
        Commands::Simple => run_simple_command(&config).await,
        Commands::Score { guess, secret } => run_score_command(&guess, &secret, config.rule),
    }
}

async fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordgrid::interactive::{App, run_tui};

    let service = HttpWordService::new(config).context("failed to build HTTP client")?;
    let app = App::new(config);
    run_tui(app, service).await
}

async fn run_simple_command(config: &GameConfig) -> Result<()> {
    let service = HttpWordService::new(config).context("failed to build HTTP client")?;
    run_simple(&service, config).await
}

fn run_score_command(guess: &str, secret: &str, rule: ScoringRule) -> Result<()> {
    let result = score_guess(guess, secret, rule).context("cannot score these words")?;
    print_score_result(&result);
    Ok(())
}
