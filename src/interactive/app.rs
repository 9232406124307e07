//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{ScoringRule, Word};
use crate::game::{Action, Effect, Resolution, Session, Submission, apply, resolve};
use crate::service::{ServiceError, WordService, gate};
use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tracing::{debug, error, info};

/// Where the application is in its lifecycle
#[derive(Debug, Clone)]
pub enum Phase {
    /// Waiting for the secret word
    Loading,
    /// Secret word could not be fetched; play is blocked
    LoadFailed(String),
    Playing(Session),
}

/// Work the event loop must hand to the word service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchSecret,
    Validate(Submission),
}

/// Answer from the word service
#[derive(Debug)]
pub enum ServiceEvent {
    SecretLoaded(Result<Word, ServiceError>),
    Validated(Result<bool, ServiceError>),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
pub struct App {
    pub phase: Phase,
    pub rows: usize,
    pub rule: ScoringRule,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Loading,
            rows: config.rows,
            rule: config.rule,
            messages: vec![Message {
                text: "Fetching the secret word...".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// The running session, once the secret word has arrived
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Playing(session) => Some(session),
            _ => None,
        }
    }

    /// Game finished, either won or out of rows
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session()
            .is_some_and(|s| s.is_game_over() || s.is_exhausted())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session().is_some_and(Session::is_game_over)
    }

    /// Handle a key press, returning work for the word service if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Esc {
            self.should_quit = true;
            return None;
        }

        let finished = self.is_finished();
        match &mut self.phase {
            Phase::Loading => None,
            Phase::LoadFailed(_) => match key.code {
                KeyCode::Char('r') => Some(self.restart()),
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
            Phase::Playing(_) if finished => match key.code {
                KeyCode::Char('n') => Some(self.restart()),
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
            Phase::Playing(session) => {
                let action = Action::from_key_event(&key);
                match apply(session, action) {
                    Effect::Submitted(submission) => {
                        self.add_message(
                            &format!("Checking {}...", submission.guess.text().to_uppercase()),
                            MessageStyle::Info,
                        );
                        Some(Request::Validate(submission))
                    }
                    effect => {
                        debug!(?action, ?effect, "key handled");
                        None
                    }
                }
            }
        }
    }

    /// Apply an answer from the word service
    pub fn handle_service_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::SecretLoaded(Ok(secret)) => {
                self.phase = Phase::Playing(Session::new(secret, self.rows).with_rule(self.rule));
                self.add_message(
                    "New game! Type a five-letter word and press Enter.",
                    MessageStyle::Info,
                );
            }
            ServiceEvent::SecretLoaded(Err(err)) => {
                error!(error = %err, "could not fetch the secret word");
                self.phase = Phase::LoadFailed(err.to_string());
                self.add_message(
                    "Could not fetch the secret word. Press 'r' to retry or Esc to quit.",
                    MessageStyle::Error,
                );
            }
            ServiceEvent::Validated(Ok(valid)) => self.handle_validated(valid),
            ServiceEvent::Validated(Err(err)) => {
                if let Phase::Playing(session) = &mut self.phase {
                    session.cancel_submission();
                }
                self.add_message(
                    &format!("Could not check the word ({err}). Press Enter to try again."),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn handle_validated(&mut self, valid: bool) {
        let Phase::Playing(session) = &mut self.phase else {
            return;
        };
        let Some(resolution) = resolve(session, valid) else {
            return;
        };
        let exhausted = session.is_exhausted();
        let guesses = resolution.row() + 1;

        match resolution {
            Resolution::Won { .. } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                let celebration = match guesses {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    5 => "NICE WORK! Five guesses!",
                    6 => "PHEW! Got it in six!",
                    _ => "SOLVED!",
                };
                info!(guesses, "game won");
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                return;
            }
            Resolution::Scored { guess, feedback, .. } => {
                self.add_message(
                    &format!(
                        "{guesses}. {} {}",
                        guess.text().to_uppercase(),
                        feedback.to_emoji()
                    ),
                    MessageStyle::Info,
                );
            }
            Resolution::Rejected { .. } => {
                self.add_message("Not a word! Try again.", MessageStyle::Error);
            }
        }

        if exhausted {
            self.stats.total_games += 1;
            info!("rows exhausted");
            self.add_message(
                "Out of rows! Press 'n' for new game or 'q' to quit.",
                MessageStyle::Error,
            );
        }
    }

    fn restart(&mut self) -> Request {
        self.phase = Phase::Loading;
        self.messages.clear();
        self.add_message("Fetching the secret word...", MessageStyle::Info);
        Request::FetchSecret
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<S>(app: App, service: S) -> Result<()>
where
    S: WordService + Clone + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App, service: S) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordService + Clone + 'static,
{
    let (tx, mut rx) = unbounded_channel();
    let mut events = EventStream::new();

    dispatch(Request::FetchSecret, &service, &tx);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind == KeyEventKind::Press
                        && let Some(request) = app.handle_key(key)
                    {
                        dispatch(request, &service, &tx);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(answer) = rx.recv() => app.handle_service_event(answer),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run a service request in the background and report back on `tx`
fn dispatch<S>(request: Request, service: &S, tx: &UnboundedSender<ServiceEvent>)
where
    S: WordService + Clone + 'static,
{
    let service = service.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = match request {
            Request::FetchSecret => ServiceEvent::SecretLoaded(service.fetch_secret().await),
            Request::Validate(submission) => {
                ServiceEvent::Validated(gate::check(&service, &submission).await)
            }
        };
        // The receiver only closes when the UI has already exited
        let _ = tx.send(event);
    });
}
