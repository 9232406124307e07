//! TUI rendering with ratatui
//!
//! Draws the letter grid, the message log and the status bar.

use super::app::{App, MessageStyle, Phase};
use crate::core::{Verdict, WORD_LEN};
use crate::game::{Cell, CellState, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const TITLE: &str = "WORDGRID";
const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
];
const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Grid
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    // Title turns rainbow once the word is found
    let title = if app.is_won() {
        Line::from(
            TITLE
                .chars()
                .zip(RAINBOW.iter().cycle())
                .map(|(c, &color)| {
                    Span::styled(
                        c.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )
                })
                .collect::<Vec<_>>(),
        )
    } else {
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.phase {
        Phase::Loading => {
            let loading = Paragraph::new("Loading the secret word...")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(loading, center_vertically(inner, 1));
        }
        Phase::LoadFailed(reason) => {
            let content = vec![
                Line::from(Span::styled(
                    "Could not fetch the secret word",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(reason.as_str()),
                Line::from(""),
                Line::from("r: Retry | Esc: Quit"),
            ];
            let failed = Paragraph::new(content)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(failed, center_vertically(inner, 4));
        }
        Phase::Playing(session) => render_grid(f, session, inner),
    }
}

fn render_grid(f: &mut Frame, session: &Session, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); session.rows()])
        .flex(Flex::Center)
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); WORD_LEN])
            .flex(Flex::Center)
            .split(*row_area);

        for (cell, cell_area) in session.row(row).iter().zip(columns.iter()) {
            render_cell(f, cell, session.cursor() == cell.position(), session, *cell_area);
        }
    }
}

fn render_cell(f: &mut Frame, cell: &Cell, focused: bool, session: &Session, area: Rect) {
    let background = match cell.state() {
        CellState::Scored(Verdict::Exact) => Some(Color::Green),
        CellState::Scored(Verdict::Present) => Some(Color::Yellow),
        CellState::Scored(Verdict::Absent) => Some(Color::DarkGray),
        CellState::Neutral | CellState::Flash => None,
    };

    let border = if cell.state() == CellState::Flash {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if cell.is_resolved() {
        Style::default().fg(Color::Gray)
    } else if focused && session.accepts_input() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut letter_style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(bg) = background {
        letter_style = letter_style.bg(bg).fg(Color::Black);
    }

    let letter = cell
        .letter()
        .map_or_else(String::new, |c| c.to_ascii_uppercase().to_string());

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(border);
    if let Some(bg) = background {
        block = block.style(Style::default().bg(bg));
    }

    let widget = Paragraph::new(Span::styled(letter, letter_style))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match &app.phase {
        Phase::Loading => "Loading",
        Phase::LoadFailed(_) => "Offline",
        Phase::Playing(session) if session.is_pending() => "Checking word...",
        Phase::Playing(_) if app.is_won() => "Solved",
        Phase::Playing(_) if app.is_finished() => "Out of rows",
        Phase::Playing(_) => "Playing",
    };
    let mode = Paragraph::new(format!("Mode: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.is_finished() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    centered
}
