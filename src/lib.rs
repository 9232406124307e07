//! Wordgrid
//!
//! A Wordle-style word game for the terminal. The secret word and the
//! dictionary check come from a remote word service; everything else is a
//! pure state machine over a grid of letter cells.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid::core::Word;
//! use wordgrid::game::{Action, Resolution, Session, apply, resolve};
//!
//! let mut session = Session::new(Word::new("crane").unwrap(), 6);
//! for c in "slate".chars() {
//!     apply(&mut session, Action::Letter(c));
//! }
//! apply(&mut session, Action::Enter);
//!
//! // The validity service said "slate" is a word
//! let resolution = resolve(&mut session, true).unwrap();
//! assert!(matches!(resolution, Resolution::Scored { row: 0, .. }));
//! assert_eq!(session.cursor(), 5);
//! ```

// Core domain types
pub mod core;

// Grid state machine
pub mod game;

// Remote word services
pub mod service;

// Runtime configuration
pub mod config;

// Log setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
