//! Game state machine
//!
//! Input decoding (`input`), state transitions (`controller`, `evaluator`)
//! and the state itself (`session`, `cell`) are kept apart so the whole game
//! can be driven without a terminal.

pub mod cell;
pub mod controller;
pub mod evaluator;
pub mod input;
pub mod session;

pub use cell::{Cell, CellState};
pub use controller::{Effect, apply};
pub use evaluator::{Resolution, resolve};
pub use input::Action;
pub use session::{DEFAULT_ROWS, Session, Submission};
