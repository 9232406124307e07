//! Terminal output formatting
//!
//! Display utilities for line mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_resolution, print_score_result};
