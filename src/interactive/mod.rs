//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, Request, ServiceEvent, run_tui};
