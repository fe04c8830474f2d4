//! Interactive TUI mode
//!
//! A grid of letter tiles whose colours the user cycles to report feedback.

mod app;
mod rendering;

pub use app::{App, run_tui};
