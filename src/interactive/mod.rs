//! Interactive TUI play mode

mod app;
mod rendering;

pub use app::{App, run_tui};
