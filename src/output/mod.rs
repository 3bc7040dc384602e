//! Terminal presentation layer.
//!
//! Colored formatters for boards and feedback, plus printers for
//! command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_cube_summary, print_feedback, print_score_result};
