//! Core domain types for the word cube puzzle
//!
//! This module contains the fundamental domain types with no knowledge of
//! scoring rules or session flow. All types here are plain values with
//! clear construction invariants.

mod feedback;
mod grid;
mod guess;
mod history;

pub use feedback::{FeedbackError, FeedbackRow, FeedbackSymbol};
pub use grid::{GRID_SIZE, Grid, GridError, Position, RevealedSet};
pub use guess::{GuessError, GuessRow, Submission};
pub use history::{Attempt, GameHistory};
