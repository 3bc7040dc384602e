//! Word Cube
//!
//! A 4x4 word puzzle engine with grid-aware hint feedback. Four 4-letter
//! words are hidden in a grid; submissions are scored cell by cell with
//! hints that account for the whole grid, previously earned positions and
//! pre-revealed cells.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordcube::core::{GameHistory, Grid, GuessRow, RevealedSet, Submission};
//! use wordcube::engine::score;
//!
//! let grid = Grid::new(["mask", "area", "made", "sage"]).unwrap();
//! let submission = Submission::single_row(0, GuessRow::parse("mask").unwrap());
//!
//! let feedback = score(&grid, &RevealedSet::new(), &GameHistory::new(), &submission);
//! println!("Row 0: {}", feedback[0]);
//! ```

// Domain types
pub mod core;

// Feedback scoring engine
pub mod engine;

// Game session state
pub mod session;

// Puzzle cube sources
pub mod cubes;

// CLI subcommands
pub mod commands;

// Terminal presentation
pub mod output;

// ratatui play screen
pub mod interactive;
