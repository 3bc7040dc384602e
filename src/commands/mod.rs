//! CLI subcommand implementations

pub mod cubes;
pub mod score;
pub mod simple;

pub use cubes::{CubeSummary, summarize_cubes};
pub use score::{ScoreConfig, ScoreResult, score_submission};
pub use simple::run_simple;
