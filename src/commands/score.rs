//! One-shot submission scoring
//!
//! Scores a submission against an explicitly supplied grid. Optional
//! prior submissions are rescored in order first, so a mid-game state
//! can be rebuilt exactly from the command line.

use crate::core::{
    Attempt, FeedbackRow, GRID_SIZE, GameHistory, Grid, GuessRow, Position, RevealedSet, Submission,
};
use crate::engine;

/// Configuration for one-shot scoring
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Four comma-separated row words, e.g. `mask,icon,mine,edge`
    pub grid: String,
    /// Guess rows top to bottom; missing rows stay blank
    pub rows: Vec<String>,
    /// Revealed cells as `row,col` pairs separated by `;` or spaces
    pub revealed: Option<String>,
    /// Earlier submissions, each four comma-separated rows
    pub prior: Vec<String>,
}

/// Result of scoring one submission
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub submission: Submission,
    pub feedback: [FeedbackRow; GRID_SIZE],
    pub winning: bool,
    pub exhausted: Vec<u8>,
}

/// Score a submission described on the command line
///
/// # Errors
///
/// Returns an error if:
/// - The grid is not four valid row words
/// - A revealed cell is malformed or out of range
/// - A guess row or prior submission fails to parse
pub fn score_submission(config: &ScoreConfig) -> Result<ScoreResult, String> {
    let grid = parse_grid(&config.grid)?;
    let revealed = match &config.revealed {
        Some(spec) => parse_revealed(spec)?,
        None => RevealedSet::new(),
    };

    let rows: Vec<&str> = config.rows.iter().map(String::as_str).collect();
    let submission = parse_submission(&rows)?;

    let mut history = GameHistory::new();
    for spec in &config.prior {
        let prior_rows: Vec<&str> = spec.split(',').collect();
        let prior = parse_submission(&prior_rows)
            .map_err(|e| format!("Prior submission '{spec}': {e}"))?;
        let feedback = engine::score(&grid, &revealed, &history, &prior);
        history.push(Attempt::new(prior, feedback));
    }

    let feedback = engine::score(&grid, &revealed, &history, &submission);
    let winning = engine::is_winning(&grid, &submission);
    history.push(Attempt::new(submission, feedback));
    let exhausted = engine::exhausted_letters(&grid, &revealed, &history);

    Ok(ScoreResult {
        submission,
        feedback,
        winning,
        exhausted,
    })
}

fn parse_grid(spec: &str) -> Result<Grid, String> {
    let words: Vec<&str> = spec.split(',').map(str::trim).collect();
    let rows: [&str; GRID_SIZE] = words.try_into().map_err(|words: Vec<&str>| {
        format!("Grid needs exactly 4 row words, got {}", words.len())
    })?;

    Grid::new(rows).map_err(|e| format!("Invalid grid: {e}"))
}

fn parse_submission(rows: &[&str]) -> Result<Submission, String> {
    if rows.len() > GRID_SIZE {
        return Err(format!("At most 4 guess rows, got {}", rows.len()));
    }

    let mut parsed = [GuessRow::EMPTY; GRID_SIZE];
    for (i, text) in rows.iter().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        parsed[i] = GuessRow::parse(text).map_err(|e| format!("Row {}: {e}", i + 1))?;
    }

    Ok(Submission::new(parsed))
}

fn parse_revealed(spec: &str) -> Result<RevealedSet, String> {
    let mut positions = Vec::new();

    for entry in spec.split([';', ' ']).filter(|s| !s.is_empty()) {
        let (row, col) = entry
            .split_once(',')
            .ok_or_else(|| format!("Revealed cell '{entry}' must be row,col"))?;
        let row: usize = row
            .trim()
            .parse()
            .map_err(|_| format!("Invalid row in revealed cell '{entry}'"))?;
        let col: usize = col
            .trim()
            .parse()
            .map_err(|_| format!("Invalid column in revealed cell '{entry}'"))?;

        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(format!(
                "Revealed cell '{entry}' is out of range (rows and columns go 0-3)"
            ));
        }
        positions.push(Position::new(row, col));
    }

    Ok(positions.into_iter().collect())
}
