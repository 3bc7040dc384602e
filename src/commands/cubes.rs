//! Cube collection inspection
//!
//! Reports how many cubes a source provides and how many blocks were
//! rejected, for checking a hand-written cube file before playing it.

use crate::core::Grid;
use crate::cubes;
use std::path::Path;

/// Summary of one cube source
#[derive(Debug, Clone)]
pub struct CubeSummary {
    pub source: String,
    pub count: usize,
    pub skipped: usize,
    pub cubes: Vec<Grid>,
}

/// Summarize the embedded cube table or a cube file
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn summarize_cubes(file: Option<&Path>) -> Result<CubeSummary, String> {
    let source = file.map_or_else(
        || "embedded".to_string(),
        |path| path.display().to_string(),
    );

    let set = cubes::cube_source(file).map_err(|e| format!("Failed to read {source}: {e}"))?;

    Ok(CubeSummary {
        source,
        count: set.len(),
        skipped: set.skipped(),
        cubes: set.into_grids(),
    })
}
