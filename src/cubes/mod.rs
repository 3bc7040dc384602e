//! Puzzle cube sources
//!
//! Cubes come either from the compiled-in table or from a user-supplied
//! file in the same block format.

mod embedded;
mod loader;

pub use embedded::{embedded_count, embedded_cubes};
pub use loader::CubeSet;

use std::io;
use std::path::Path;

/// Load cubes from a file, or fall back to the embedded table
///
/// # Errors
/// Returns an error only if a file was given and cannot be read.
pub fn cube_source(file: Option<&Path>) -> io::Result<CubeSet> {
    match file {
        Some(path) => CubeSet::load(path),
        None => Ok(embedded_cubes()),
    }
}
