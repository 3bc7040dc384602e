//! Embedded puzzle cubes
//!
//! The build script validates `data/word_cubes.txt` at compile time and
//! generates the `CUBES` table included below, so the binary always
//! ships with a playable set.

use super::loader::CubeSet;

// Generated by build.rs: CUBES and CUBES_COUNT
include!(concat!(env!("OUT_DIR"), "/cubes.rs"));

/// Number of cubes compiled into the binary
#[must_use]
pub const fn embedded_count() -> usize {
    CUBES_COUNT
}

/// Build a `CubeSet` from the compiled-in cubes
#[must_use]
pub fn embedded_cubes() -> CubeSet {
    let cubes = CUBES
        .iter()
        .filter_map(|rows| crate::core::Grid::new(*rows).ok())
        .collect();
    CubeSet::from_grids(cubes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_not_empty() {
        assert!(embedded_count() > 0);
        assert_eq!(CUBES.len(), CUBES_COUNT);
    }

    #[test]
    fn every_embedded_cube_is_valid() {
        let set = embedded_cubes();
        assert_eq!(set.len(), embedded_count());
        assert_eq!(set.skipped(), 0);
    }

    #[test]
    fn embedded_rows_are_lowercase_words() {
        for rows in CUBES {
            for row in rows {
                assert_eq!(row.len(), 4);
                assert!(row.chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }
}
