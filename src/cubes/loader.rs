//! Cube file parsing
//!
//! Puzzle files hold one cube per block: four lines of four letters,
//! blocks separated by a blank line. Letters within a line may be spaced
//! out (`e r a s`) or packed (`eras`). Malformed blocks are skipped and
//! counted rather than failing the whole file.

use crate::core::Grid;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// A parsed collection of puzzle cubes
#[derive(Debug, Clone, Default)]
pub struct CubeSet {
    cubes: Vec<Grid>,
    skipped: usize,
}

impl CubeSet {
    /// Parse cubes from block-formatted text
    ///
    /// # Examples
    /// ```
    /// use wordcube::cubes::CubeSet;
    ///
    /// let set = CubeSet::parse("e r a s\nm o l e\ni d e a\nt e s t");
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.skipped(), 0);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut cubes = Vec::new();
        let mut skipped = 0;

        for block in text.replace("\r\n", "\n").split("\n\n") {
            let words: Vec<String> = block
                .lines()
                .map(|line| line.replace(' ', ""))
                .filter(|word| !word.is_empty())
                .collect();

            if words.is_empty() {
                continue;
            }

            let Ok(rows) = <[String; 4]>::try_from(words) else {
                skipped += 1;
                continue;
            };

            match Grid::new(rows) {
                Ok(grid) => cubes.push(grid),
                Err(_) => skipped += 1,
            }
        }

        Self { cubes, skipped }
    }

    /// Load and parse a cube file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read. Malformed blocks do
    /// not fail the load; they show up in [`CubeSet::skipped`].
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Build a set from already-validated grids
    #[must_use]
    pub const fn from_grids(cubes: Vec<Grid>) -> Self {
        Self { cubes, skipped: 0 }
    }

    /// The parsed cubes, in file order
    #[must_use]
    pub fn cubes(&self) -> &[Grid] {
        &self.cubes
    }

    /// Consume the set, keeping only the grids
    #[must_use]
    pub fn into_grids(self) -> Vec<Grid> {
        self.cubes
    }

    /// Number of valid cubes
    #[must_use]
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// True when no valid cube was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Number of malformed blocks that were skipped
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Get one cube by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Grid> {
        self.cubes.get(index)
    }

    /// Pick a cube uniformly at random
    #[must_use]
    pub fn choose<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<&Grid> {
        self.cubes.choose(rng)
    }
}
