//! Solution grid representation
//!
//! A `Grid` stores the hidden 4x4 letter matrix for one puzzle instance,
//! along with a letter position index used by the feedback engine. The
//! `RevealedSet` records which coordinates were shown to the player from
//! the start.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Side length of the puzzle grid (4 rows x 4 columns)
pub const GRID_SIZE: usize = 4;

/// A (row, column) coordinate on the grid
///
/// Plain value type; both components are in `[0, GRID_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    ///
    /// # Panics
    /// Panics in debug mode if either coordinate is out of range
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE, "Position out of range");
        Self { row, col }
    }

    /// Iterate every grid position in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Self { row, col }))
    }
}

/// Error type for invalid grid rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    RowLength { row: usize, len: usize },
    NonAscii { row: usize },
    InvalidCharacters { row: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowLength { row, len } => {
                write!(f, "Grid row {row} must be exactly 4 letters, got {len}")
            }
            Self::NonAscii { row } => {
                write!(f, "Grid row {row} must contain only ASCII letters")
            }
            Self::InvalidCharacters { row } => {
                write!(f, "Grid row {row} contains invalid characters")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The hidden 4x4 solution letter matrix
///
/// Created once at puzzle start and never mutated for the lifetime of the
/// session. Stores the letters as bytes and maintains a map from letter to
/// the positions it occupies, for duplicate handling in the feedback
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [[u8; GRID_SIZE]; GRID_SIZE],
    letter_positions: FxHashMap<u8, Vec<Position>>,
}

impl Grid {
    /// Create a grid from four 4-letter row words
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `GridError` if any row:
    /// - is not exactly 4 characters long
    /// - contains non-ASCII characters
    /// - contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordcube::core::{Grid, Position};
    ///
    /// let grid = Grid::new(["eras", "mole", "idea", "test"]).unwrap();
    /// assert_eq!(grid.letter(Position::new(1, 0)), b'm');
    ///
    /// assert!(Grid::new(["eras", "mole", "idea", "t3st"]).is_err());
    /// ```
    pub fn new(row_words: [impl AsRef<str>; 4]) -> Result<Self, GridError> {
        let mut rows = [[0u8; GRID_SIZE]; GRID_SIZE];

        for (row, word) in row_words.iter().enumerate() {
            let text = word.as_ref().to_lowercase();

            if text.len() != GRID_SIZE {
                return Err(GridError::RowLength {
                    row,
                    len: text.len(),
                });
            }

            if !text.is_ascii() {
                return Err(GridError::NonAscii { row });
            }

            if !text.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(GridError::InvalidCharacters { row });
            }

            rows[row].copy_from_slice(text.as_bytes());
        }

        // Build position index for fast lookup
        let mut letter_positions: FxHashMap<u8, Vec<Position>> = FxHashMap::default();
        for pos in Position::all() {
            letter_positions
                .entry(rows[pos.row][pos.col])
                .or_default()
                .push(pos);
        }

        Ok(Self {
            rows,
            letter_positions,
        })
    }

    /// Get the letter at a position
    #[inline]
    #[must_use]
    pub const fn letter(&self, pos: Position) -> u8 {
        self.rows[pos.row][pos.col]
    }

    /// Get the raw letter rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Get one solution row as a `String` (for display)
    #[must_use]
    pub fn row_string(&self, row: usize) -> String {
        self.rows[row].iter().map(|&b| b as char).collect()
    }

    /// Check whether a letter occurs anywhere on the grid
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter occurs, in row-major order
    ///
    /// Returns an empty slice if the letter is not on the grid.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> &[Position] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row_string(row))?;
        }
        Ok(())
    }
}

/// The set of coordinates shown to the player from puzzle start
///
/// Chosen once when a session begins (cardinality depends on the
/// difficulty tier) and excluded from hint classification thereafter. The
/// explicit reveal operation replaces the session's set with
/// [`RevealedSet::full`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet {
    positions: FxHashSet<Position>,
}

impl RevealedSet {
    /// Create an empty set (no cells shown)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set covering every cell on the grid
    #[must_use]
    pub fn full() -> Self {
        Position::all().collect()
    }

    /// Check whether a position is revealed
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Number of revealed positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no cells are revealed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<Position> for RevealedSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
