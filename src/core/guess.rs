//! Player input types
//!
//! A `GuessRow` holds one row of player input where each cell is either a
//! letter or left blank. A `Submission` bundles the four rows that are
//! scored together in a single turn.

use super::grid::{GRID_SIZE, Position};
use std::fmt;

/// Error type for invalid guess input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Length(usize),
    InvalidCharacter(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => {
                write!(f, "Guess row must be exactly 4 cells, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Invalid guess character: {ch:?} (use a-z, or ' ', '.', '_' for blanks)")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// One row of player input: four cells, each a letter or blank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessRow {
    cells: [Option<u8>; GRID_SIZE],
}

impl GuessRow {
    /// A row with every cell left blank
    pub const EMPTY: Self = Self {
        cells: [None; GRID_SIZE],
    };

    /// Create a row directly from cells
    #[inline]
    #[must_use]
    pub const fn new(cells: [Option<u8>; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Parse a row from text
    ///
    /// Accepts exactly 4 characters. Letters are normalized to lowercase;
    /// `' '`, `'.'` and `'_'` denote blank cells.
    ///
    /// # Errors
    /// Returns `GuessError` if the text is not 4 characters long or
    /// contains a character that is neither a letter nor a blank marker.
    ///
    /// # Examples
    /// ```
    /// use wordcube::core::GuessRow;
    ///
    /// let row = GuessRow::parse("m.sK").unwrap();
    /// assert_eq!(row.cell(0), Some(b'm'));
    /// assert_eq!(row.cell(1), None);
    /// assert_eq!(row.cell(3), Some(b'k'));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != GRID_SIZE {
            return Err(GuessError::Length(chars.len()));
        }

        let mut cells = [None; GRID_SIZE];
        for (col, ch) in chars.into_iter().enumerate() {
            cells[col] = match ch {
                ' ' | '.' | '_' => None,
                c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
                c => return Err(GuessError::InvalidCharacter(c)),
            };
        }

        Ok(Self { cells })
    }

    /// Get the cell at a column
    #[inline]
    #[must_use]
    pub const fn cell(&self, col: usize) -> Option<u8> {
        self.cells[col]
    }

    /// Get all four cells
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Option<u8>; GRID_SIZE] {
        &self.cells
    }

    /// True when every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True when every cell is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(b) => write!(f, "{}", *b as char)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// A full turn of input: one guess row per grid row
///
/// All four rows are scored together so that the resulting feedback does
/// not depend on row order. Rows the player did not touch are simply
/// blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    rows: [GuessRow; GRID_SIZE],
}

impl Submission {
    /// Create a submission from four rows
    #[inline]
    #[must_use]
    pub const fn new(rows: [GuessRow; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Parse a submission from four row strings
    ///
    /// # Errors
    /// Returns the first `GuessError` encountered, scanning rows top to
    /// bottom.
    pub fn parse(texts: [impl AsRef<str>; 4]) -> Result<Self, GuessError> {
        let mut rows = [GuessRow::EMPTY; GRID_SIZE];
        for (i, text) in texts.iter().enumerate() {
            rows[i] = GuessRow::parse(text.as_ref())?;
        }
        Ok(Self { rows })
    }

    /// Create a submission with a single populated row, the rest blank
    ///
    /// # Panics
    /// Panics in debug mode if `row` is out of range.
    #[must_use]
    pub fn single_row(row: usize, guess: GuessRow) -> Self {
        debug_assert!(row < GRID_SIZE, "row out of range");
        let mut rows = [GuessRow::EMPTY; GRID_SIZE];
        rows[row] = guess;
        Self { rows }
    }

    /// Get one row
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &GuessRow {
        &self.rows[row]
    }

    /// Get all four rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; GRID_SIZE] {
        &self.rows
    }

    /// Get the cell at a grid position
    #[inline]
    #[must_use]
    pub const fn cell(&self, pos: Position) -> Option<u8> {
        self.rows[pos.row].cell(pos.col)
    }
}
