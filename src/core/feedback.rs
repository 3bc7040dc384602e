//! Feedback symbols and rows
//!
//! Each scored cell receives one of four symbols. `Correct` marks an exact
//! hit, `LineMatch` a letter that belongs elsewhere in the same row or
//! column, `GridMatch` a letter that belongs elsewhere on the grid, and
//! `Absent` everything else (including blank cells and cells at revealed
//! positions).

use super::grid::GRID_SIZE;
use std::fmt;

/// Error type for invalid feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Length(usize),
    InvalidCharacter(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => {
                write!(f, "Feedback row must be exactly 4 symbols, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Invalid feedback character: {ch:?} (use G, Y, P, _)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Per-cell hint symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Letter matches the solution at this exact position
    Correct,
    /// Letter belongs elsewhere in this row or column
    LineMatch,
    /// Letter belongs elsewhere on the grid, outside this row and column
    GridMatch,
    /// Letter does not help here (or the cell was blank/revealed)
    Absent,
}

impl FeedbackSymbol {
    /// Single-character code: `G`, `Y`, `P` or `_`
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::LineMatch => 'Y',
            Self::GridMatch => 'P',
            Self::Absent => '_',
        }
    }

    /// Parse one symbol from its character code
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidCharacter` for anything outside
    /// `G`, `Y`, `P`, `_`.
    pub const fn from_char(ch: char) -> Result<Self, FeedbackError> {
        match ch {
            'G' | 'g' => Ok(Self::Correct),
            'Y' | 'y' => Ok(Self::LineMatch),
            'P' | 'p' => Ok(Self::GridMatch),
            '_' => Ok(Self::Absent),
            c => Err(FeedbackError::InvalidCharacter(c)),
        }
    }

    /// Emoji block for share-style rendering
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Correct => "\u{1F7E9}",   // green square
            Self::LineMatch => "\u{1F7E8}", // yellow square
            Self::GridMatch => "\u{1F7EA}", // purple square
            Self::Absent => "\u{2B1C}",     // white square
        }
    }
}

/// Feedback for one grid row: four symbols, one per cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow {
    symbols: [FeedbackSymbol; GRID_SIZE],
}

impl FeedbackRow {
    /// The all-correct row (`GGGG`)
    pub const PERFECT: Self = Self {
        symbols: [FeedbackSymbol::Correct; GRID_SIZE],
    };

    /// The all-absent row (`____`)
    pub const BLANK: Self = Self {
        symbols: [FeedbackSymbol::Absent; GRID_SIZE],
    };

    /// Create a row from symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; GRID_SIZE]) -> Self {
        Self { symbols }
    }

    /// Parse a row from its 4-character code, e.g. `"GY_P"`
    ///
    /// # Errors
    /// Returns `FeedbackError` on wrong length or invalid characters.
    ///
    /// # Examples
    /// ```
    /// use wordcube::core::{FeedbackRow, FeedbackSymbol};
    ///
    /// let row = FeedbackRow::parse("G_YP").unwrap();
    /// assert_eq!(row.symbol(0), FeedbackSymbol::Correct);
    /// assert_eq!(row.symbol(3), FeedbackSymbol::GridMatch);
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != GRID_SIZE {
            return Err(FeedbackError::Length(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Absent; GRID_SIZE];
        for (i, ch) in chars.into_iter().enumerate() {
            symbols[i] = FeedbackSymbol::from_char(ch)?;
        }
        Ok(Self { symbols })
    }

    /// Get the symbol at a column
    #[inline]
    #[must_use]
    pub const fn symbol(&self, col: usize) -> FeedbackSymbol {
        self.symbols[col]
    }

    /// Get all four symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; GRID_SIZE] {
        &self.symbols
    }

    /// True when every cell is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.symbols.iter().all(|&s| s == FeedbackSymbol::Correct)
    }

    /// Emoji rendering of the row
    #[must_use]
    pub fn emoji_string(&self) -> String {
        self.symbols.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}
