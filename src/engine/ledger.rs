//! Credit ledger construction
//!
//! The ledger is the set of grid positions already "claimed" as Correct.
//! A position enters the ledger in one of two ways: a committed attempt
//! stored a `Correct` symbol for it, or the current submission places the
//! matching letter on it. The second half is computed over all four rows
//! before any cell is classified, which is what makes feedback
//! independent of row order within a submission.

use crate::core::{FeedbackSymbol, GameHistory, Grid, Position, Submission};
use rustc_hash::FxHashSet;

/// Positions excluded from hint candidate pools because their letter is
/// already accounted for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditLedger {
    positions: FxHashSet<Position>,
}

impl CreditLedger {
    /// Build the full ledger for scoring one submission
    ///
    /// Collects positions marked `Correct` in any committed attempt, then
    /// adds every position where the current submission's letter equals
    /// the solution letter. Both halves cover all four rows.
    #[must_use]
    pub fn build(grid: &Grid, history: &GameHistory, submission: &Submission) -> Self {
        let mut ledger = Self::from_history(history);

        for pos in Position::all() {
            if let Some(letter) = submission.cell(pos)
                && grid.letter(pos) == letter
            {
                ledger.positions.insert(pos);
            }
        }

        ledger
    }

    /// Build the ledger from committed attempts only
    ///
    /// Used by the letter tracker, which reasons about past turns without
    /// a submission in flight.
    #[must_use]
    pub fn from_history(history: &GameHistory) -> Self {
        let mut positions = FxHashSet::default();

        for attempt in history {
            for pos in Position::all() {
                if attempt.feedback()[pos.row].symbol(pos.col) == FeedbackSymbol::Correct {
                    positions.insert(pos);
                }
            }
        }

        Self { positions }
    }

    /// Check whether a position is claimed
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Number of claimed positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when nothing is claimed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attempt, FeedbackRow, GRID_SIZE, GuessRow};

    fn grid() -> Grid {
        Grid::new(["mask", "icon", "mine", "edge"]).unwrap()
    }

    fn attempt(row: usize, word: &str, code: &str) -> Attempt {
        let submission = Submission::single_row(row, GuessRow::parse(word).unwrap());
        let mut feedback = [FeedbackRow::BLANK; GRID_SIZE];
        feedback[row] = FeedbackRow::parse(code).unwrap();
        Attempt::new(submission, feedback)
    }

    #[test]
    fn empty_inputs_give_empty_ledger() {
        let ledger = CreditLedger::build(&grid(), &GameHistory::new(), &Submission::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn history_correct_symbols_enter_ledger() {
        let mut history = GameHistory::new();
        history.push(attempt(1, "icon", "GGGG"));

        let ledger = CreditLedger::from_history(&history);
        assert_eq!(ledger.len(), 4);
        assert!(ledger.contains(Position::new(1, 0)));
        assert!(ledger.contains(Position::new(1, 3)));
        assert!(!ledger.contains(Position::new(0, 0)));
    }

    #[test]
    fn non_correct_symbols_do_not_enter_ledger() {
        let mut history = GameHistory::new();
        history.push(attempt(0, "turf", "_YP_"));

        let ledger = CreditLedger::from_history(&history);
        assert!(ledger.is_empty());
    }

    #[test]
    fn current_submission_equality_enters_ledger() {
        // Row 2 of the submission spells the solution row exactly
        let submission = Submission::parse(["....", "....", "mine", "...."]).unwrap();
        let ledger = CreditLedger::build(&grid(), &GameHistory::new(), &submission);

        assert_eq!(ledger.len(), 4);
        assert!(ledger.contains(Position::new(2, 0)));
        assert!(ledger.contains(Position::new(2, 3)));
    }

    #[test]
    fn partial_equality_claims_only_matching_cells() {
        // 'm' and 'e' land on their solution cells, 'xx' does not
        let submission = Submission::parse(["....", "....", "mxxe", "...."]).unwrap();
        let ledger = CreditLedger::build(&grid(), &GameHistory::new(), &submission);

        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains(Position::new(2, 0)));
        assert!(ledger.contains(Position::new(2, 3)));
        assert!(!ledger.contains(Position::new(2, 1)));
    }

    #[test]
    fn halves_are_merged() {
        let mut history = GameHistory::new();
        history.push(attempt(1, "icon", "GGGG"));
        let submission = Submission::parse(["mask", "....", "....", "...."]).unwrap();

        let ledger = CreditLedger::build(&grid(), &history, &submission);
        assert_eq!(ledger.len(), 8);
        assert!(ledger.contains(Position::new(1, 2)));
        assert!(ledger.contains(Position::new(0, 2)));
    }

    #[test]
    fn from_history_ignores_submission_in_flight() {
        let mut history = GameHistory::new();
        history.push(attempt(1, "icon", "GGGG"));

        let ledger = CreditLedger::from_history(&history);
        assert!(!ledger.contains(Position::new(0, 0)));
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn claims_accumulate_across_attempts() {
        let mut history = GameHistory::new();
        history.push(attempt(1, "icon", "GGGG"));
        assert_eq!(CreditLedger::from_history(&history).len(), 4);

        history.push(attempt(2, "mxne", "G_GG"));
        let ledger = CreditLedger::from_history(&history);
        assert_eq!(ledger.len(), 7);

        // Earlier claims survive later attempts
        assert!(ledger.contains(Position::new(1, 0)));
        assert!(ledger.contains(Position::new(2, 0)));
        assert!(!ledger.contains(Position::new(2, 1)));
    }
}
