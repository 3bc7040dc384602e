//! Committed attempt log
//!
//! Every scored submission is recorded together with the feedback it
//! produced. The log is append-only; earlier attempts are never edited or
//! rescored, so the credit ledger and the letter tracker can treat stored
//! feedback as ground truth.

use super::feedback::FeedbackRow;
use super::grid::GRID_SIZE;
use super::guess::Submission;

/// One committed turn: the submission and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    submission: Submission,
    feedback: [FeedbackRow; GRID_SIZE],
}

impl Attempt {
    /// Create an attempt record
    #[inline]
    #[must_use]
    pub const fn new(submission: Submission, feedback: [FeedbackRow; GRID_SIZE]) -> Self {
        Self {
            submission,
            feedback,
        }
    }

    /// The submitted rows
    #[inline]
    #[must_use]
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }

    /// The feedback for all four rows
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[FeedbackRow; GRID_SIZE] {
        &self.feedback
    }
}

/// Append-only sequence of committed attempts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    attempts: Vec<Attempt>,
}

impl GameHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    /// Append a committed attempt
    pub fn push(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    /// Number of committed attempts
    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    /// True when no attempts have been committed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// The most recent attempt, if any
    #[must_use]
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Iterate attempts oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, Attempt> {
        self.attempts.iter()
    }
}

impl<'a> IntoIterator for &'a GameHistory {
    type Item = &'a Attempt;
    type IntoIter = std::slice::Iter<'a, Attempt>;

    fn into_iter(self) -> Self::IntoIter {
        self.attempts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRow;

    fn attempt(row: usize, word: &str, code: &str) -> Attempt {
        let submission = Submission::single_row(row, GuessRow::parse(word).unwrap());
        let mut feedback = [FeedbackRow::BLANK; GRID_SIZE];
        feedback[row] = FeedbackRow::parse(code).unwrap();
        Attempt::new(submission, feedback)
    }

    #[test]
    fn history_starts_empty() {
        let history = GameHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
    }

    #[test]
    fn history_preserves_order() {
        let mut history = GameHistory::new();
        history.push(attempt(0, "mask", "GGGG"));
        history.push(attempt(1, "xard", "_Y__"));

        assert_eq!(history.len(), 2);
        let rows: Vec<String> = history
            .iter()
            .map(|a| a.submission().row(0).to_string())
            .collect();
        assert_eq!(rows, ["mask", "____"]);
        assert_eq!(
            history.last().unwrap().submission().row(1).to_string(),
            "xard"
        );
    }

    #[test]
    fn attempt_exposes_feedback() {
        let a = attempt(2, "mine", "G_Y_");
        assert_eq!(format!("{}", a.feedback()[2]), "G_Y_");
        assert_eq!(format!("{}", a.feedback()[0]), "____");
    }

    #[test]
    fn iter_reverses_to_newest_first() {
        let mut history = GameHistory::new();
        history.push(attempt(0, "mask", "GGGG"));
        history.push(attempt(0, "mole", "Y___"));
        history.push(attempt(0, "mine", "G___"));

        // The play screen walks the log newest first
        let newest: Vec<String> = history
            .iter()
            .rev()
            .take(2)
            .map(|a| a.submission().row(0).to_string())
            .collect();
        assert_eq!(newest, ["mine", "mole"]);
    }
}
