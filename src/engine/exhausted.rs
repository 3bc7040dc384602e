//! Absent-letter tracking
//!
//! Drives the greyed-out letter rail. A letter counts as exhausted once
//! guessing it anywhere could no longer earn a hint: every occurrence on
//! the grid is either revealed or already claimed correct in a committed
//! attempt. Letters that never occur on the grid are exhausted the moment
//! they are guessed.
//!
//! Only letters the player has actually guessed are reported. A letter
//! whose occurrences happen to be fully revealed stays off the list until
//! it appears in a committed attempt, so the tracker never leaks
//! information the feedback has not.

use super::ledger::CreditLedger;
use crate::core::{GameHistory, Grid, RevealedSet};
use rustc_hash::FxHashSet;

/// Check whether one letter has no hint value left
///
/// `claimed` should be the history-only ledger; positions claimed by a
/// submission still in flight do not count.
#[must_use]
pub fn is_letter_exhausted(
    grid: &Grid,
    revealed: &RevealedSet,
    claimed: &CreditLedger,
    letter: u8,
) -> bool {
    grid.positions_of(letter)
        .iter()
        .all(|&pos| revealed.contains(pos) || claimed.contains(pos))
}

/// List every guessed letter with no hint value left, sorted ascending
///
/// Recomputed from scratch on each call; the result reflects the current
/// history and revealed set exactly.
#[must_use]
pub fn exhausted_letters(grid: &Grid, revealed: &RevealedSet, history: &GameHistory) -> Vec<u8> {
    let claimed = CreditLedger::from_history(history);

    let mut guessed: FxHashSet<u8> = FxHashSet::default();
    for attempt in history {
        for row in attempt.submission().rows() {
            guessed.extend(row.cells().iter().flatten());
        }
    }

    let mut letters: Vec<u8> = guessed
        .into_iter()
        .filter(|&letter| is_letter_exhausted(grid, revealed, &claimed, letter))
        .collect();
    letters.sort_unstable();
    letters
}
