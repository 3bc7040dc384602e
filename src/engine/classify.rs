//! Cell classification
//!
//! Scoring works in three passes per cell, against a credit ledger built
//! over the whole submission first:
//!
//! 1. **Correct**: the cell's letter equals the solution letter there.
//! 2. **Line match**: some unclaimed, unrevealed occurrence of the letter
//!    exists elsewhere in the same row or column.
//! 3. **Grid match**: some unclaimed, unrevealed occurrence exists on the
//!    grid outside this row and column entirely.
//!
//! Anything else is absent, as are blank cells. Candidate pools are
//! checked for existence only; two cells guessing the same letter can
//! both point at one remaining occurrence. After classification, cells at
//! revealed positions are forced to absent so that pre-revealed letters
//! never masquerade as earned hints.

use super::ledger::CreditLedger;
use crate::core::{
    FeedbackRow, FeedbackSymbol, GRID_SIZE, GameHistory, Grid, Position, RevealedSet, Submission,
};

/// Score a submission against the solution grid
///
/// Builds the credit ledger from `history` and the submission itself,
/// classifies every cell of all four rows, then forces cells at revealed
/// positions to [`FeedbackSymbol::Absent`]. The result depends only on
/// the set of (position, letter) pairs submitted, never on row order.
///
/// # Examples
/// ```
/// use wordcube::core::{GameHistory, Grid, GuessRow, RevealedSet, Submission};
/// use wordcube::engine::score;
///
/// let grid = Grid::new(["mask", "area", "made", "sage"]).unwrap();
/// let submission = Submission::single_row(0, GuessRow::parse("mask").unwrap());
/// let feedback = score(&grid, &RevealedSet::new(), &GameHistory::new(), &submission);
///
/// assert_eq!(feedback[0].to_string(), "GGGG");
/// assert_eq!(feedback[1].to_string(), "____");
/// ```
#[must_use]
pub fn score(
    grid: &Grid,
    revealed: &RevealedSet,
    history: &GameHistory,
    submission: &Submission,
) -> [FeedbackRow; GRID_SIZE] {
    let ledger = CreditLedger::build(grid, history, submission);

    let mut feedback = [FeedbackRow::BLANK; GRID_SIZE];
    for row in 0..GRID_SIZE {
        let mut symbols = [FeedbackSymbol::Absent; GRID_SIZE];
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            symbols[col] = if revealed.contains(pos) {
                FeedbackSymbol::Absent
            } else {
                match submission.cell(pos) {
                    Some(letter) => classify_cell(grid, revealed, &ledger, pos, letter),
                    None => FeedbackSymbol::Absent,
                }
            };
        }
        feedback[row] = FeedbackRow::new(symbols);
    }

    feedback
}

/// Check whether a submission spells out the entire solution
///
/// Wins are judged on letter equality over all sixteen cells, before the
/// revealed-position override is applied. This keeps puzzles with
/// pre-revealed cells winnable even though those cells render as absent.
#[must_use]
pub fn is_winning(grid: &Grid, submission: &Submission) -> bool {
    Position::all().all(|pos| submission.cell(pos) == Some(grid.letter(pos)))
}

fn classify_cell(
    grid: &Grid,
    revealed: &RevealedSet,
    ledger: &CreditLedger,
    pos: Position,
    letter: u8,
) -> FeedbackSymbol {
    if grid.letter(pos) == letter {
        return FeedbackSymbol::Correct;
    }

    let available = |q: &&Position| !revealed.contains(**q) && !ledger.contains(**q);

    let in_line = grid
        .positions_of(letter)
        .iter()
        .filter(available)
        .any(|&q| q != pos && (q.row == pos.row || q.col == pos.col));
    if in_line {
        return FeedbackSymbol::LineMatch;
    }

    let elsewhere = grid
        .positions_of(letter)
        .iter()
        .filter(available)
        .any(|&q| q.row != pos.row && q.col != pos.col);
    if elsewhere {
        return FeedbackSymbol::GridMatch;
    }

    FeedbackSymbol::Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attempt, GuessRow};

    fn grid(rows: [&str; 4]) -> Grid {
        Grid::new(rows).unwrap()
    }

    fn single(row: usize, word: &str) -> Submission {
        Submission::single_row(row, GuessRow::parse(word).unwrap())
    }

    fn commit(history: &mut GameHistory, grid: &Grid, submission: Submission) {
        let feedback = score(grid, &RevealedSet::new(), history, &submission);
        history.push(Attempt::new(submission, feedback));
    }

    fn codes(feedback: &[FeedbackRow; GRID_SIZE]) -> [String; GRID_SIZE] {
        std::array::from_fn(|i| feedback[i].to_string())
    }

    #[test]
    fn exact_row_scores_all_correct() {
        let grid = grid(["mask", "area", "made", "sage"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(0, "mask"),
        );
        assert_eq!(codes(&feedback), ["GGGG", "____", "____", "____"]);
    }

    #[test]
    fn column_occurrence_gives_line_match() {
        // After row 0 is solved, column 1 still holds unclaimed 'a's
        let grid = grid(["mask", "area", "made", "sage"]);
        let mut history = GameHistory::new();
        commit(&mut history, &grid, single(0, "mask"));

        let feedback = score(&grid, &RevealedSet::new(), &history, &single(1, "xaxx"));
        assert_eq!(feedback[1].to_string(), "_Y__");
    }

    #[test]
    fn row_occurrence_gives_line_match() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(3, "xexx"),
        );
        // 'e' sits at (3,0) and (3,3), same row as the guess cell (3,1)
        assert_eq!(feedback[3].to_string(), "_Y__");
    }

    #[test]
    fn off_line_occurrence_gives_grid_match() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(0, "nxxx"),
        );
        // 'n' occurs at (1,3) and (2,2), neither in row 0 nor column 0
        assert_eq!(feedback[0].to_string(), "P___");
    }

    #[test]
    fn missing_letter_scores_absent() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(0, "zzzz"),
        );
        assert_eq!(feedback[0].to_string(), "____");
    }

    #[test]
    fn blank_cells_score_absent() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(0, "m..k"),
        );
        assert_eq!(feedback[0].to_string(), "G__G");
    }

    #[test]
    fn correct_cells_elsewhere_in_submission_shrink_the_pool() {
        // Rows 1-3 are spelled exactly; the probe in row 0 finds every
        // occurrence of its letters already claimed by those rows.
        let grid = grid(["mill", "idea", "most", "else"]);
        let submission = Submission::parse(["tied", "idea", "most", "else"]).unwrap();

        let feedback = score(&grid, &RevealedSet::new(), &GameHistory::new(), &submission);
        assert_eq!(codes(&feedback), ["_G__", "GGGG", "GGGG", "GGGG"]);
    }

    #[test]
    fn feedback_does_not_depend_on_probe_row_position() {
        // Same situation with the probe in the last row instead of the
        // first: ledger construction runs before classification, so the
        // probe row scores identically.
        let grid = grid(["idea", "most", "else", "mill"]);
        let submission = Submission::parse(["idea", "most", "else", "tied"]).unwrap();

        let feedback = score(&grid, &RevealedSet::new(), &GameHistory::new(), &submission);
        assert_eq!(codes(&feedback), ["GGGG", "GGGG", "GGGG", "_G__"]);
    }

    #[test]
    fn revealed_occurrences_are_skipped_as_candidates() {
        // 'm' occurs at (0,0) and (2,0); with (2,0) revealed, only (0,0)
        // remains, and it shares a row with the guess cell (0,1).
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let revealed: RevealedSet = [Position::new(2, 0)].into_iter().collect();

        let feedback = score(&grid, &revealed, &GameHistory::new(), &single(0, "xmxx"));
        assert_eq!(feedback[0].to_string(), "_Y__");
    }

    #[test]
    fn revealed_position_forces_absent_even_when_correct() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let revealed: RevealedSet = [Position::new(2, 0)].into_iter().collect();

        let feedback = score(&grid, &revealed, &GameHistory::new(), &single(2, "mine"));
        assert_eq!(feedback[2].to_string(), "_GGG");
    }

    #[test]
    fn fully_revealed_grid_scores_all_absent() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let submission = Submission::parse(["mask", "icon", "mine", "edge"]).unwrap();

        let feedback = score(&grid, &RevealedSet::full(), &GameHistory::new(), &submission);
        assert_eq!(codes(&feedback), ["____", "____", "____", "____"]);
    }

    #[test]
    fn grid_match_pool_is_not_consumed_within_a_submission() {
        // One unclaimed 'n' remains at (2,2); both probe cells see it.
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let mut history = GameHistory::new();
        commit(&mut history, &grid, single(1, "icon"));

        let submission = Submission::parse(["nxxx", "....", "....", "xxxn"]).unwrap();
        let feedback = score(&grid, &RevealedSet::new(), &history, &submission);

        assert_eq!(feedback[0].to_string(), "P___");
        assert_eq!(feedback[3].to_string(), "___P");
    }

    #[test]
    fn history_claims_suppress_repeat_hints() {
        // 'a' occurs only at (0,1); once row 0 is committed correct, a
        // later 'a' anywhere finds no unclaimed occurrence.
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let mut history = GameHistory::new();
        commit(&mut history, &grid, single(0, "mask"));

        let feedback = score(&grid, &RevealedSet::new(), &history, &single(1, "axxx"));
        assert_eq!(feedback[1].to_string(), "____");
    }

    #[test]
    fn line_match_prefers_over_grid_match() {
        // 'e' occurs in row 3 and elsewhere; the same-line occurrence
        // decides the symbol.
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(3, "xxex"),
        );
        assert_eq!(feedback[3].symbol(2), FeedbackSymbol::LineMatch);
    }

    #[test]
    fn own_cell_occurrence_is_correct_not_line_match() {
        // 'k' occurs only at (0,3). Guessed at (0,0) it is a line match;
        // guessed on its own cell it is correct, never a hint about
        // itself.
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(0, "kxxx"),
        );
        assert_eq!(feedback[0].to_string(), "Y___");

        let feedback = score(
            &grid,
            &RevealedSet::new(),
            &GameHistory::new(),
            &single(0, "xxxk"),
        );
        assert_eq!(feedback[0].to_string(), "___G");
    }

    #[test]
    fn winning_requires_every_cell() {
        let grid = grid(["mask", "icon", "mine", "edge"]);

        let full = Submission::parse(["mask", "icon", "mine", "edge"]).unwrap();
        assert!(is_winning(&grid, &full));

        let partial = Submission::parse(["mask", "icon", "mine", "edg."]).unwrap();
        assert!(!is_winning(&grid, &partial));

        let wrong = Submission::parse(["mask", "icon", "mint", "edge"]).unwrap();
        assert!(!is_winning(&grid, &wrong));
    }

    #[test]
    fn winning_is_judged_before_revealed_override() {
        let grid = grid(["mask", "icon", "mine", "edge"]);
        let submission = Submission::parse(["mask", "icon", "mine", "edge"]).unwrap();
        assert!(is_winning(&grid, &submission));

        // Even though a fully revealed grid renders the same submission
        // as all-absent, the win check is unaffected.
        let feedback = score(&grid, &RevealedSet::full(), &GameHistory::new(), &submission);
        assert!(feedback.iter().all(|row| !row.is_all_correct()));
    }
}
