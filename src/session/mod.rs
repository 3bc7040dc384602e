//! Game session state
//!
//! A `GameSession` ties one solution grid to its revealed cells, the
//! attempt history and the solved flag, and owns the only mutation paths:
//! [`GameSession::submit`] and [`GameSession::reveal_answer`]. Rejected
//! submissions leave the session untouched.
//!
//! A session is single-writer. The engine functions it calls are pure, so
//! sharing one session across threads only needs a `Mutex` around it.

use crate::core::{
    Attempt, FeedbackRow, GRID_SIZE, GameHistory, Grid, Position, RevealedSet, Submission,
};
use crate::engine;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Whether the puzzle has been solved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Solved,
}

/// Difficulty tier, deciding how many cells start revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Number of cells shown at puzzle start
    #[must_use]
    pub const fn revealed_count(self) -> usize {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
            Self::Expert => 0,
        }
    }

    /// All tiers, easiest first
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Easy, Self::Medium, Self::Hard, Self::Expert]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            other => Err(format!(
                "Unknown difficulty '{other}' (expected easy, medium, hard or expert)"
            )),
        }
    }
}

/// How the attempt limit is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPolicy {
    /// Count attempts against the limit but never block a submission
    Advisory(usize),
    /// Reject submissions once the limit is reached
    Enforced(usize),
}

impl AttemptPolicy {
    /// Conventional attempt limit
    pub const DEFAULT_LIMIT: usize = 6;

    /// The configured limit
    #[must_use]
    pub const fn limit(self) -> usize {
        match self {
            Self::Advisory(n) | Self::Enforced(n) => n,
        }
    }

    /// True when reaching the limit blocks further submissions
    #[must_use]
    pub const fn is_enforced(self) -> bool {
        matches!(self, Self::Enforced(_))
    }
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        Self::Advisory(Self::DEFAULT_LIMIT)
    }
}

/// Error type for rejected session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadySolved,
    OutOfAttempts,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySolved => write!(f, "The puzzle is already solved"),
            Self::OutOfAttempts => write!(f, "No attempts remaining"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One play-through of a single puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    revealed: RevealedSet,
    history: GameHistory,
    status: SessionStatus,
    policy: AttemptPolicy,
}

impl GameSession {
    /// Start a session, sampling revealed cells for the difficulty tier
    ///
    /// The revealed positions are drawn uniformly without replacement.
    pub fn new<R: Rng + ?Sized>(
        grid: Grid,
        difficulty: Difficulty,
        policy: AttemptPolicy,
        rng: &mut R,
    ) -> Self {
        let cells = GRID_SIZE * GRID_SIZE;
        let revealed = rand::seq::index::sample(rng, cells, difficulty.revealed_count())
            .iter()
            .map(|i| Position::new(i / GRID_SIZE, i % GRID_SIZE))
            .collect();

        Self::with_revealed(grid, revealed, policy)
    }

    /// Start a session with an explicit revealed set
    #[must_use]
    pub const fn with_revealed(grid: Grid, revealed: RevealedSet, policy: AttemptPolicy) -> Self {
        Self {
            grid,
            revealed,
            history: GameHistory::new(),
            status: SessionStatus::Active,
            policy,
        }
    }

    /// The solution grid
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The currently revealed cells
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    /// The committed attempts, oldest first
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// The attempt policy in force
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> AttemptPolicy {
        self.policy
    }

    /// True once the puzzle is solved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == SessionStatus::Solved
    }

    /// Number of committed attempts
    #[must_use]
    pub fn attempts_made(&self) -> usize {
        self.history.len()
    }

    /// Attempts left before the limit (0 once past it)
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.policy.limit().saturating_sub(self.history.len())
    }

    /// The solution letter at a position, if that position is revealed
    #[must_use]
    pub fn revealed_letter(&self, pos: Position) -> Option<u8> {
        self.revealed.contains(pos).then(|| self.grid.letter(pos))
    }

    /// Score a submission and commit it to the history
    ///
    /// Returns the feedback for all four rows. A winning submission moves
    /// the session to [`SessionStatus::Solved`].
    ///
    /// # Errors
    /// Returns `SessionError::AlreadySolved` after the puzzle is solved,
    /// or `SessionError::OutOfAttempts` under an enforced policy with no
    /// attempts left. Neither error commits anything.
    pub fn submit(
        &mut self,
        submission: Submission,
    ) -> Result<[FeedbackRow; GRID_SIZE], SessionError> {
        if self.status == SessionStatus::Solved {
            return Err(SessionError::AlreadySolved);
        }
        if self.policy.is_enforced() && self.history.len() >= self.policy.limit() {
            return Err(SessionError::OutOfAttempts);
        }

        let feedback = engine::score(&self.grid, &self.revealed, &self.history, &submission);
        let winning = engine::is_winning(&self.grid, &submission);

        self.history.push(Attempt::new(submission, feedback));
        if winning {
            self.status = SessionStatus::Solved;
        }

        Ok(feedback)
    }

    /// Give up: reveal every cell and mark the session solved
    ///
    /// Idempotent; commits nothing to the history.
    pub fn reveal_answer(&mut self) {
        self.revealed = RevealedSet::full();
        self.status = SessionStatus::Solved;
    }

    /// Guessed letters with no hint value left, sorted ascending
    #[must_use]
    pub fn exhausted_letters(&self) -> Vec<u8> {
        engine::exhausted_letters(&self.grid, &self.revealed, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRow;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid() -> Grid {
        Grid::new(["mask", "icon", "mine", "edge"]).unwrap()
    }

    fn full_solution() -> Submission {
        Submission::parse(["mask", "icon", "mine", "edge"]).unwrap()
    }

    #[test]
    fn difficulty_reveal_counts() {
        assert_eq!(Difficulty::Easy.revealed_count(), 8);
        assert_eq!(Difficulty::Medium.revealed_count(), 6);
        assert_eq!(Difficulty::Hard.revealed_count(), 4);
        assert_eq!(Difficulty::Expert.revealed_count(), 0);
    }

    #[test]
    fn difficulty_parses_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("EXPERT".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn new_session_samples_distinct_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::all() {
            let session = GameSession::new(grid(), difficulty, AttemptPolicy::default(), &mut rng);
            assert_eq!(session.revealed().len(), difficulty.revealed_count());
            assert!(session.history().is_empty());
            assert_eq!(session.status(), SessionStatus::Active);
        }
    }

    #[test]
    fn revealed_letter_lookup() {
        let revealed: RevealedSet = [Position::new(2, 0)].into_iter().collect();
        let session = GameSession::with_revealed(grid(), revealed, AttemptPolicy::default());

        assert_eq!(session.revealed_letter(Position::new(2, 0)), Some(b'm'));
        assert_eq!(session.revealed_letter(Position::new(0, 0)), None);
    }

    #[test]
    fn submit_commits_attempt() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::default());
        let submission = Submission::single_row(0, GuessRow::parse("mask").unwrap());

        let feedback = session.submit(submission).unwrap();
        assert_eq!(feedback[0].to_string(), "GGGG");
        assert_eq!(session.attempts_made(), 1);
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn winning_submission_solves() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::default());
        session.submit(full_solution()).unwrap();
        assert!(session.is_solved());
    }

    #[test]
    fn winning_works_with_revealed_cells() {
        // Feedback at revealed cells renders absent, but the session
        // still recognizes the spelled-out solution.
        let revealed: RevealedSet = [Position::new(0, 0), Position::new(3, 3)]
            .into_iter()
            .collect();
        let mut session = GameSession::with_revealed(grid(), revealed, AttemptPolicy::default());

        let feedback = session.submit(full_solution()).unwrap();
        assert!(session.is_solved());
        assert_eq!(feedback[0].to_string(), "_GGG");
        assert_eq!(feedback[3].to_string(), "GGG_");
    }

    #[test]
    fn submit_after_solved_is_rejected() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::default());
        session.submit(full_solution()).unwrap();

        let result = session.submit(Submission::single_row(0, GuessRow::parse("mask").unwrap()));
        assert_eq!(result, Err(SessionError::AlreadySolved));
        assert_eq!(session.attempts_made(), 1);
    }

    #[test]
    fn enforced_policy_blocks_at_limit() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::Enforced(2));
        let probe = || Submission::single_row(0, GuessRow::parse("zzzz").unwrap());

        session.submit(probe()).unwrap();
        session.submit(probe()).unwrap();
        assert_eq!(session.attempts_remaining(), 0);

        let result = session.submit(probe());
        assert_eq!(result, Err(SessionError::OutOfAttempts));
        assert_eq!(session.attempts_made(), 2);
        assert!(!session.is_solved());
    }

    #[test]
    fn advisory_policy_allows_overrun() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::Advisory(1));
        let probe = || Submission::single_row(0, GuessRow::parse("zzzz").unwrap());

        session.submit(probe()).unwrap();
        session.submit(probe()).unwrap();
        assert_eq!(session.attempts_made(), 2);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn reveal_answer_surrenders() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::default());
        session.reveal_answer();

        assert!(session.is_solved());
        assert_eq!(session.revealed().len(), 16);
        assert!(session.history().is_empty());

        // Idempotent
        session.reveal_answer();
        assert!(session.is_solved());
    }

    #[test]
    fn exhausted_letters_flow_through() {
        let mut session =
            GameSession::with_revealed(grid(), RevealedSet::new(), AttemptPolicy::default());
        session
            .submit(Submission::single_row(0, GuessRow::parse("mask").unwrap()))
            .unwrap();

        assert_eq!(session.exhausted_letters(), vec![b'a', b'k', b's']);
    }
}
