//! Grid feedback engine
//!
//! Pure scoring logic for the puzzle: the credit ledger, the three-pass
//! cell classifier with the revealed-position override, the win check,
//! and the absent-letter tracker. Everything here is a function of its
//! inputs; session flow lives in [`crate::session`].

mod classify;
mod exhausted;
mod ledger;

pub use classify::{is_winning, score};
pub use exhausted::{exhausted_letters, is_letter_exhausted};
pub use ledger::CreditLedger;
