//! Colored string builders for boards and feedback rows

use crate::core::{FeedbackRow, FeedbackSymbol, GRID_SIZE, GuessRow};
use colored::{ColoredString, Colorize};

/// Paint one cell's letter with its feedback color
#[must_use]
pub fn paint_cell(letter: Option<u8>, symbol: FeedbackSymbol) -> ColoredString {
    let text = letter.map_or_else(
        || "\u{b7}".to_string(),
        |b| (b as char).to_ascii_uppercase().to_string(),
    );

    match symbol {
        FeedbackSymbol::Correct => text.bright_green().bold(),
        FeedbackSymbol::LineMatch => text.bright_yellow().bold(),
        FeedbackSymbol::GridMatch => text.bright_magenta().bold(),
        FeedbackSymbol::Absent => text.bright_black(),
    }
}

/// Paint a guessed row with per-cell feedback colors
#[must_use]
pub fn paint_guess_row(guess: &GuessRow, feedback: &FeedbackRow) -> String {
    (0..GRID_SIZE)
        .map(|col| paint_cell(guess.cell(col), feedback.symbol(col)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the A-Z rail, dimming letters with no hint value left
#[must_use]
pub fn letter_rail(exhausted: &[u8]) -> String {
    (b'a'..=b'z')
        .map(|b| {
            let letter = (b as char).to_ascii_uppercase().to_string();
            if exhausted.contains(&b) {
                letter.bright_black().strikethrough().to_string()
            } else {
                letter.bright_white().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_cell_blank_shows_dot() {
        colored::control::set_override(false);
        let cell = paint_cell(None, FeedbackSymbol::Absent);
        assert_eq!(cell.to_string(), "\u{b7}");
    }

    #[test]
    fn paint_cell_uppercases_letter() {
        colored::control::set_override(false);
        let cell = paint_cell(Some(b'm'), FeedbackSymbol::Correct);
        assert_eq!(cell.to_string(), "M");
    }

    #[test]
    fn paint_guess_row_spaces_cells() {
        colored::control::set_override(false);
        let guess = GuessRow::parse("m.sk").unwrap();
        let feedback = FeedbackRow::parse("G_YP").unwrap();
        assert_eq!(paint_guess_row(&guess, &feedback), "M \u{b7} S K");
    }

    #[test]
    fn letter_rail_covers_alphabet() {
        colored::control::set_override(false);
        let rail = letter_rail(&[b'a', b'z']);
        assert_eq!(rail.split(' ').count(), 26);
        assert!(rail.starts_with('A'));
        assert!(rail.ends_with('Z'));
    }
}
