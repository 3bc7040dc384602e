//! Printers for command results

use super::formatters::{letter_rail, paint_guess_row};
use crate::commands::{CubeSummary, ScoreResult};
use crate::core::{FeedbackRow, GRID_SIZE, Position, Submission};
use crate::session::GameSession;
use colored::Colorize;

/// Print the board with revealed letters shown and hidden cells dotted
pub fn print_board(session: &GameSession) {
    println!("\n{}", "─".repeat(40).cyan());
    for row in 0..GRID_SIZE {
        let cells: Vec<String> = (0..GRID_SIZE)
            .map(|col| {
                session.revealed_letter(Position::new(row, col)).map_or_else(
                    || "\u{b7}".bright_black().to_string(),
                    |letter| {
                        (letter as char)
                            .to_ascii_uppercase()
                            .to_string()
                            .bright_green()
                            .bold()
                            .to_string()
                    },
                )
            })
            .collect();
        println!("   {}", cells.join(" "));
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print feedback for one scored submission, row by row
pub fn print_feedback(submission: &Submission, feedback: &[FeedbackRow; GRID_SIZE]) {
    println!();
    for row in 0..GRID_SIZE {
        println!(
            "   {}   {}   {}",
            paint_guess_row(submission.row(row), &feedback[row]),
            feedback[row].emoji_string(),
            feedback[row].to_string().bright_black(),
        );
    }
}

/// Print the letter rail with exhausted letters struck out
pub fn print_letter_rail(exhausted: &[u8]) {
    println!("\n   {}", letter_rail(exhausted));
}

/// Print the result of one-shot scoring
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "FEEDBACK".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    print_feedback(&result.submission, &result.feedback);

    if result.winning {
        println!(
            "\n{}",
            "✅ The submission spells out the full solution!"
                .green()
                .bold()
        );
    }

    if result.exhausted.is_empty() {
        println!("\n   Spent letters: {}", "none".bright_black());
    } else {
        let letters: Vec<String> = result
            .exhausted
            .iter()
            .map(|&b| (b as char).to_ascii_uppercase().to_string())
            .collect();
        println!(
            "\n   Spent letters: {}",
            letters.join(" ").bright_black().strikethrough()
        );
    }
}

/// Print a cube collection summary
pub fn print_cube_summary(summary: &CubeSummary, show: bool) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "CUBE COLLECTION".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Source:  {}", summary.source.bright_white());
    println!(
        "   Cubes:   {}",
        summary.count.to_string().bright_green().bold()
    );
    if summary.skipped > 0 {
        println!(
            "   Skipped: {} malformed",
            summary.skipped.to_string().yellow()
        );
    }

    if show {
        for (i, cube) in summary.cubes.iter().enumerate() {
            println!("\n   {}", format!("#{}", i + 1).bright_black());
            for row in 0..GRID_SIZE {
                let spaced: Vec<String> = cube
                    .row_string(row)
                    .chars()
                    .map(|c| c.to_ascii_uppercase().to_string())
                    .collect();
                println!("   {}", spaced.join(" "));
            }
        }
        println!();
    }
}
