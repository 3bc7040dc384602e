//! Simple line-based game mode
//!
//! Plays full games in the terminal without the TUI.

use crate::core::{FeedbackRow, GRID_SIZE, GuessRow, Submission};
use crate::cubes::{self, CubeSet};
use crate::output::display;
use crate::session::{AttemptPolicy, Difficulty, GameSession, SessionError};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// What one row prompt produced
enum RowInput {
    Row(GuessRow),
    ShowBoard,
    ShowLetters,
    NewGame,
    Reveal,
    Quit,
}

/// Run the line-based game mode
///
/// # Errors
///
/// Returns an error if no cubes are available or if there's an I/O error
/// reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(
    difficulty: Difficulty,
    policy: AttemptPolicy,
    cube_file: Option<&Path>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Cube - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Four 4-letter words are hidden in a 4x4 grid. Fill it in!");
    println!("Each turn, type up to four rows; press Enter to leave a row blank.");
    println!("Use '.' or '_' inside a row for cells you want to skip.\n");
    println!("Feedback per cell:");
    println!("  {} exact letter", "G".bright_green().bold());
    println!("  {} belongs elsewhere in this row or column", "Y".bright_yellow().bold());
    println!("  {} belongs elsewhere on the grid", "P".bright_magenta().bold());
    println!("  {} no use here", "_".bright_black());
    println!("\nCommands: 'board', 'letters', 'reveal', 'new', 'quit'\n");

    let cube_set =
        cubes::cube_source(cube_file).map_err(|e| format!("Failed to load cubes: {e}"))?;
    if cube_set.is_empty() {
        return Err("No valid cubes available".to_string());
    }

    let mut rng = rand::rng();
    let mut session = start_session(&cube_set, difficulty, policy, &mut rng)?;
    display::print_board(&session);

    'game: loop {
        let turn = session.attempts_made() + 1;
        println!("\n────────────────────────────────────────────────────────────");
        if turn <= session.policy().limit() {
            println!("Attempt {turn} of {}", session.policy().limit());
        } else {
            println!("Attempt {turn} (past the usual limit, keep going)");
        }

        let mut rows = [GuessRow::EMPTY; GRID_SIZE];
        let mut row = 0;
        while row < GRID_SIZE {
            match prompt_row(row)? {
                RowInput::Row(guess) => {
                    rows[row] = guess;
                    row += 1;
                }
                RowInput::ShowBoard => display::print_board(&session),
                RowInput::ShowLetters => display::print_letter_rail(&session.exhausted_letters()),
                RowInput::NewGame => {
                    session = start_session(&cube_set, difficulty, policy, &mut rng)?;
                    println!("\n🔄 New puzzle!");
                    display::print_board(&session);
                    continue 'game;
                }
                RowInput::Reveal => {
                    session.reveal_answer();
                    println!("\nThe solution was:");
                    display::print_board(&session);
                    if ask_play_again()? {
                        session = start_session(&cube_set, difficulty, policy, &mut rng)?;
                        println!("\n🔄 New puzzle!");
                        display::print_board(&session);
                        continue 'game;
                    }
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                RowInput::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let submission = Submission::new(rows);
        if submission.rows().iter().all(GuessRow::is_blank) {
            println!("{}", "Nothing entered, attempt not scored.".yellow());
            continue 'game;
        }

        match session.submit(submission) {
            Ok(feedback) => {
                display::print_feedback(&submission, &feedback);
                display::print_letter_rail(&session.exhausted_letters());

                if session.is_solved() {
                    print_victory(&session);
                    if ask_play_again()? {
                        session = start_session(&cube_set, difficulty, policy, &mut rng)?;
                        println!("\n🔄 New puzzle!");
                        display::print_board(&session);
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                } else if session.policy().is_enforced() && session.attempts_remaining() == 0 {
                    println!(
                        "\n{}",
                        format!("❌ Out of attempts after {} tries", session.attempts_made())
                            .red()
                            .bold()
                    );
                    session.reveal_answer();
                    println!("\nThe solution was:");
                    display::print_board(&session);
                    if ask_play_again()? {
                        session = start_session(&cube_set, difficulty, policy, &mut rng)?;
                        println!("\n🔄 New puzzle!");
                        display::print_board(&session);
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Err(SessionError::OutOfAttempts) => {
                println!("{}", "No attempts remaining.".red());
                return Ok(());
            }
            Err(SessionError::AlreadySolved) => {
                return Ok(());
            }
        }
    }
}

fn start_session<R: rand::Rng + ?Sized>(
    cubes: &CubeSet,
    difficulty: Difficulty,
    policy: AttemptPolicy,
    rng: &mut R,
) -> Result<GameSession, String> {
    let grid = cubes
        .choose(rng)
        .cloned()
        .ok_or_else(|| "No cubes available".to_string())?;
    Ok(GameSession::new(grid, difficulty, policy, rng))
}

fn prompt_row(row: usize) -> Result<RowInput, String> {
    loop {
        let input = get_user_input(&format!("Row {}", row + 1))?;

        match input.to_lowercase().as_str() {
            "" => return Ok(RowInput::Row(GuessRow::EMPTY)),
            "quit" | "q" | "exit" => return Ok(RowInput::Quit),
            "new" => return Ok(RowInput::NewGame),
            "reveal" => return Ok(RowInput::Reveal),
            "board" => return Ok(RowInput::ShowBoard),
            "letters" => return Ok(RowInput::ShowLetters),
            text => match GuessRow::parse(text) {
                Ok(guess) => return Ok(RowInput::Row(guess)),
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
        }
    }
}

fn print_victory(session: &GameSession) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  C U B E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let attempts = session.attempts_made();
    let performance = match attempts {
        1 => ("🏆 Perfect!", "Solved it in one!"),
        2 => ("⭐ Excellent!", "Two attempts!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "attempt" } else { "attempts" }
    );

    println!("\n  Attempt history:");
    for (i, attempt) in session.history().iter().enumerate() {
        let rows: Vec<String> = attempt.feedback().iter().map(FeedbackRow::emoji_string).collect();
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            rows.join("  ")
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Prompts on stdout and reads one trimmed line from stdin.
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
