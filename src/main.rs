//! Word Cube - CLI
//!
//! 4x4 word puzzle with grid-aware hint feedback, playable in a TUI or a
//! plain line mode, plus one-shot scoring for scripted use.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordcube::{
    commands::{ScoreConfig, run_simple, score_submission, summarize_cubes},
    cubes::cube_source,
    output::{print_cube_summary, print_score_result},
    session::{AttemptPolicy, Difficulty},
};

#[derive(Parser)]
#[command(
    name = "wordcube",
    about = "4x4 word cube puzzle with grid-aware hint feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (8 revealed), medium (6), hard (4), expert (0)
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Attempt limit (advisory unless --strict)
    #[arg(short = 'a', long, global = true, default_value_t = AttemptPolicy::DEFAULT_LIMIT)]
    attempts: usize,

    /// Reject submissions once the attempt limit is reached
    #[arg(long, global = true)]
    strict: bool,

    /// Path to a cube file (defaults to the embedded cubes)
    #[arg(short = 'f', long, global = true)]
    cube_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score one submission against an explicit grid
    Score {
        /// Four comma-separated row words, e.g. mask,icon,mine,edge
        #[arg(short, long)]
        grid: String,

        /// Guess rows top to bottom ('.' marks blank cells)
        rows: Vec<String>,

        /// Revealed cells as row,col pairs separated by ';'
        #[arg(short, long)]
        revealed: Option<String>,

        /// Prior submission of four comma-separated rows (repeatable)
        #[arg(short, long)]
        prior: Vec<String>,
    },

    /// Inspect a cube collection
    Cubes {
        /// Print every cube (spoils the grids)
        #[arg(short, long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let difficulty: Difficulty = cli
        .difficulty
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let policy = if cli.strict {
        AttemptPolicy::Enforced(cli.attempts)
    } else {
        AttemptPolicy::Advisory(cli.attempts)
    };

    // No subcommand means interactive play
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(difficulty, policy, cli.cube_file.as_deref()),
        Commands::Simple => {
            run_simple(difficulty, policy, cli.cube_file.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score {
            grid,
            rows,
            revealed,
            prior,
        } => run_score_command(grid, rows, revealed, prior),
        Commands::Cubes { show } => run_cubes_command(cli.cube_file.as_deref(), show),
    }
}

fn run_play_command(
    difficulty: Difficulty,
    policy: AttemptPolicy,
    cube_file: Option<&Path>,
) -> Result<()> {
    use wordcube::interactive::{App, run_tui};

    let cubes = cube_source(cube_file)?;
    let app = App::new(cubes, difficulty, policy).map_err(|e| anyhow::anyhow!(e))?;
    run_tui(app)
}

fn run_score_command(
    grid: String,
    rows: Vec<String>,
    revealed: Option<String>,
    prior: Vec<String>,
) -> Result<()> {
    let config = ScoreConfig {
        grid,
        rows,
        revealed,
        prior,
    };
    let result = score_submission(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_cubes_command(cube_file: Option<&Path>, show: bool) -> Result<()> {
    let summary = summarize_cubes(cube_file).map_err(|e| anyhow::anyhow!(e))?;
    print_cube_summary(&summary, show);
    Ok(())
}
