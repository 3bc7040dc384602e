//! Interactive play screen state and event loop.

use crate::core::{FeedbackSymbol, GRID_SIZE, GuessRow, Position, Submission};
use crate::cubes::CubeSet;
use crate::session::{AttemptPolicy, Difficulty, GameSession};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// All state behind the play screen.
pub struct App {
    pub cubes: CubeSet,
    pub difficulty: Difficulty,
    pub policy: AttemptPolicy,
    pub session: GameSession,
    pub draft: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
    pub cursor: Position,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: rand::rngs::ThreadRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Solved,
}

/// How one board cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Revealed,
    Scored(FeedbackSymbol),
    Draft,
    Empty,
}

#[derive(Debug, Clone, Copy)]
pub struct CellView {
    pub letter: Option<char>,
    pub kind: CellKind,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub attempt_distribution: [usize; 7],
}

impl App {
    /// Create the app and deal the first puzzle
    ///
    /// # Errors
    /// Returns an error if the cube set is empty.
    pub fn new(
        cubes: CubeSet,
        difficulty: Difficulty,
        policy: AttemptPolicy,
    ) -> Result<Self, String> {
        let mut rng = rand::rng();
        let grid = cubes
            .choose(&mut rng)
            .cloned()
            .ok_or_else(|| "No valid cubes available".to_string())?;
        let session = GameSession::new(grid, difficulty, policy, &mut rng);
        let cursor = first_editable(&session);

        Ok(Self {
            cubes,
            difficulty,
            policy,
            session,
            draft: [[None; GRID_SIZE]; GRID_SIZE],
            cursor,
            messages: vec![
                Message {
                    text: "Welcome! Fill the grid; revealed cells are already placed.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, '.' to skip a cell, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Editing,
            rng,
        })
    }

    /// How to draw the cell at `pos`
    #[must_use]
    pub fn cell_view(&self, pos: Position) -> CellView {
        if let Some(letter) = self.session.revealed_letter(pos) {
            return CellView {
                letter: Some((letter as char).to_ascii_uppercase()),
                kind: CellKind::Revealed,
            };
        }

        match self.draft[pos.row][pos.col] {
            Some(letter) => {
                let kind = self
                    .last_scored_symbol(pos, letter)
                    .map_or(CellKind::Draft, CellKind::Scored);
                CellView {
                    letter: Some((letter as char).to_ascii_uppercase()),
                    kind,
                }
            }
            None => CellView {
                letter: None,
                kind: CellKind::Empty,
            },
        }
    }

    /// Feedback for a draft letter, if the latest attempt scored exactly
    /// this letter at this position
    fn last_scored_symbol(&self, pos: Position, letter: u8) -> Option<FeedbackSymbol> {
        let attempt = self.session.history().last()?;
        (attempt.submission().cell(pos) == Some(letter))
            .then(|| attempt.feedback()[pos.row].symbol(pos.col))
    }

    pub fn type_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        if let Some(pos) = self.editable_at_or_after(self.cursor) {
            self.draft[pos.row][pos.col] = Some(c.to_ascii_lowercase() as u8);
            self.cursor = next_position(pos).unwrap_or(pos);
        }
    }

    /// Leave the cell blank and move on
    pub fn skip_cell(&mut self) {
        if let Some(pos) = self.editable_at_or_after(self.cursor) {
            self.draft[pos.row][pos.col] = None;
            self.cursor = next_position(pos).unwrap_or(pos);
        }
    }

    /// Clear the nearest filled cell at or before the cursor
    pub fn erase_letter(&mut self) {
        let mut pos = Some(self.cursor);
        while let Some(p) = pos {
            if !self.session.revealed().contains(p) && self.draft[p.row][p.col].is_some() {
                self.draft[p.row][p.col] = None;
                self.cursor = p;
                return;
            }
            pos = prev_position(p);
        }
    }

    /// Clear the cell under the cursor without moving
    pub fn clear_cell(&mut self) {
        if !self.session.revealed().contains(self.cursor) {
            self.draft[self.cursor.row][self.cursor.col] = None;
        }
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.cursor.row.saturating_add_signed(d_row).min(GRID_SIZE - 1);
        let col = self.cursor.col.saturating_add_signed(d_col).min(GRID_SIZE - 1);
        self.cursor = Position::new(row, col);
    }

    /// Jump to the start of the next row
    pub fn next_row(&mut self) {
        let row = (self.cursor.row + 1) % GRID_SIZE;
        let start = Position::new(row, 0);
        self.cursor = self.editable_at_or_after(start).unwrap_or(start);
    }

    /// Score the draft as one submission
    pub fn submit_draft(&mut self) {
        let mut rows = [GuessRow::EMPTY; GRID_SIZE];
        for row in 0..GRID_SIZE {
            let mut cells = [None; GRID_SIZE];
            for col in 0..GRID_SIZE {
                let pos = Position::new(row, col);
                // Revealed letters ride along so a completed draft wins
                cells[col] = self
                    .session
                    .revealed_letter(pos)
                    .or(self.draft[row][col]);
            }
            rows[row] = GuessRow::new(cells);
        }
        let submission = Submission::new(rows);

        if submission.rows().iter().all(GuessRow::is_blank) {
            self.add_message("Nothing to submit yet!", MessageStyle::Error);
            return;
        }

        match self.session.submit(submission) {
            Ok(feedback) => {
                if self.session.is_solved() {
                    self.finish_win();
                } else if self.policy.is_enforced() && self.session.attempts_remaining() == 0 {
                    self.finish_loss();
                } else {
                    let mut exact = 0;
                    let mut in_line = 0;
                    let mut elsewhere = 0;
                    for row in &feedback {
                        for &symbol in row.symbols() {
                            match symbol {
                                FeedbackSymbol::Correct => exact += 1,
                                FeedbackSymbol::LineMatch => in_line += 1,
                                FeedbackSymbol::GridMatch => elsewhere += 1,
                                FeedbackSymbol::Absent => {}
                            }
                        }
                    }
                    self.add_message(
                        &format!("{exact} exact, {in_line} in line, {elsewhere} elsewhere"),
                        MessageStyle::Info,
                    );
                    if self.session.attempts_remaining() == 0 {
                        self.add_message(
                            "Past the usual attempt limit, keep going!",
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_win(&mut self) {
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        let attempts = self.session.attempts_made();
        if attempts < self.stats.attempt_distribution.len() {
            self.stats.attempt_distribution[attempts] += 1;
        }

        self.input_mode = InputMode::Solved;
        let celebration = match attempts {
            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two attempts! 🔥",
            3 => "✨ SPLENDID! Three attempts! ✨",
            4 => "👏 GREAT JOB! Four attempts! 👏",
            5 => "🎉 NICE WORK! Five attempts! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    fn finish_loss(&mut self) {
        self.stats.total_games += 1;
        self.session.reveal_answer();
        self.input_mode = InputMode::Solved;
        self.add_message("❌ Out of attempts! The answer is shown.", MessageStyle::Error);
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    /// Show the answer and end the round
    pub fn reveal_answer(&mut self) {
        self.stats.total_games += 1;
        self.session.reveal_answer();
        self.input_mode = InputMode::Solved;
        self.add_message("Answer revealed.", MessageStyle::Info);
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match self.cubes.choose(&mut self.rng).cloned() {
            Some(grid) => {
                self.session = GameSession::new(grid, self.difficulty, self.policy, &mut self.rng);
                self.draft = [[None; GRID_SIZE]; GRID_SIZE];
                self.cursor = first_editable(&self.session);
                self.input_mode = InputMode::Editing;
                self.messages.clear();
                self.add_message("New puzzle! Fill the grid.", MessageStyle::Info);
            }
            None => self.add_message("No cubes available!", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Cap the log at five entries
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Guessed letters with no hint value left
    #[must_use]
    pub fn exhausted(&self) -> Vec<u8> {
        self.session.exhausted_letters()
    }

    fn editable_at_or_after(&self, from: Position) -> Option<Position> {
        let mut pos = Some(from);
        while let Some(p) = pos {
            if !self.session.revealed().contains(p) {
                return Some(p);
            }
            pos = next_position(p);
        }
        None
    }
}

fn first_editable(session: &GameSession) -> Position {
    Position::all()
        .find(|&p| !session.revealed().contains(p))
        .unwrap_or(Position::new(0, 0))
}

fn next_position(pos: Position) -> Option<Position> {
    if pos.col + 1 < GRID_SIZE {
        Some(Position::new(pos.row, pos.col + 1))
    } else if pos.row + 1 < GRID_SIZE {
        Some(Position::new(pos.row + 1, 0))
    } else {
        None
    }
}

fn prev_position(pos: Position) -> Option<Position> {
    if pos.col > 0 {
        Some(Position::new(pos.row, pos.col - 1))
    } else if pos.row > 0 {
        Some(Position::new(pos.row - 1, GRID_SIZE - 1))
    } else {
        None
    }
}

/// Takes over the terminal and runs the play screen until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into or out of raw mode,
/// or on any I/O failure while drawing or reading events.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events, Windows reports both
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Solved => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In solved mode, ignore other keys
                    }
                },
                InputMode::Editing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.reveal_answer();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Left => app.move_cursor(0, -1),
                    KeyCode::Right => app.move_cursor(0, 1),
                    KeyCode::Up => app.move_cursor(-1, 0),
                    KeyCode::Down => app.move_cursor(1, 0),
                    KeyCode::Tab => app.next_row(),
                    KeyCode::Backspace => app.erase_letter(),
                    KeyCode::Delete => app.clear_cell(),
                    KeyCode::Enter => app.submit_draft(),
                    KeyCode::Char(' ' | '.') => app.skip_cell(),
                    KeyCode::Char(c) => app.type_letter(c),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
