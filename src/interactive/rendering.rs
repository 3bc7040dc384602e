//! ratatui widgets for the play screen.
//!
//! Board, letter rail, history and status panes.

use super::app::{App, CellKind, InputMode, MessageStyle};
use crate::core::{FeedbackRow, FeedbackSymbol, GRID_SIZE, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Draws the whole frame for one tick of the play loop.
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Board on the left, history and messages on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board + letters
            Constraint::Percentage(45), // History + messages
        ])
        .split(chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(main_chunks[0]);

    render_board(f, app, left_chunks[0]);
    render_letter_rail(f, app, left_chunks[1]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    render_history(f, app, right_chunks[0]);
    render_messages(f, app, right_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORD CUBE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(kind: CellKind) -> Style {
    match kind {
        CellKind::Revealed => Style::default().fg(Color::Black).bg(Color::Green),
        CellKind::Scored(FeedbackSymbol::Correct) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellKind::Scored(FeedbackSymbol::LineMatch) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellKind::Scored(FeedbackSymbol::GridMatch) => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        CellKind::Scored(FeedbackSymbol::Absent) => Style::default().fg(Color::DarkGray),
        CellKind::Draft => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellKind::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..GRID_SIZE {
        let mut spans = vec![Span::raw("   ")];
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            let view = app.cell_view(pos);
            let text = format!(" {} ", view.letter.unwrap_or('\u{b7}'));

            let mut style = cell_style(view.kind);
            if pos == app.cursor && app.input_mode == InputMode::Editing {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let turn = app.session.attempts_made();
    let limit = app.session.policy().limit();
    lines.push(Line::from(Span::styled(
        format!("   Attempts: {turn}/{limit}"),
        Style::default().fg(Color::DarkGray),
    )));

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board ({}) ", app.difficulty))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_letter_rail(f: &mut Frame, app: &App, area: Rect) {
    let exhausted = app.exhausted();

    let spans: Vec<Span> = (b'a'..=b'z')
        .map(|b| {
            let letter = format!("{} ", (b as char).to_ascii_uppercase());
            if exhausted.contains(&b) {
                Span::styled(
                    letter,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                Span::styled(letter, Style::default().fg(Color::White))
            }
        })
        .collect();

    let rail = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(rail, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.history().len();
    let history_items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .rev()
        .take(6)
        .enumerate()
        .map(|(i, attempt)| {
            let rows: Vec<String> = attempt
                .feedback()
                .iter()
                .map(FeedbackRow::emoji_string)
                .collect();
            ListItem::new(format!("{}: {}", total - i, rows.join(" ")))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Editing => "Mode: Editing",
        InputMode::Solved => "Mode: Solved",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!(
        "Attempts: {}/{}",
        app.session.attempts_made(),
        app.session.policy().limit()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Editing => "Enter: Submit | Ctrl-N: New | Ctrl-R: Reveal | Esc: Quit",
        InputMode::Solved => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
