//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Classification, Letter, WORD_LENGTH};
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS};
use crate::output::formatters::{attempts_label, keyboard_rows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(4),                         // Messages
            Constraint::Length(1),                      // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app.session(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

const fn tile_style(classification: Option<Classification>) -> Style {
    let (fg, bg) = match classification {
        Some(Classification::Correct) => (Color::Black, Color::Green),
        Some(Classification::Present) => (Color::Black, Color::Yellow),
        Some(Classification::Absent) => (Color::White, Color::DarkGray),
        None => (Color::White, Color::Reset),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: Option<Letter>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
    Span::styled(text, style)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let status = match session.status() {
        GameStatus::Playing if app.is_checking() => "checking…",
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORDLE CLICK",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ·  {}  ·  ", session.language().name())),
        Span::styled(
            attempts_label(session),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("  ·  {status}"), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    (0..MAX_ATTEMPTS)
        .map(|row| {
            let tiles: Vec<Span> = match session.attempts().get(row) {
                Some(guess) => guess
                    .word()
                    .letters()
                    .iter()
                    .zip(guess.feedback().classifications())
                    .map(|(&l, &c)| tile(Some(l), tile_style(Some(c))))
                    .collect(),
                None => session
                    .row(row)
                    .iter()
                    .map(|&cell| {
                        let mut style = tile_style(None);
                        if row == session.current_row() && cell.is_none() {
                            style = style.fg(Color::DarkGray);
                        }
                        tile(cell, style)
                    })
                    .collect(),
            };
            Line::from(tiles)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app.session()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {WORD_LENGTH} letters "))
                .title_alignment(Alignment::Center),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, session: &GameSession, area: Rect) {
    let keys = session.keys();
    let lines: Vec<Line> = keyboard_rows(session.language())
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|l| tile(Some(l), tile_style(keys.get(l))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages()
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

    let stats = app.stats();
    let title = format!(" Messages · won {}/{} ", stats.games_won, stats.total_games);
    let messages_list = List::new(messages).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session().status().is_over() {
        "Ctrl-N: New game | Tab: Switch language | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Tab: Switch language | Ctrl-N: New game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
