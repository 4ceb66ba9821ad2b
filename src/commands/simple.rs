//! Simple line mode
//!
//! One guess per line, colored rows printed after each submission. Runs on the
//! same session and collaborators as the TUI.

use crate::config::GameConfig;
use crate::core::{Language, Letter};
use crate::game::{Game, GameError, GameSession, MAX_ATTEMPTS};
use crate::output::formatters::{error_message, event_message};
use crate::output::{print_banner, print_board, print_game_over, print_keyboard};
use crate::services::Services;
use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Quit,
    NewGame,
    /// `:lang` alone switches to the other language
    SwitchLanguage(Option<Language>),
    Guess(String),
    Empty,
    Unknown(String),
}

#[must_use]
pub fn parse_line(line: &str) -> LineInput {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return if line.is_empty() {
            LineInput::Empty
        } else {
            LineInput::Guess(line.to_string())
        };
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit" | "exit"), None) => LineInput::Quit,
        (Some("n" | "new"), None) => LineInput::NewGame,
        (Some("lang"), None) => LineInput::SwitchLanguage(None),
        (Some("lang"), Some(code)) => code
            .parse()
            .map_or_else(|_| LineInput::Unknown(line.to_string()), |l| {
                LineInput::SwitchLanguage(Some(l))
            }),
        _ => LineInput::Unknown(line.to_string()),
    }
}

/// Replace the current row with `text`
///
/// # Errors
///
/// Returns a message for the player when a character is not a letter of the
/// session's alphabet, the text is too long, or the game is over.
pub fn type_guess(session: &mut GameSession, text: &str) -> Result<(), String> {
    while session.delete_letter().is_ok() {}

    for ch in text.chars() {
        let letter = Letter::new(ch).map_err(|e| e.to_string())?;
        session.add_letter(letter).map_err(|e| match e {
            GameError::RowFull => GameError::IncompleteGuess.to_string(),
            other => other.to_string(),
        })?;
    }
    Ok(())
}

/// Print what the session reported since the last call
fn report_events(session: &mut GameSession) {
    let attempts = session.attempts().len();
    for event in session.take_events() {
        debug!(?event, "game event");
        if let Some(message) = event_message(&event, attempts) {
            println!("  {}", message.bright_white().bold());
        }
    }
}

fn report_error(message: &str) {
    println!("  {} {}", "✗".red().bold(), message.red());
}

fn prompt(session: &GameSession) -> io::Result<()> {
    if session.status().is_over() {
        print!("{} ", "Play again? (:new / :quit) >".bright_black());
    } else {
        print!(
            "Guess {}/{MAX_ATTEMPTS} > ",
            (session.attempts().len() + 1).to_string().bright_cyan().bold()
        );
    }
    io::stdout().flush()
}

/// Run the simple line mode until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub async fn run_simple(services: Services, config: &GameConfig) -> io::Result<()> {
    let mut game = Game::start(services, config.on_validation_error, config.language).await;
    print_banner(config.language, config.offline);
    print_keyboard(game.session().keys(), game.session().language());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(game.session())?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match parse_line(&line) {
            LineInput::Quit => break,
            LineInput::Empty => {}
            LineInput::Unknown(input) => report_error(&format!("Unknown command {input}")),
            LineInput::NewGame => {
                game.new_game().await;
                println!("\n  {}\n", "New game started!".bright_green());
                print_keyboard(game.session().keys(), game.session().language());
            }
            LineInput::SwitchLanguage(language) => {
                let language = language.unwrap_or_else(|| game.session().language().next());
                game.switch_language(language).await;
                print_banner(language, config.offline);
                print_keyboard(game.session().keys(), language);
            }
            LineInput::Guess(text) => {
                let submitted = match type_guess(game.session_mut(), &text) {
                    Ok(()) => game.submit().await.map_err(error_message),
                    Err(message) => Err(Some(message)),
                };
                if let Err(Some(message)) = &submitted {
                    report_error(message);
                }
                report_events(game.session_mut());

                if submitted.is_ok() {
                    print_board(game.session());
                    if game.session().status().is_over() {
                        print_game_over(game.session());
                    } else {
                        print_keyboard(game.session().keys(), game.session().language());
                    }
                }
            }
        }
    }

    println!("\n{}\n", "Thanks for playing!".bright_cyan());
    Ok(())
}
