//! Colored terminal output for line mode and one-shot commands

use super::formatters::{attempts_label, keyboard_rows, share_text};
use crate::commands::{CheckResult, StatsReport, StatsSource};
use crate::core::{Classification, Feedback, Language, Letter, WORD_LENGTH, Word};
use crate::game::{GameSession, GameStatus, KeyStates, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

/// A letter tile colored by its classification
#[must_use]
pub fn paint_tile(letter: Letter, classification: Option<Classification>) -> ColoredString {
    let tile = format!(" {letter} ");
    match classification {
        Some(Classification::Correct) => tile.black().on_green().bold(),
        Some(Classification::Present) => tile.black().on_yellow().bold(),
        Some(Classification::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A submitted word as a row of colored tiles
#[must_use]
pub fn paint_guess(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.classifications())
        .map(|(&letter, &c)| paint_tile(letter, Some(c)).to_string())
        .collect()
}

pub fn print_banner(language: Language, offline: bool) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {}  {}",
        "WORDLE CLICK".bright_cyan().bold(),
        language.name().bright_white()
    );
    println!("{}", "═".repeat(40).cyan());
    if offline {
        println!("{}", "Offline: using the built-in word lists".bright_black());
    }
    println!("\nGuess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.");
    println!(
        "{}\n",
        "Commands: :new  :lang <en|es>  :quit".bright_black()
    );
}

/// Submitted rows, then the row being typed
pub fn print_board(session: &GameSession) {
    println!();
    for guess in session.attempts() {
        println!("  {}", paint_guess(guess.word(), guess.feedback()));
    }
    if !session.status().is_over() && session.current_col() > 0 {
        let typed: String = session
            .row(session.current_row())
            .iter()
            .flatten()
            .map(|&l| paint_tile(l, None).to_string())
            .collect();
        println!("  {typed}");
    }
    println!();
}

pub fn print_keyboard(keys: &KeyStates, language: Language) {
    for (indent, row) in keyboard_rows(language).iter().enumerate() {
        let painted: Vec<String> = row
            .iter()
            .map(|&l| paint_tile(l, keys.get(l)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), painted.join(""));
    }
    println!();
}

pub fn print_game_over(session: &GameSession) {
    let headline = match session.status() {
        GameStatus::Won => format!("Solved in {}!", attempts_label(session))
            .green()
            .bold(),
        GameStatus::Lost | GameStatus::Playing => {
            format!("The word was {}", session.target()).red().bold()
        }
    };
    println!("{}", "─".repeat(40).cyan());
    println!("  {headline}");
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n{}\n",
        share_text(session.attempts(), session.status(), session.language())
    );
}

pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n  {}  {}",
        paint_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "  {} correct, {} present against {}\n",
        result.feedback.count_correct().to_string().green().bold(),
        result.feedback.count_present().to_string().yellow().bold(),
        result.target.to_string().bright_white().bold()
    );
}

pub fn print_stats(report: &StatsReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {}",
        "WORD LIST".bright_cyan().bold(),
        report.language.name().bright_white()
    );
    println!("{}", "═".repeat(40).cyan());
    println!(
        "   Words:    {}",
        report.total_words.to_string().bright_yellow().bold()
    );
    match &report.source {
        StatsSource::Api { url, version } => {
            println!("   Source:   {url}");
            println!("   Version:  {version}");
        }
        StatsSource::Offline => println!("   Source:   built-in list"),
    }
    println!();
}
