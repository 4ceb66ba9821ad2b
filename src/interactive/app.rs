//! TUI application state and logic
//!
//! Everything the app reacts to arrives as an [`Action`] on one channel: key
//! presses from the input thread, validator answers from spawned tasks, and
//! ticks. Validator answers carry the [`PendingGuess`] they were asked for,
//! so an answer that outlived its game is recognised and dropped.

use crate::config::{ConfigStore, GameConfig};
use crate::core::{Language, Letter};
use crate::game::{
    GameError, GameEvent, GameSession, GameStatus, PendingGuess, WordVerdict, check_word,
    resolve_target,
};
use crate::output::formatters::{error_message, event_message};
use crate::services::Services;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_MESSAGES: usize = 5;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Delete,
    Submit,
    /// Validator answer for a submission
    Verdict {
        pending: PendingGuess,
        verdict: WordVerdict,
    },
    SwitchLanguage,
    NewGame,
    Quit,
    Tick,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games finished since the app started
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
pub struct App {
    session: GameSession,
    services: Services,
    config: GameConfig,
    store: Box<dyn ConfigStore>,
    checking: Option<PendingGuess>,
    messages: Vec<Message>,
    stats: Statistics,
    should_quit: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Fetch the first target and build the app
    pub async fn new(services: Services, config: GameConfig, store: Box<dyn ConfigStore>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let target = resolve_target(services.provider.as_ref(), config.language).await;
        let session = GameSession::new(target, config.language);

        let mut app = Self {
            session,
            services,
            config,
            store,
            checking: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            action_tx,
            action_rx,
        };
        app.add_message(
            &format!("Guess the word! Playing in {}", app.session.language().name()),
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// A submission is waiting for the validator
    #[must_use]
    pub const fn is_checking(&self) -> bool {
        self.checking.is_some()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sender for feeding actions into the app
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Wait for the next action
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    pub async fn update(&mut self, action: Action) {
        match action {
            Action::Letter(ch) => match Letter::new(ch) {
                Ok(letter) => {
                    if let Err(err) = self.session.add_letter(letter) {
                        self.report(err);
                    }
                }
                Err(err) => debug!(error = %err, "ignoring key"),
            },
            Action::Delete => {
                if let Err(err) = self.session.delete_letter() {
                    self.report(err);
                }
            }
            Action::Submit => self.submit(),
            Action::Verdict { pending, verdict } => self.complete(pending, verdict),
            Action::SwitchLanguage => {
                let language = self.session.language().next();
                self.remember_language(language);
                self.start_game(language).await;
            }
            Action::NewGame => self.start_game(self.session.language()).await,
            Action::Quit => self.should_quit = true,
            Action::Tick => {}
        }
        self.drain_events();
    }

    fn submit(&mut self) {
        if self.checking.is_some() {
            self.add_message("Still checking the last word…", MessageStyle::Info);
            return;
        }
        let pending = match self.session.prepare_submission() {
            Ok(pending) => pending,
            Err(err) => {
                self.report(err);
                return;
            }
        };
        self.checking = Some(pending);

        let validator = self.services.validator.clone();
        let policy = self.config.on_validation_error;
        let language = self.session.language();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let verdict = check_word(validator.as_ref(), pending.word(), language, policy).await;
            let _ = tx.send(Action::Verdict { pending, verdict });
        });
    }

    fn complete(&mut self, pending: PendingGuess, verdict: WordVerdict) {
        if self.checking == Some(pending) {
            self.checking = None;
        }
        match self.session.complete_submission(pending, verdict) {
            Err(GameError::StaleSubmission) => {
                debug!(epoch = %pending.epoch(), row = pending.row(), "discarding stale verdict");
                if pending.epoch() == self.session.epoch() && !self.session.status().is_over() {
                    self.add_message("Row changed, press Enter again", MessageStyle::Info);
                }
            }
            Ok(outcome) => {
                if outcome.status.is_over() {
                    self.stats.total_games += 1;
                    if outcome.status == GameStatus::Won {
                        self.stats.games_won += 1;
                    }
                }
            }
            Err(err) => self.report(err),
        }
    }

    async fn start_game(&mut self, language: Language) {
        let target = resolve_target(self.services.provider.as_ref(), language).await;
        self.session.reset_with_language(target, language);
        self.checking = None;
        self.messages.clear();
        self.add_message(
            &format!("New game in {}", language.name()),
            MessageStyle::Info,
        );
    }

    /// Persist only the language; command-line overrides stay out of the file
    fn remember_language(&mut self, language: Language) {
        self.config.language = language;
        let mut stored = self.store.load();
        stored.language = language;
        if let Err(err) = self.store.save(&stored) {
            warn!(error = %err, "could not save language preference");
        } else {
            info!(%language, "language preference saved");
        }
    }

    fn report(&mut self, err: GameError) {
        if let Some(text) = error_message(err) {
            self.add_message(&text, MessageStyle::Error);
        }
    }

    fn drain_events(&mut self) {
        let attempts = self.session.attempts().len();
        for event in self.session.take_events() {
            debug!(?event, "game event");
            if let Some(text) = event_message(&event, attempts) {
                let style = match event {
                    GameEvent::GameEnded {
                        status: GameStatus::Won,
                        ..
                    } => MessageStyle::Success,
                    _ => MessageStyle::Error,
                };
                self.add_message(&text, style);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Map a key press to an action
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('n') if ctrl => Action::NewGame,
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab => Action::SwitchLanguage,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Delete,
        KeyCode::Char(c) if c.is_alphabetic() && !ctrl => Action::Letter(c),
        _ => return None,
    };
    Some(action)
}

/// Forward key presses and ticks until the app stops listening
fn spawn_input(tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            let action = match event::poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => action_for_key(key),
                    Ok(_) => None,
                    Err(err) => {
                        warn!(error = %err, "could not read terminal event");
                        None
                    }
                },
                Ok(false) => Some(Action::Tick),
                Err(err) => {
                    warn!(error = %err, "could not poll terminal");
                    Some(Action::Tick)
                }
            };
            if let Some(action) = action
                && tx.send(action).is_err()
            {
                break;
            }
        }
    })
}

/// Restore the terminal before the default panic output
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering.
pub async fn run_tui(mut app: App) -> Result<()> {
    install_panic_hook();
    let mut terminal = init()?;

    let res = run_app(&mut terminal, &mut app).await;

    restore()?;
    terminal.show_cursor()?;
    res
}

async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let _input = spawn_input(app.sender());

    while !app.should_quit() {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        match app.next_action().await {
            Some(action) => app.update(action).await,
            None => break,
        }
    }

    Ok(())
}
