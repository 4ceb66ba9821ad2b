//! Wordle Click - CLI
//!
//! Daily five-letter word puzzle with TUI and line modes, in English and Spanish.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_click::{
    commands::{check_guess, collect_stats, run_simple},
    config::{ConfigStore, FileConfigStore, GameConfig, ValidationPolicy},
    core::Language,
    logging::{self, LogTarget},
    output::{print_check_result, print_stats},
    services::Services,
};

#[derive(Parser)]
#[command(
    name = "wordle_click",
    about = "Guess the daily five-letter word in six tries, in English or Spanish",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: es or en (default from config, otherwise es)
    #[arg(short, long, global = true, value_enum)]
    lang: Option<Language>,

    /// Use the built-in word lists instead of the API
    #[arg(long, global = true)]
    offline: bool,

    /// Base URL of the word API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// What to do when the word check fails
    #[arg(long, global = true, value_enum)]
    on_validation_error: Option<ValidationPolicy>,

    /// Word list file replacing the built-in list of the chosen language (offline)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode, one guess per line
    Simple,

    /// Show the feedback a guess gets against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Show word-list statistics
    Stats,
}

impl Cli {
    /// Stored config with command-line overrides applied
    fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(language) = self.lang {
            config.language = language;
        }
        if self.offline {
            config.offline = true;
        }
        if let Some(url) = &self.api_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(policy) = self.on_validation_error {
            config.on_validation_error = policy;
        }
        if let Some(path) = &self.wordlist {
            config.word_list = Some(path.clone());
        }
        config
    }

    fn log_target(&self, interactive: bool) -> LogTarget {
        match (&self.log_file, interactive) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let interactive = matches!(command, Commands::Play);

    logging::init(cli.verbose, &cli.log_target(interactive)).context("could not open log file")?;

    let store = cli
        .config
        .as_ref()
        .map_or_else(FileConfigStore::new, FileConfigStore::with_path);
    let config = cli.apply(store.load());
    tracing::debug!(?config, path = %store.path().display(), "configuration loaded");

    match command {
        Commands::Play => run_play_command(config, store).await,
        Commands::Simple => {
            let services = Services::from_config(&config)?;
            run_simple(services, &config).await?;
            Ok(())
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target, config.language)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let report = collect_stats(&config, config.language).await?;
            print_stats(&report);
            Ok(())
        }
    }
}

async fn run_play_command(config: GameConfig, store: FileConfigStore) -> Result<()> {
    use wordle_click::interactive::{App, run_tui};

    let services = Services::from_config(&config)?;
    let app = App::new(services, config, Box::new(store)).await;
    run_tui(app).await
}
