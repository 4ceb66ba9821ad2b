//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set. Otherwise the `-v` count picks the level for
//! this crate while dependencies stay at `warn`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Line mode and one-shot commands
    Stderr,
    /// Appended to a file; the only option while the TUI owns the terminal
    File(PathBuf),
    /// No subscriber at all
    Off,
}

/// Default filter for a `-v` count
#[must_use]
pub fn directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the global subscriber
///
/// Calling this twice keeps the first subscriber.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init(verbosity: u8, target: &LogTarget) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));

    let result = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file: File = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, "subscriber already installed");
    }
    Ok(())
}
