//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, Statistics, action_for_key, run_tui};
