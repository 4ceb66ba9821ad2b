//! Terminal output formatting
//!
//! Display utilities for line mode, one-shot commands and the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_check_result, print_game_over, print_keyboard, print_stats,
};
