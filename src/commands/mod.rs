//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use stats::{StatsReport, StatsSource, collect_stats};
