//! Command implementations

mod assist;

pub use assist::{AssistReport, parse_puzzles, run_assist};
