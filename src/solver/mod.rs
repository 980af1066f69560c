//! Solving pipeline
//!
//! Constraint filtering and candidate scoring, plus the per-puzzle solve
//! orchestration.

mod engine;
pub mod filter;
pub mod scorer;

pub use engine::{Puzzle, Solution, best_overall, solve, solve_all};
